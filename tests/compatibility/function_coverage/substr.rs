// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Recorded PostgreSQL results for substr

use crate::compatibility::common::run_cases;
use crate::compatibility::common::Outcome::*;

/// substr with a start before the string and with negative lengths
#[test]
fn function_test_substr() {
    run_cases(&[
        ("SELECT substr('', 0::int4)", Text("")),
        ("SELECT substr(' ', 0::int4)", Text(" ")),
        ("SELECT substr('0', 0::int4)", Text("0")),
        ("SELECT substr('1', 0::int4)", Text("1")),
        ("SELECT substr('a', 0::int4)", Text("a")),
        ("SELECT substr('abc', 0::int4)", Text("abc")),
        ("SELECT substr('123', 0::int4)", Text("123")),
        ("SELECT substr('value', 0::int4)", Text("value")),
        ("SELECT substr('12345', 0::int4)", Text("12345")),
        ("SELECT substr('something', 0::int4)", Text("something")),
        ("SELECT substr(' something', 0::int4)", Text(" something")),
        ("SELECT substr('something ', 0::int4)", Text("something ")),
        ("SELECT substr('123456789', 0::int4)", Text("123456789")),
        ("SELECT substr('a group of words', 0::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', 0::int4)", Text("1234567890123456")),
        ("SELECT substr('', -1::int4)", Text("")),
        ("SELECT substr(' ', -1::int4)", Text(" ")),
        ("SELECT substr('0', -1::int4)", Text("0")),
        ("SELECT substr('1', -1::int4)", Text("1")),
        ("SELECT substr('a', -1::int4)", Text("a")),
        ("SELECT substr('abc', -1::int4)", Text("abc")),
        ("SELECT substr('123', -1::int4)", Text("123")),
        ("SELECT substr('value', -1::int4)", Text("value")),
        ("SELECT substr('12345', -1::int4)", Text("12345")),
        ("SELECT substr('something', -1::int4)", Text("something")),
        ("SELECT substr(' something', -1::int4)", Text(" something")),
        ("SELECT substr('something ', -1::int4)", Text("something ")),
        ("SELECT substr('123456789', -1::int4)", Text("123456789")),
        ("SELECT substr('a group of words', -1::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', -1::int4)", Text("1234567890123456")),
        ("SELECT substr('', 1::int4)", Text("")),
        ("SELECT substr(' ', 1::int4)", Text(" ")),
        ("SELECT substr('0', 1::int4)", Text("0")),
        ("SELECT substr('1', 1::int4)", Text("1")),
        ("SELECT substr('a', 1::int4)", Text("a")),
        ("SELECT substr('abc', 1::int4)", Text("abc")),
        ("SELECT substr('123', 1::int4)", Text("123")),
        ("SELECT substr('value', 1::int4)", Text("value")),
        ("SELECT substr('12345', 1::int4)", Text("12345")),
        ("SELECT substr('something', 1::int4)", Text("something")),
        ("SELECT substr(' something', 1::int4)", Text(" something")),
        ("SELECT substr('something ', 1::int4)", Text("something ")),
        ("SELECT substr('123456789', 1::int4)", Text("123456789")),
        ("SELECT substr('a group of words', 1::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', 1::int4)", Text("1234567890123456")),
        ("SELECT substr('', 2::int4)", Text("")),
        ("SELECT substr(' ', 2::int4)", Text("")),
        ("SELECT substr('0', 2::int4)", Text("")),
        ("SELECT substr('1', 2::int4)", Text("")),
        ("SELECT substr('a', 2::int4)", Text("")),
        ("SELECT substr('abc', 2::int4)", Text("bc")),
        ("SELECT substr('123', 2::int4)", Text("23")),
        ("SELECT substr('value', 2::int4)", Text("alue")),
        ("SELECT substr('12345', 2::int4)", Text("2345")),
        ("SELECT substr('something', 2::int4)", Text("omething")),
        ("SELECT substr(' something', 2::int4)", Text("something")),
        ("SELECT substr('something ', 2::int4)", Text("omething ")),
        ("SELECT substr('123456789', 2::int4)", Text("23456789")),
        ("SELECT substr('a group of words', 2::int4)", Text(" group of words")),
        ("SELECT substr('1234567890123456', 2::int4)", Text("234567890123456")),
        ("SELECT substr('', -2::int4)", Text("")),
        ("SELECT substr(' ', -2::int4)", Text(" ")),
        ("SELECT substr('0', -2::int4)", Text("0")),
        ("SELECT substr('1', -2::int4)", Text("1")),
        ("SELECT substr('a', -2::int4)", Text("a")),
        ("SELECT substr('abc', -2::int4)", Text("abc")),
        ("SELECT substr('123', -2::int4)", Text("123")),
        ("SELECT substr('value', -2::int4)", Text("value")),
        ("SELECT substr('12345', -2::int4)", Text("12345")),
        ("SELECT substr('something', -2::int4)", Text("something")),
        ("SELECT substr(' something', -2::int4)", Text(" something")),
        ("SELECT substr('something ', -2::int4)", Text("something ")),
        ("SELECT substr('123456789', -2::int4)", Text("123456789")),
        ("SELECT substr('a group of words', -2::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', -2::int4)", Text("1234567890123456")),
        ("SELECT substr('', 5::int4)", Text("")),
        ("SELECT substr(' ', 5::int4)", Text("")),
        ("SELECT substr('0', 5::int4)", Text("")),
        ("SELECT substr('1', 5::int4)", Text("")),
        ("SELECT substr('a', 5::int4)", Text("")),
        ("SELECT substr('abc', 5::int4)", Text("")),
        ("SELECT substr('123', 5::int4)", Text("")),
        ("SELECT substr('value', 5::int4)", Text("e")),
        ("SELECT substr('12345', 5::int4)", Text("5")),
        ("SELECT substr('something', 5::int4)", Text("thing")),
        ("SELECT substr(' something', 5::int4)", Text("ething")),
        ("SELECT substr('something ', 5::int4)", Text("thing ")),
        ("SELECT substr('123456789', 5::int4)", Text("56789")),
        ("SELECT substr('a group of words', 5::int4)", Text("oup of words")),
        ("SELECT substr('1234567890123456', 5::int4)", Text("567890123456")),
        ("SELECT substr('', 10::int4)", Text("")),
        ("SELECT substr(' ', 10::int4)", Text("")),
        ("SELECT substr('0', 10::int4)", Text("")),
        ("SELECT substr('1', 10::int4)", Text("")),
        ("SELECT substr('a', 10::int4)", Text("")),
        ("SELECT substr('abc', 10::int4)", Text("")),
        ("SELECT substr('123', 10::int4)", Text("")),
        ("SELECT substr('value', 10::int4)", Text("")),
        ("SELECT substr('12345', 10::int4)", Text("")),
        ("SELECT substr('something', 10::int4)", Text("")),
        ("SELECT substr(' something', 10::int4)", Text("g")),
        ("SELECT substr('something ', 10::int4)", Text(" ")),
        ("SELECT substr('123456789', 10::int4)", Text("")),
        ("SELECT substr('a group of words', 10::int4)", Text("f words")),
        ("SELECT substr('1234567890123456', 10::int4)", Text("0123456")),
        ("SELECT substr('', -10::int4)", Text("")),
        ("SELECT substr(' ', -10::int4)", Text(" ")),
        ("SELECT substr('0', -10::int4)", Text("0")),
        ("SELECT substr('1', -10::int4)", Text("1")),
        ("SELECT substr('a', -10::int4)", Text("a")),
        ("SELECT substr('abc', -10::int4)", Text("abc")),
        ("SELECT substr('123', -10::int4)", Text("123")),
        ("SELECT substr('value', -10::int4)", Text("value")),
        ("SELECT substr('12345', -10::int4)", Text("12345")),
        ("SELECT substr('something', -10::int4)", Text("something")),
        ("SELECT substr(' something', -10::int4)", Text(" something")),
        ("SELECT substr('something ', -10::int4)", Text("something ")),
        ("SELECT substr('123456789', -10::int4)", Text("123456789")),
        ("SELECT substr('a group of words', -10::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', -10::int4)", Text("1234567890123456")),
        ("SELECT substr('', 100::int4)", Text("")),
        ("SELECT substr(' ', 100::int4)", Text("")),
        ("SELECT substr('0', 100::int4)", Text("")),
        ("SELECT substr('1', 100::int4)", Text("")),
        ("SELECT substr('a', 100::int4)", Text("")),
        ("SELECT substr('abc', 100::int4)", Text("")),
        ("SELECT substr('123', 100::int4)", Text("")),
        ("SELECT substr('value', 100::int4)", Text("")),
        ("SELECT substr('12345', 100::int4)", Text("")),
        ("SELECT substr('something', 100::int4)", Text("")),
        ("SELECT substr(' something', 100::int4)", Text("")),
        ("SELECT substr('something ', 100::int4)", Text("")),
        ("SELECT substr('123456789', 100::int4)", Text("")),
        ("SELECT substr('a group of words', 100::int4)", Text("")),
        ("SELECT substr('1234567890123456', 100::int4)", Text("")),
        ("SELECT substr('', 21050::int4)", Text("")),
        ("SELECT substr(' ', 21050::int4)", Text("")),
        ("SELECT substr('0', 21050::int4)", Text("")),
        ("SELECT substr('1', 21050::int4)", Text("")),
        ("SELECT substr('a', 21050::int4)", Text("")),
        ("SELECT substr('abc', 21050::int4)", Text("")),
        ("SELECT substr('123', 21050::int4)", Text("")),
        ("SELECT substr('value', 21050::int4)", Text("")),
        ("SELECT substr('12345', 21050::int4)", Text("")),
        ("SELECT substr('something', 21050::int4)", Text("")),
        ("SELECT substr(' something', 21050::int4)", Text("")),
        ("SELECT substr('something ', 21050::int4)", Text("")),
        ("SELECT substr('123456789', 21050::int4)", Text("")),
        ("SELECT substr('a group of words', 21050::int4)", Text("")),
        ("SELECT substr('1234567890123456', 21050::int4)", Text("")),
        ("SELECT substr('', 100000::int4)", Text("")),
        ("SELECT substr(' ', 100000::int4)", Text("")),
        ("SELECT substr('0', 100000::int4)", Text("")),
        ("SELECT substr('1', 100000::int4)", Text("")),
        ("SELECT substr('a', 100000::int4)", Text("")),
        ("SELECT substr('abc', 100000::int4)", Text("")),
        ("SELECT substr('123', 100000::int4)", Text("")),
        ("SELECT substr('value', 100000::int4)", Text("")),
        ("SELECT substr('12345', 100000::int4)", Text("")),
        ("SELECT substr('something', 100000::int4)", Text("")),
        ("SELECT substr(' something', 100000::int4)", Text("")),
        ("SELECT substr('something ', 100000::int4)", Text("")),
        ("SELECT substr('123456789', 100000::int4)", Text("")),
        ("SELECT substr('a group of words', 100000::int4)", Text("")),
        ("SELECT substr('1234567890123456', 100000::int4)", Text("")),
        ("SELECT substr('', -1184280::int4)", Text("")),
        ("SELECT substr(' ', -1184280::int4)", Text(" ")),
        ("SELECT substr('0', -1184280::int4)", Text("0")),
        ("SELECT substr('1', -1184280::int4)", Text("1")),
        ("SELECT substr('a', -1184280::int4)", Text("a")),
        ("SELECT substr('abc', -1184280::int4)", Text("abc")),
        ("SELECT substr('123', -1184280::int4)", Text("123")),
        ("SELECT substr('value', -1184280::int4)", Text("value")),
        ("SELECT substr('12345', -1184280::int4)", Text("12345")),
        ("SELECT substr('something', -1184280::int4)", Text("something")),
        ("SELECT substr(' something', -1184280::int4)", Text(" something")),
        ("SELECT substr('something ', -1184280::int4)", Text("something ")),
        ("SELECT substr('123456789', -1184280::int4)", Text("123456789")),
        ("SELECT substr('a group of words', -1184280::int4)", Text("a group of words")),
        ("SELECT substr('1234567890123456', -1184280::int4)", Text("1234567890123456")),
        ("SELECT substr('', 2525280::int4)", Text("")),
        ("SELECT substr(' ', 2525280::int4)", Text("")),
        ("SELECT substr('0', 2525280::int4)", Text("")),
        ("SELECT substr('1', 2525280::int4)", Text("")),
        ("SELECT substr('a', 2525280::int4)", Text("")),
        ("SELECT substr('abc', 2525280::int4)", Text("")),
        ("SELECT substr('123', 2525280::int4)", Text("")),
        ("SELECT substr('value', 2525280::int4)", Text("")),
        ("SELECT substr('12345', 2525280::int4)", Text("")),
        ("SELECT substr('something', 2525280::int4)", Text("")),
        ("SELECT substr(' something', 2525280::int4)", Text("")),
        ("SELECT substr('something ', 2525280::int4)", Text("")),
        ("SELECT substr('123456789', 2525280::int4)", Text("")),
        ("SELECT substr('a group of words', 2525280::int4)", Text("")),
        ("SELECT substr('1234567890123456', 2525280::int4)", Text("")),
        ("SELECT substr('', -2147483648::int4)", Error),
        ("SELECT substr(' ', -2147483648::int4)", Error),
        ("SELECT substr('0', -2147483648::int4)", Error),
        ("SELECT substr('1', -2147483648::int4)", Error),
        ("SELECT substr('a', -2147483648::int4)", Error),
        ("SELECT substr('abc', -2147483648::int4)", Error),
        ("SELECT substr('123', -2147483648::int4)", Error),
        ("SELECT substr('value', -2147483648::int4)", Error),
        ("SELECT substr('12345', -2147483648::int4)", Error),
        ("SELECT substr('something', -2147483648::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4)", Error),
        ("SELECT substr('something ', -2147483648::int4)", Error),
        ("SELECT substr('123456789', -2147483648::int4)", Error),
        ("SELECT substr('a group of words', -2147483648::int4)", Error),
        ("SELECT substr('1234567890123456', -2147483648::int4)", Error),
        ("SELECT substr('', 2147483647::int4)", Text("")),
        ("SELECT substr(' ', 2147483647::int4)", Text("")),
        ("SELECT substr('0', 2147483647::int4)", Text("")),
        ("SELECT substr('1', 2147483647::int4)", Text("")),
        ("SELECT substr('a', 2147483647::int4)", Text("")),
        ("SELECT substr('abc', 2147483647::int4)", Text("")),
        ("SELECT substr('123', 2147483647::int4)", Text("")),
        ("SELECT substr('value', 2147483647::int4)", Text("")),
        ("SELECT substr('12345', 2147483647::int4)", Text("")),
        ("SELECT substr('something', 2147483647::int4)", Text("")),
        ("SELECT substr(' something', 2147483647::int4)", Text("")),
        ("SELECT substr('something ', 2147483647::int4)", Text("")),
        ("SELECT substr('123456789', 2147483647::int4)", Text("")),
        ("SELECT substr('a group of words', 2147483647::int4)", Text("")),
        ("SELECT substr('1234567890123456', 2147483647::int4)", Text("")),
        ("SELECT substr('0', 0::int4, 0::int4)", Text("")),
        ("SELECT substr('1', 0::int4, 0::int4)", Text("")),
        ("SELECT substr('a', 0::int4, 0::int4)", Text("")),
        ("SELECT substr(' something', 0::int4, 0::int4)", Text("")),
        ("SELECT substr('123456789', 0::int4, 0::int4)", Text("")),
        ("SELECT substr('something ', 1::int4, 0::int4)", Text("")),
        ("SELECT substr('1234567890123456', 1::int4, 0::int4)", Text("")),
        ("SELECT substr('0', 2::int4, 0::int4)", Text("")),
        ("SELECT substr('value', 2::int4, 0::int4)", Text("")),
        ("SELECT substr(' something', 2::int4, 0::int4)", Text("")),
        ("SELECT substr('a group of words', 2::int4, 0::int4)", Text("")),
        ("SELECT substr('', -2::int4, 0::int4)", Text("")),
        ("SELECT substr('123456789', -2::int4, 0::int4)", Text("")),
        ("SELECT substr('abc', 5::int4, 0::int4)", Text("")),
        ("SELECT substr('1', 10::int4, 0::int4)", Text("")),
        ("SELECT substr('123', 10::int4, 0::int4)", Text("")),
        ("SELECT substr(' something', 10::int4, 0::int4)", Text("")),
        ("SELECT substr('abc', -10::int4, 0::int4)", Text("")),
        ("SELECT substr('12345', -10::int4, 0::int4)", Text("")),
        ("SELECT substr(' ', 100::int4, 0::int4)", Text("")),
        ("SELECT substr('0', 100::int4, 0::int4)", Text("")),
        ("SELECT substr('0', 21050::int4, 0::int4)", Text("")),
        ("SELECT substr('a', 21050::int4, 0::int4)", Text("")),
        ("SELECT substr('1', 100000::int4, 0::int4)", Text("")),
        ("SELECT substr('abc', 100000::int4, 0::int4)", Text("")),
        ("SELECT substr('something', 100000::int4, 0::int4)", Text("")),
        ("SELECT substr('something ', 100000::int4, 0::int4)", Text("")),
        ("SELECT substr('value', -1184280::int4, 0::int4)", Text("")),
        ("SELECT substr('a group of words', 2525280::int4, 0::int4)", Text("")),
        ("SELECT substr('something ', 2147483647::int4, 0::int4)", Text("")),
        ("SELECT substr('1234567890123456', 2147483647::int4, 0::int4)", Text("")),
        ("SELECT substr('123', 0::int4, -1::int4)", Error),
        ("SELECT substr('something', 0::int4, -1::int4)", Error),
        ("SELECT substr('a group of words', 0::int4, -1::int4)", Error),
        ("SELECT substr(' ', -1::int4, -1::int4)", Error),
        ("SELECT substr('0', -1::int4, -1::int4)", Error),
        ("SELECT substr('a group of words', -1::int4, -1::int4)", Error),
        ("SELECT substr(' ', 1::int4, -1::int4)", Error),
        ("SELECT substr('something', 1::int4, -1::int4)", Error),
        ("SELECT substr(' something', 1::int4, -1::int4)", Error),
        ("SELECT substr('1', 2::int4, -1::int4)", Error),
        ("SELECT substr('12345', 2::int4, -1::int4)", Error),
        ("SELECT substr('123456789', 2::int4, -1::int4)", Error),
        ("SELECT substr('123', -2::int4, -1::int4)", Error),
        ("SELECT substr('1234567890123456', -2::int4, -1::int4)", Error),
        ("SELECT substr('1', 5::int4, -1::int4)", Error),
        ("SELECT substr('12345', 10::int4, -1::int4)", Error),
        ("SELECT substr('something', -10::int4, -1::int4)", Error),
        ("SELECT substr(' ', 100::int4, -1::int4)", Error),
        ("SELECT substr('0', 100::int4, -1::int4)", Error),
        ("SELECT substr(' something', 100::int4, -1::int4)", Error),
        ("SELECT substr('123456789', 100::int4, -1::int4)", Error),
        ("SELECT substr('', 21050::int4, -1::int4)", Error),
        ("SELECT substr('123', 21050::int4, -1::int4)", Error),
        ("SELECT substr('12345', 21050::int4, -1::int4)", Error),
        ("SELECT substr('a', 100000::int4, -1::int4)", Error),
        ("SELECT substr('', -1184280::int4, -1::int4)", Error),
        ("SELECT substr('123456789', -1184280::int4, -1::int4)", Error),
        ("SELECT substr(' ', 2525280::int4, -1::int4)", Error),
        ("SELECT substr('abc', 2525280::int4, -1::int4)", Error),
        ("SELECT substr('something ', -2147483648::int4, -1::int4)", Error),
        ("SELECT substr('123', 2147483647::int4, -1::int4)", Error),
        ("SELECT substr('value', 2147483647::int4, -1::int4)", Error),
        ("SELECT substr('12345', 2147483647::int4, -1::int4)", Error),
        ("SELECT substr('something ', 2147483647::int4, -1::int4)", Error),
        ("SELECT substr('1234567890123456', 2147483647::int4, -1::int4)", Error),
        ("SELECT substr('something', -1::int4, 1::int4)", Text("")),
        ("SELECT substr(' ', 2::int4, 1::int4)", Text("")),
        ("SELECT substr('123', -2::int4, 1::int4)", Text("")),
        ("SELECT substr('value', -2::int4, 1::int4)", Text("")),
        ("SELECT substr('something ', -2::int4, 1::int4)", Text("")),
        ("SELECT substr('0', 5::int4, 1::int4)", Text("")),
        ("SELECT substr('1', 5::int4, 1::int4)", Text("")),
        ("SELECT substr('a', 5::int4, 1::int4)", Text("")),
        ("SELECT substr('123', 5::int4, 1::int4)", Text("")),
        ("SELECT substr('', 10::int4, 1::int4)", Text("")),
        ("SELECT substr('12345', 10::int4, 1::int4)", Text("")),
        ("SELECT substr(' something', 10::int4, 1::int4)", Text("g")),
        ("SELECT substr('123456789', -10::int4, 1::int4)", Text("")),
        ("SELECT substr('', 100::int4, 1::int4)", Text("")),
        ("SELECT substr(' ', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('a', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('abc', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('value', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('something', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('a group of words', 100::int4, 1::int4)", Text("")),
        ("SELECT substr('a', 21050::int4, 1::int4)", Text("")),
        ("SELECT substr('abc', 21050::int4, 1::int4)", Text("")),
        ("SELECT substr('12345', 100000::int4, 1::int4)", Text("")),
        ("SELECT substr(' something', 100000::int4, 1::int4)", Text("")),
        ("SELECT substr('a', -1184280::int4, 1::int4)", Text("")),
        ("SELECT substr('12345', -1184280::int4, 1::int4)", Text("")),
        ("SELECT substr('something ', -1184280::int4, 1::int4)", Text("")),
        ("SELECT substr('', 2525280::int4, 1::int4)", Text("")),
        ("SELECT substr(' ', 2525280::int4, 1::int4)", Text("")),
        ("SELECT substr('1', 2525280::int4, 1::int4)", Text("")),
        ("SELECT substr('', 2147483647::int4, 1::int4)", Text("")),
        ("SELECT substr('0', 2147483647::int4, 1::int4)", Text("")),
        ("SELECT substr('1', 2147483647::int4, 1::int4)", Text("")),
        ("SELECT substr('value', 2147483647::int4, 1::int4)", Text("")),
        ("SELECT substr('1', 0::int4, 2::int4)", Text("1")),
        ("SELECT substr('12345', 0::int4, 2::int4)", Text("1")),
        ("SELECT substr('a group of words', 0::int4, 2::int4)", Text("a")),
        ("SELECT substr('1', -1::int4, 2::int4)", Text("")),
        ("SELECT substr('a group of words', -1::int4, 2::int4)", Text("")),
        ("SELECT substr(' ', 1::int4, 2::int4)", Text(" ")),
        ("SELECT substr('value', 2::int4, 2::int4)", Text("al")),
        ("SELECT substr('something ', 2::int4, 2::int4)", Text("om")),
        ("SELECT substr('value', -2::int4, 2::int4)", Text("")),
        ("SELECT substr('something', -2::int4, 2::int4)", Text("")),
        ("SELECT substr(' something', -2::int4, 2::int4)", Text("")),
        ("SELECT substr('0', 5::int4, 2::int4)", Text("")),
        ("SELECT substr(' something', 5::int4, 2::int4)", Text("et")),
        ("SELECT substr('1234567890123456', 5::int4, 2::int4)", Text("56")),
        ("SELECT substr(' ', 10::int4, 2::int4)", Text("")),
        ("SELECT substr('0', 10::int4, 2::int4)", Text("")),
        ("SELECT substr('123', 10::int4, 2::int4)", Text("")),
        ("SELECT substr(' something', 10::int4, 2::int4)", Text("g")),
        ("SELECT substr('123456789', 10::int4, 2::int4)", Text("")),
        ("SELECT substr('a', 100::int4, 2::int4)", Text("")),
        ("SELECT substr('12345', 100::int4, 2::int4)", Text("")),
        ("SELECT substr(' something', 100::int4, 2::int4)", Text("")),
        ("SELECT substr('1', 21050::int4, 2::int4)", Text("")),
        ("SELECT substr('abc', 100000::int4, 2::int4)", Text("")),
        ("SELECT substr('123', 100000::int4, 2::int4)", Text("")),
        ("SELECT substr('12345', 100000::int4, 2::int4)", Text("")),
        ("SELECT substr('something', 100000::int4, 2::int4)", Text("")),
        ("SELECT substr('1', -1184280::int4, 2::int4)", Text("")),
        ("SELECT substr('something', -1184280::int4, 2::int4)", Text("")),
        ("SELECT substr(' something', -1184280::int4, 2::int4)", Text("")),
        ("SELECT substr('1', 2525280::int4, 2::int4)", Text("")),
        ("SELECT substr('a group of words', 2525280::int4, 2::int4)", Text("")),
        ("SELECT substr('a group of words', -2147483648::int4, 2::int4)", Error),
        ("SELECT substr('something', 2147483647::int4, 2::int4)", Text("")),
        ("SELECT substr('123456789', 2147483647::int4, 2::int4)", Text("")),
        ("SELECT substr('', 0::int4, -2::int4)", Error),
        ("SELECT substr('abc', 0::int4, -2::int4)", Error),
        ("SELECT substr('a group of words', 0::int4, -2::int4)", Error),
        ("SELECT substr(' ', 1::int4, -2::int4)", Error),
        ("SELECT substr('1', 2::int4, -2::int4)", Error),
        ("SELECT substr(' something', 2::int4, -2::int4)", Error),
        ("SELECT substr('something ', 2::int4, -2::int4)", Error),
        ("SELECT substr('12345', -2::int4, -2::int4)", Error),
        ("SELECT substr('', 5::int4, -2::int4)", Error),
        ("SELECT substr(' ', 5::int4, -2::int4)", Error),
        ("SELECT substr('value', 5::int4, -2::int4)", Error),
        ("SELECT substr(' ', -10::int4, -2::int4)", Error),
        ("SELECT substr('0', -10::int4, -2::int4)", Error),
        ("SELECT substr(' ', 100::int4, -2::int4)", Error),
        ("SELECT substr('12345', 100::int4, -2::int4)", Error),
        ("SELECT substr('a group of words', 21050::int4, -2::int4)", Error),
        ("SELECT substr(' ', 100000::int4, -2::int4)", Error),
        ("SELECT substr('123', 100000::int4, -2::int4)", Error),
        ("SELECT substr('something ', 100000::int4, -2::int4)", Error),
        ("SELECT substr('1234567890123456', 100000::int4, -2::int4)", Error),
        ("SELECT substr('abc', -1184280::int4, -2::int4)", Error),
        ("SELECT substr('12345', -1184280::int4, -2::int4)", Error),
        ("SELECT substr('123456789', -1184280::int4, -2::int4)", Error),
        ("SELECT substr('0', 2525280::int4, -2::int4)", Error),
        ("SELECT substr('value', 2525280::int4, -2::int4)", Error),
        ("SELECT substr('a', -2147483648::int4, -2::int4)", Error),
        ("SELECT substr('12345', -2147483648::int4, -2::int4)", Error),
        ("SELECT substr('something', -2147483648::int4, -2::int4)", Error),
        ("SELECT substr('', 0::int4, 5::int4)", Text("")),
        ("SELECT substr('something', 0::int4, 5::int4)", Text("some")),
        ("SELECT substr(' something', 0::int4, 5::int4)", Text(" som")),
        ("SELECT substr('1', -1::int4, 5::int4)", Text("1")),
        ("SELECT substr('abc', 1::int4, 5::int4)", Text("abc")),
        ("SELECT substr('value', 1::int4, 5::int4)", Text("value")),
        ("SELECT substr('a', 2::int4, 5::int4)", Text("")),
        ("SELECT substr('something', -2::int4, 5::int4)", Text("so")),
        ("SELECT substr(' ', 5::int4, 5::int4)", Text("")),
        ("SELECT substr('something ', 5::int4, 5::int4)", Text("thing")),
        ("SELECT substr(' ', -10::int4, 5::int4)", Text("")),
        ("SELECT substr('abc', -10::int4, 5::int4)", Text("")),
        ("SELECT substr('value', -10::int4, 5::int4)", Text("")),
        ("SELECT substr(' something', -10::int4, 5::int4)", Text("")),
        ("SELECT substr('123456789', -10::int4, 5::int4)", Text("")),
        ("SELECT substr('', 100::int4, 5::int4)", Text("")),
        ("SELECT substr('123456789', 100::int4, 5::int4)", Text("")),
        ("SELECT substr('', 21050::int4, 5::int4)", Text("")),
        ("SELECT substr('0', 21050::int4, 5::int4)", Text("")),
        ("SELECT substr('something', 21050::int4, 5::int4)", Text("")),
        ("SELECT substr('something ', 21050::int4, 5::int4)", Text("")),
        ("SELECT substr('something ', 100000::int4, 5::int4)", Text("")),
        ("SELECT substr('12345', -1184280::int4, 5::int4)", Text("")),
        ("SELECT substr(' something', 2525280::int4, 5::int4)", Text("")),
        ("SELECT substr('', -2147483648::int4, 5::int4)", Error),
        ("SELECT substr('1', -2147483648::int4, 5::int4)", Error),
        ("SELECT substr('a', -2147483648::int4, 5::int4)", Error),
        ("SELECT substr('something', -2147483648::int4, 5::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4, 5::int4)", Error),
        ("SELECT substr('', 2147483647::int4, 5::int4)", Text("")),
        ("SELECT substr('12345', 2147483647::int4, 5::int4)", Text("")),
        ("SELECT substr(' ', 0::int4, 10::int4)", Text(" ")),
        ("SELECT substr('abc', 0::int4, 10::int4)", Text("abc")),
        ("SELECT substr('a', -1::int4, 10::int4)", Text("a")),
        ("SELECT substr('value', -1::int4, 10::int4)", Text("value")),
        ("SELECT substr('0', 1::int4, 10::int4)", Text("0")),
        ("SELECT substr('123456789', 2::int4, 10::int4)", Text("23456789")),
        ("SELECT substr(' ', -2::int4, 10::int4)", Text(" ")),
        ("SELECT substr('abc', -2::int4, 10::int4)", Text("abc")),
        ("SELECT substr('', 5::int4, 10::int4)", Text("")),
        ("SELECT substr('123', 5::int4, 10::int4)", Text("")),
        ("SELECT substr('123456789', 5::int4, 10::int4)", Text("56789")),
        ("SELECT substr('1234567890123456', 5::int4, 10::int4)", Text("5678901234")),
        ("SELECT substr('', 10::int4, 10::int4)", Text("")),
        ("SELECT substr(' ', -10::int4, 10::int4)", Text("")),
        ("SELECT substr('0', -10::int4, 10::int4)", Text("")),
        ("SELECT substr('1', -10::int4, 10::int4)", Text("")),
        ("SELECT substr(' something', -10::int4, 10::int4)", Text("")),
        ("SELECT substr('a', 100::int4, 10::int4)", Text("")),
        ("SELECT substr('123', 100::int4, 10::int4)", Text("")),
        ("SELECT substr(' ', 21050::int4, 10::int4)", Text("")),
        ("SELECT substr('a', 21050::int4, 10::int4)", Text("")),
        ("SELECT substr('1234567890123456', 21050::int4, 10::int4)", Text("")),
        ("SELECT substr(' ', 100000::int4, 10::int4)", Text("")),
        ("SELECT substr('0', 100000::int4, 10::int4)", Text("")),
        ("SELECT substr('a group of words', 100000::int4, 10::int4)", Text("")),
        ("SELECT substr('1234567890123456', 100000::int4, 10::int4)", Text("")),
        ("SELECT substr('abc', -1184280::int4, 10::int4)", Text("")),
        ("SELECT substr(' something', -1184280::int4, 10::int4)", Text("")),
        ("SELECT substr('1234567890123456', -1184280::int4, 10::int4)", Text("")),
        ("SELECT substr('', 2525280::int4, 10::int4)", Text("")),
        ("SELECT substr('something ', 2525280::int4, 10::int4)", Text("")),
        ("SELECT substr('1234567890123456', 2525280::int4, 10::int4)", Text("")),
        ("SELECT substr(' ', -2147483648::int4, 10::int4)", Error),
        ("SELECT substr('1', -2147483648::int4, 10::int4)", Error),
        ("SELECT substr('123', -2147483648::int4, 10::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4, 10::int4)", Error),
        ("SELECT substr(' ', 2147483647::int4, 10::int4)", Text("")),
        ("SELECT substr('0', 2147483647::int4, 10::int4)", Text("")),
        ("SELECT substr('123', 2147483647::int4, 10::int4)", Text("")),
        ("SELECT substr('1', 0::int4, -10::int4)", Error),
        ("SELECT substr('something ', 0::int4, -10::int4)", Error),
        ("SELECT substr('123456789', 0::int4, -10::int4)", Error),
        ("SELECT substr(' something', -1::int4, -10::int4)", Error),
        ("SELECT substr('something ', 1::int4, -10::int4)", Error),
        ("SELECT substr('', 2::int4, -10::int4)", Error),
        ("SELECT substr('0', 2::int4, -10::int4)", Error),
        ("SELECT substr('value', 2::int4, -10::int4)", Error),
        ("SELECT substr('123456789', 2::int4, -10::int4)", Error),
        ("SELECT substr('abc', -2::int4, -10::int4)", Error),
        ("SELECT substr('123456789', -2::int4, -10::int4)", Error),
        ("SELECT substr('', 5::int4, -10::int4)", Error),
        ("SELECT substr('123', 5::int4, -10::int4)", Error),
        ("SELECT substr('', 10::int4, -10::int4)", Error),
        ("SELECT substr('1', 10::int4, -10::int4)", Error),
        ("SELECT substr('something ', 10::int4, -10::int4)", Error),
        ("SELECT substr('a group of words', 10::int4, -10::int4)", Error),
        ("SELECT substr('0', -10::int4, -10::int4)", Error),
        ("SELECT substr('value', -10::int4, -10::int4)", Error),
        ("SELECT substr('', 100::int4, -10::int4)", Error),
        ("SELECT substr('value', 21050::int4, -10::int4)", Error),
        ("SELECT substr('', 100000::int4, -10::int4)", Error),
        ("SELECT substr(' ', 100000::int4, -10::int4)", Error),
        ("SELECT substr('0', 100000::int4, -10::int4)", Error),
        ("SELECT substr('something', 100000::int4, -10::int4)", Error),
        ("SELECT substr('', -1184280::int4, -10::int4)", Error),
        ("SELECT substr('a group of words', -1184280::int4, -10::int4)", Error),
        ("SELECT substr('0', 2525280::int4, -10::int4)", Error),
        ("SELECT substr('a', 2525280::int4, -10::int4)", Error),
        ("SELECT substr('abc', 2525280::int4, -10::int4)", Error),
        ("SELECT substr('something', 2525280::int4, -10::int4)", Error),
        ("SELECT substr('123456789', 2525280::int4, -10::int4)", Error),
        ("SELECT substr(' ', -2147483648::int4, -10::int4)", Error),
        ("SELECT substr('1', 2147483647::int4, -10::int4)", Error),
        ("SELECT substr('123', 2147483647::int4, -10::int4)", Error),
        ("SELECT substr('something', 2147483647::int4, -10::int4)", Error),
        ("SELECT substr(' something', 2147483647::int4, -10::int4)", Error),
        ("SELECT substr('0', 0::int4, 100::int4)", Text("0")),
        ("SELECT substr('abc', 0::int4, 100::int4)", Text("abc")),
        ("SELECT substr('123', 0::int4, 100::int4)", Text("123")),
        ("SELECT substr('value', 0::int4, 100::int4)", Text("value")),
        ("SELECT substr(' something', 0::int4, 100::int4)", Text(" something")),
        ("SELECT substr('0', -1::int4, 100::int4)", Text("0")),
        ("SELECT substr('1234567890123456', -1::int4, 100::int4)", Text("1234567890123456")),
        ("SELECT substr('0', 1::int4, 100::int4)", Text("0")),
        ("SELECT substr('123', 1::int4, 100::int4)", Text("123")),
        ("SELECT substr('something', 1::int4, 100::int4)", Text("something")),
        ("SELECT substr('12345', 2::int4, 100::int4)", Text("2345")),
        ("SELECT substr('', -2::int4, 100::int4)", Text("")),
        ("SELECT substr(' ', -2::int4, 100::int4)", Text(" ")),
        ("SELECT substr('123', -2::int4, 100::int4)", Text("123")),
        ("SELECT substr('', 5::int4, 100::int4)", Text("")),
        ("SELECT substr('0', 5::int4, 100::int4)", Text("")),
        ("SELECT substr('abc', 5::int4, 100::int4)", Text("")),
        ("SELECT substr('123', 5::int4, 100::int4)", Text("")),
        ("SELECT substr('1234567890123456', 5::int4, 100::int4)", Text("567890123456")),
        ("SELECT substr('something ', 10::int4, 100::int4)", Text(" ")),
        ("SELECT substr('a', -10::int4, 100::int4)", Text("a")),
        ("SELECT substr('1', 100::int4, 100::int4)", Text("")),
        ("SELECT substr('abc', 100::int4, 100::int4)", Text("")),
        ("SELECT substr('value', 100::int4, 100::int4)", Text("")),
        ("SELECT substr('1', 21050::int4, 100::int4)", Text("")),
        ("SELECT substr('a', 21050::int4, 100::int4)", Text("")),
        ("SELECT substr('12345', 21050::int4, 100::int4)", Text("")),
        ("SELECT substr('something', 100000::int4, 100::int4)", Text("")),
        ("SELECT substr('123456789', 100000::int4, 100::int4)", Text("")),
        ("SELECT substr('123', -1184280::int4, 100::int4)", Text("")),
        ("SELECT substr(' something', -1184280::int4, 100::int4)", Text("")),
        ("SELECT substr('123456789', -1184280::int4, 100::int4)", Text("")),
        ("SELECT substr('value', 2525280::int4, 100::int4)", Text("")),
        ("SELECT substr('12345', 2525280::int4, 100::int4)", Text("")),
        ("SELECT substr('', -2147483648::int4, 100::int4)", Error),
        ("SELECT substr('123', -2147483648::int4, 100::int4)", Error),
        ("SELECT substr('something', -2147483648::int4, 100::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4, 100::int4)", Error),
        ("SELECT substr('1', 2147483647::int4, 100::int4)", Text("")),
        ("SELECT substr('', -1::int4, 21050::int4)", Text("")),
        ("SELECT substr('1234567890123456', -1::int4, 21050::int4)", Text("1234567890123456")),
        ("SELECT substr(' ', 1::int4, 21050::int4)", Text(" ")),
        ("SELECT substr('0', 1::int4, 21050::int4)", Text("0")),
        ("SELECT substr('12345', 2::int4, 21050::int4)", Text("2345")),
        ("SELECT substr('1234567890123456', 2::int4, 21050::int4)", Text("234567890123456")),
        ("SELECT substr('a', -2::int4, 21050::int4)", Text("a")),
        ("SELECT substr('abc', -2::int4, 21050::int4)", Text("abc")),
        ("SELECT substr('12345', -2::int4, 21050::int4)", Text("12345")),
        ("SELECT substr('a group of words', -2::int4, 21050::int4)", Text("a group of words")),
        ("SELECT substr('123', 5::int4, 21050::int4)", Text("")),
        ("SELECT substr('123456789', 5::int4, 21050::int4)", Text("56789")),
        ("SELECT substr('a', 10::int4, 21050::int4)", Text("")),
        ("SELECT substr('0', 100::int4, 21050::int4)", Text("")),
        ("SELECT substr('something', 100::int4, 21050::int4)", Text("")),
        ("SELECT substr('a group of words', 100::int4, 21050::int4)", Text("")),
        ("SELECT substr('something ', 21050::int4, 21050::int4)", Text("")),
        ("SELECT substr('123456789', 21050::int4, 21050::int4)", Text("")),
        ("SELECT substr('a group of words', 21050::int4, 21050::int4)", Text("")),
        ("SELECT substr('a group of words', 100000::int4, 21050::int4)", Text("")),
        ("SELECT substr(' something', -1184280::int4, 21050::int4)", Text("")),
        ("SELECT substr('something ', 2525280::int4, 21050::int4)", Text("")),
        ("SELECT substr('value', 2147483647::int4, 21050::int4)", Text("")),
        ("SELECT substr(' ', -1::int4, 100000::int4)", Text(" ")),
        ("SELECT substr('1', -1::int4, 100000::int4)", Text("1")),
        ("SELECT substr('a', -1::int4, 100000::int4)", Text("a")),
        ("SELECT substr('something', -1::int4, 100000::int4)", Text("something")),
        ("SELECT substr('abc', 1::int4, 100000::int4)", Text("abc")),
        ("SELECT substr('', 2::int4, 100000::int4)", Text("")),
        ("SELECT substr('0', 2::int4, 100000::int4)", Text("")),
        ("SELECT substr('123', 2::int4, 100000::int4)", Text("23")),
        ("SELECT substr('12345', 2::int4, 100000::int4)", Text("2345")),
        ("SELECT substr('value', -2::int4, 100000::int4)", Text("value")),
        ("SELECT substr('something ', -2::int4, 100000::int4)", Text("something ")),
        ("SELECT substr('123456789', -2::int4, 100000::int4)", Text("123456789")),
        ("SELECT substr(' ', 5::int4, 100000::int4)", Text("")),
        ("SELECT substr('a group of words', 5::int4, 100000::int4)", Text("oup of words")),
        ("SELECT substr('a group of words', 10::int4, 100000::int4)", Text("f words")),
        ("SELECT substr('', -10::int4, 100000::int4)", Text("")),
        ("SELECT substr('1', -10::int4, 100000::int4)", Text("1")),
        ("SELECT substr('a', -10::int4, 100000::int4)", Text("a")),
        ("SELECT substr('123', -10::int4, 100000::int4)", Text("123")),
        ("SELECT substr('a', 100::int4, 100000::int4)", Text("")),
        ("SELECT substr('abc', 100::int4, 100000::int4)", Text("")),
        ("SELECT substr('123456789', 100::int4, 100000::int4)", Text("")),
        ("SELECT substr('a group of words', 100::int4, 100000::int4)", Text("")),
        ("SELECT substr('0', 21050::int4, 100000::int4)", Text("")),
        ("SELECT substr('something ', 21050::int4, 100000::int4)", Text("")),
        ("SELECT substr(' ', 100000::int4, 100000::int4)", Text("")),
        ("SELECT substr('0', 100000::int4, 100000::int4)", Text("")),
        ("SELECT substr('123456789', 100000::int4, 100000::int4)", Text("")),
        ("SELECT substr('123', -1184280::int4, 100000::int4)", Text("")),
        ("SELECT substr('1234567890123456', -1184280::int4, 100000::int4)", Text("")),
        ("SELECT substr('', 2525280::int4, 100000::int4)", Text("")),
        ("SELECT substr('a', 2525280::int4, 100000::int4)", Text("")),
        ("SELECT substr('abc', 2525280::int4, 100000::int4)", Text("")),
        ("SELECT substr('a group of words', 2525280::int4, 100000::int4)", Text("")),
        ("SELECT substr('', -2147483648::int4, 100000::int4)", Error),
        ("SELECT substr(' ', -2147483648::int4, 100000::int4)", Error),
        ("SELECT substr('123', -2147483648::int4, 100000::int4)", Error),
        ("SELECT substr('12345', -2147483648::int4, 100000::int4)", Error),
        ("SELECT substr('123456789', -2147483648::int4, 100000::int4)", Error),
        ("SELECT substr('12345', 2147483647::int4, 100000::int4)", Text("")),
        ("SELECT substr(' something', 2147483647::int4, 100000::int4)", Text("")),
        ("SELECT substr('a', 0::int4, -1184280::int4)", Error),
        ("SELECT substr(' ', -1::int4, -1184280::int4)", Error),
        ("SELECT substr('a', -1::int4, -1184280::int4)", Error),
        ("SELECT substr('1234567890123456', -1::int4, -1184280::int4)", Error),
        ("SELECT substr('12345', 1::int4, -1184280::int4)", Error),
        ("SELECT substr('value', 2::int4, -1184280::int4)", Error),
        ("SELECT substr('a group of words', 2::int4, -1184280::int4)", Error),
        ("SELECT substr(' ', -2::int4, -1184280::int4)", Error),
        ("SELECT substr('0', -2::int4, -1184280::int4)", Error),
        ("SELECT substr('1', -2::int4, -1184280::int4)", Error),
        ("SELECT substr('abc', 5::int4, -1184280::int4)", Error),
        ("SELECT substr(' something', 5::int4, -1184280::int4)", Error),
        ("SELECT substr('1234567890123456', 5::int4, -1184280::int4)", Error),
        ("SELECT substr('', 10::int4, -1184280::int4)", Error),
        ("SELECT substr('0', 10::int4, -1184280::int4)", Error),
        ("SELECT substr('0', -10::int4, -1184280::int4)", Error),
        ("SELECT substr('123', -10::int4, -1184280::int4)", Error),
        ("SELECT substr('value', -10::int4, -1184280::int4)", Error),
        ("SELECT substr('123456789', -10::int4, -1184280::int4)", Error),
        ("SELECT substr('1234567890123456', 100::int4, -1184280::int4)", Error),
        ("SELECT substr('0', 21050::int4, -1184280::int4)", Error),
        ("SELECT substr('1234567890123456', 21050::int4, -1184280::int4)", Error),
        ("SELECT substr('something ', 100000::int4, -1184280::int4)", Error),
        ("SELECT substr('a group of words', 100000::int4, -1184280::int4)", Error),
        ("SELECT substr('abc', -1184280::int4, -1184280::int4)", Error),
        ("SELECT substr('something', -1184280::int4, -1184280::int4)", Error),
        ("SELECT substr('123', 2525280::int4, -1184280::int4)", Error),
        ("SELECT substr('value', -2147483648::int4, -1184280::int4)", Error),
        ("SELECT substr('something ', -2147483648::int4, -1184280::int4)", Error),
        ("SELECT substr('a group of words', -2147483648::int4, -1184280::int4)", Error),
        ("SELECT substr('1234567890123456', -2147483648::int4, -1184280::int4)", Error),
        ("SELECT substr('something', 2147483647::int4, -1184280::int4)", Error),
        ("SELECT substr('123456789', 2147483647::int4, -1184280::int4)", Error),
        ("SELECT substr('12345', 0::int4, 2525280::int4)", Text("12345")),
        ("SELECT substr('value', -1::int4, 2525280::int4)", Text("value")),
        ("SELECT substr('a group of words', -1::int4, 2525280::int4)", Text("a group of words")),
        ("SELECT substr(' ', 1::int4, 2525280::int4)", Text(" ")),
        ("SELECT substr('value', 1::int4, 2525280::int4)", Text("value")),
        ("SELECT substr('something ', 1::int4, 2525280::int4)", Text("something ")),
        ("SELECT substr('0', 2::int4, 2525280::int4)", Text("")),
        ("SELECT substr(' something', 2::int4, 2525280::int4)", Text("something")),
        ("SELECT substr('value', -2::int4, 2525280::int4)", Text("value")),
        ("SELECT substr('something', -2::int4, 2525280::int4)", Text("something")),
        ("SELECT substr('a', 5::int4, 2525280::int4)", Text("")),
        ("SELECT substr('something ', 5::int4, 2525280::int4)", Text("thing ")),
        ("SELECT substr('1', 10::int4, 2525280::int4)", Text("")),
        ("SELECT substr('abc', 10::int4, 2525280::int4)", Text("")),
        ("SELECT substr(' ', -10::int4, 2525280::int4)", Text(" ")),
        ("SELECT substr('123', -10::int4, 2525280::int4)", Text("123")),
        ("SELECT substr('a group of words', -10::int4, 2525280::int4)", Text("a group of words")),
        ("SELECT substr('a', 21050::int4, 2525280::int4)", Text("")),
        ("SELECT substr('something ', 21050::int4, 2525280::int4)", Text("")),
        ("SELECT substr('something ', 100000::int4, 2525280::int4)", Text("")),
        ("SELECT substr(' ', 2525280::int4, 2525280::int4)", Text("")),
        ("SELECT substr('123', 2525280::int4, 2525280::int4)", Text("")),
        ("SELECT substr('12345', 2525280::int4, 2525280::int4)", Text("")),
        ("SELECT substr('0', -2147483648::int4, 2525280::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4, 2525280::int4)", Error),
        ("SELECT substr('123456789', 2147483647::int4, 2525280::int4)", Text("")),
        ("SELECT substr('', 0::int4, -2147483648::int4)", Error),
        ("SELECT substr('a', 0::int4, -2147483648::int4)", Error),
        ("SELECT substr('abc', 0::int4, -2147483648::int4)", Error),
        ("SELECT substr('something ', 0::int4, -2147483648::int4)", Error),
        ("SELECT substr('a group of words', 0::int4, -2147483648::int4)", Error),
        ("SELECT substr('', -1::int4, -2147483648::int4)", Error),
        ("SELECT substr('abc', -1::int4, -2147483648::int4)", Error),
        ("SELECT substr('12345', -1::int4, -2147483648::int4)", Error),
        ("SELECT substr('abc', 1::int4, -2147483648::int4)", Error),
        ("SELECT substr('123', 1::int4, -2147483648::int4)", Error),
        ("SELECT substr('something ', 1::int4, -2147483648::int4)", Error),
        ("SELECT substr('123456789', 2::int4, -2147483648::int4)", Error),
        ("SELECT substr('1', -2::int4, -2147483648::int4)", Error),
        ("SELECT substr(' ', 5::int4, -2147483648::int4)", Error),
        ("SELECT substr('a', 10::int4, -2147483648::int4)", Error),
        ("SELECT substr('a group of words', -10::int4, -2147483648::int4)", Error),
        ("SELECT substr('1', 100::int4, -2147483648::int4)", Error),
        ("SELECT substr('123', 100::int4, -2147483648::int4)", Error),
        ("SELECT substr('something', 100::int4, -2147483648::int4)", Error),
        ("SELECT substr(' something', 100::int4, -2147483648::int4)", Error),
        ("SELECT substr('', 100000::int4, -2147483648::int4)", Error),
        ("SELECT substr('abc', 100000::int4, -2147483648::int4)", Error),
        ("SELECT substr('123456789', 100000::int4, -2147483648::int4)", Error),
        ("SELECT substr('1234567890123456', 100000::int4, -2147483648::int4)", Error),
        ("SELECT substr(' ', -1184280::int4, -2147483648::int4)", Error),
        ("SELECT substr('abc', -1184280::int4, -2147483648::int4)", Error),
        ("SELECT substr('123', -1184280::int4, -2147483648::int4)", Error),
        ("SELECT substr('something', -1184280::int4, -2147483648::int4)", Error),
        ("SELECT substr('123456789', -1184280::int4, -2147483648::int4)", Error),
        ("SELECT substr('12345', 2525280::int4, -2147483648::int4)", Error),
        ("SELECT substr('something', 2525280::int4, -2147483648::int4)", Error),
        ("SELECT substr(' something', 2525280::int4, -2147483648::int4)", Error),
        ("SELECT substr('value', -2147483648::int4, -2147483648::int4)", Error),
        ("SELECT substr('a group of words', -2147483648::int4, -2147483648::int4)", Error),
        ("SELECT substr(' ', 2147483647::int4, -2147483648::int4)", Error),
        ("SELECT substr('a', 2147483647::int4, -2147483648::int4)", Error),
        ("SELECT substr('', 0::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('value', 0::int4, 2147483647::int4)", Text("value")),
        ("SELECT substr('something ', 0::int4, 2147483647::int4)", Text("something ")),
        ("SELECT substr('', -1::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('', 1::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('0', 1::int4, 2147483647::int4)", Text("0")),
        ("SELECT substr('1', 1::int4, 2147483647::int4)", Text("1")),
        ("SELECT substr(' ', 2::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('123456789', 2::int4, 2147483647::int4)", Text("23456789")),
        ("SELECT substr('0', 5::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('1', 5::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('1', 10::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('a group of words', 10::int4, 2147483647::int4)", Text("f words")),
        ("SELECT substr('12345', -10::int4, 2147483647::int4)", Text("12345")),
        ("SELECT substr('something ', -10::int4, 2147483647::int4)", Text("something ")),
        ("SELECT substr('a group of words', -10::int4, 2147483647::int4)", Text("a group of words")),
        ("SELECT substr('a', 100::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('value', 100::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('12345', 100::int4, 2147483647::int4)", Text("")),
        ("SELECT substr(' something', 100::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('0', 21050::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('value', 100000::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('12345', -1184280::int4, 2147483647::int4)", Text("12345")),
        ("SELECT substr('something', -1184280::int4, 2147483647::int4)", Text("something")),
        ("SELECT substr('123', 2525280::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('abc', -2147483648::int4, 2147483647::int4)", Error),
        ("SELECT substr(' something', -2147483648::int4, 2147483647::int4)", Error),
        ("SELECT substr('123456789', -2147483648::int4, 2147483647::int4)", Error),
        ("SELECT substr('a', 2147483647::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('value', 2147483647::int4, 2147483647::int4)", Text("")),
        ("SELECT substr(' something', 2147483647::int4, 2147483647::int4)", Text("")),
        ("SELECT substr('a group of words', 2147483647::int4, 2147483647::int4)", Text("")),
    ]);
}
