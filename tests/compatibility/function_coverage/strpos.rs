// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Recorded PostgreSQL results for strpos

use crate::compatibility::common::run_cases;
use crate::compatibility::common::Outcome::*;

/// strpos is one-based and finds the empty string at position 1
#[test]
fn function_test_strpos() {
    run_cases(&[
        ("SELECT strpos('', '')", Int4(1)),
        ("SELECT strpos(' ', '')", Int4(1)),
        ("SELECT strpos('0', '')", Int4(1)),
        ("SELECT strpos('1', '')", Int4(1)),
        ("SELECT strpos('a', '')", Int4(1)),
        ("SELECT strpos('abc', '')", Int4(1)),
        ("SELECT strpos('123', '')", Int4(1)),
        ("SELECT strpos('value', '')", Int4(1)),
        ("SELECT strpos('12345', '')", Int4(1)),
        ("SELECT strpos('something', '')", Int4(1)),
        ("SELECT strpos(' something', '')", Int4(1)),
        ("SELECT strpos('something ', '')", Int4(1)),
        ("SELECT strpos('123456789', '')", Int4(1)),
        ("SELECT strpos('a group of words', '')", Int4(1)),
        ("SELECT strpos('1234567890123456', '')", Int4(1)),
        ("SELECT strpos('', ' ')", Int4(0)),
        ("SELECT strpos(' ', ' ')", Int4(1)),
        ("SELECT strpos('0', ' ')", Int4(0)),
        ("SELECT strpos('1', ' ')", Int4(0)),
        ("SELECT strpos('a', ' ')", Int4(0)),
        ("SELECT strpos('abc', ' ')", Int4(0)),
        ("SELECT strpos('123', ' ')", Int4(0)),
        ("SELECT strpos('value', ' ')", Int4(0)),
        ("SELECT strpos('12345', ' ')", Int4(0)),
        ("SELECT strpos('something', ' ')", Int4(0)),
        ("SELECT strpos(' something', ' ')", Int4(1)),
        ("SELECT strpos('something ', ' ')", Int4(10)),
        ("SELECT strpos('123456789', ' ')", Int4(0)),
        ("SELECT strpos('a group of words', ' ')", Int4(2)),
        ("SELECT strpos('1234567890123456', ' ')", Int4(0)),
        ("SELECT strpos('', '0')", Int4(0)),
        ("SELECT strpos(' ', '0')", Int4(0)),
        ("SELECT strpos('0', '0')", Int4(1)),
        ("SELECT strpos('1', '0')", Int4(0)),
        ("SELECT strpos('a', '0')", Int4(0)),
        ("SELECT strpos('abc', '0')", Int4(0)),
        ("SELECT strpos('123', '0')", Int4(0)),
        ("SELECT strpos('value', '0')", Int4(0)),
        ("SELECT strpos('12345', '0')", Int4(0)),
        ("SELECT strpos('something', '0')", Int4(0)),
        ("SELECT strpos(' something', '0')", Int4(0)),
        ("SELECT strpos('something ', '0')", Int4(0)),
        ("SELECT strpos('123456789', '0')", Int4(0)),
        ("SELECT strpos('a group of words', '0')", Int4(0)),
        ("SELECT strpos('1234567890123456', '0')", Int4(10)),
        ("SELECT strpos('', '1')", Int4(0)),
        ("SELECT strpos(' ', '1')", Int4(0)),
        ("SELECT strpos('0', '1')", Int4(0)),
        ("SELECT strpos('1', '1')", Int4(1)),
        ("SELECT strpos('a', '1')", Int4(0)),
        ("SELECT strpos('abc', '1')", Int4(0)),
        ("SELECT strpos('123', '1')", Int4(1)),
        ("SELECT strpos('value', '1')", Int4(0)),
        ("SELECT strpos('12345', '1')", Int4(1)),
        ("SELECT strpos('something', '1')", Int4(0)),
        ("SELECT strpos(' something', '1')", Int4(0)),
        ("SELECT strpos('something ', '1')", Int4(0)),
        ("SELECT strpos('123456789', '1')", Int4(1)),
        ("SELECT strpos('a group of words', '1')", Int4(0)),
        ("SELECT strpos('1234567890123456', '1')", Int4(1)),
        ("SELECT strpos('', 'a')", Int4(0)),
        ("SELECT strpos(' ', 'a')", Int4(0)),
        ("SELECT strpos('0', 'a')", Int4(0)),
        ("SELECT strpos('1', 'a')", Int4(0)),
        ("SELECT strpos('a', 'a')", Int4(1)),
        ("SELECT strpos('abc', 'a')", Int4(1)),
        ("SELECT strpos('123', 'a')", Int4(0)),
        ("SELECT strpos('value', 'a')", Int4(2)),
        ("SELECT strpos('12345', 'a')", Int4(0)),
        ("SELECT strpos('something', 'a')", Int4(0)),
        ("SELECT strpos(' something', 'a')", Int4(0)),
        ("SELECT strpos('something ', 'a')", Int4(0)),
        ("SELECT strpos('123456789', 'a')", Int4(0)),
        ("SELECT strpos('a group of words', 'a')", Int4(1)),
        ("SELECT strpos('1234567890123456', 'a')", Int4(0)),
        ("SELECT strpos('', 'abc')", Int4(0)),
        ("SELECT strpos(' ', 'abc')", Int4(0)),
        ("SELECT strpos('0', 'abc')", Int4(0)),
        ("SELECT strpos('1', 'abc')", Int4(0)),
        ("SELECT strpos('a', 'abc')", Int4(0)),
        ("SELECT strpos('abc', 'abc')", Int4(1)),
        ("SELECT strpos('123', 'abc')", Int4(0)),
        ("SELECT strpos('value', 'abc')", Int4(0)),
        ("SELECT strpos('12345', 'abc')", Int4(0)),
        ("SELECT strpos('something', 'abc')", Int4(0)),
        ("SELECT strpos(' something', 'abc')", Int4(0)),
        ("SELECT strpos('something ', 'abc')", Int4(0)),
        ("SELECT strpos('123456789', 'abc')", Int4(0)),
        ("SELECT strpos('a group of words', 'abc')", Int4(0)),
        ("SELECT strpos('1234567890123456', 'abc')", Int4(0)),
        ("SELECT strpos('', '123')", Int4(0)),
        ("SELECT strpos(' ', '123')", Int4(0)),
        ("SELECT strpos('0', '123')", Int4(0)),
        ("SELECT strpos('1', '123')", Int4(0)),
        ("SELECT strpos('a', '123')", Int4(0)),
        ("SELECT strpos('abc', '123')", Int4(0)),
        ("SELECT strpos('123', '123')", Int4(1)),
        ("SELECT strpos('value', '123')", Int4(0)),
        ("SELECT strpos('12345', '123')", Int4(1)),
        ("SELECT strpos('something', '123')", Int4(0)),
        ("SELECT strpos(' something', '123')", Int4(0)),
        ("SELECT strpos('something ', '123')", Int4(0)),
        ("SELECT strpos('123456789', '123')", Int4(1)),
        ("SELECT strpos('a group of words', '123')", Int4(0)),
        ("SELECT strpos('1234567890123456', '123')", Int4(1)),
        ("SELECT strpos('', 'value')", Int4(0)),
        ("SELECT strpos(' ', 'value')", Int4(0)),
        ("SELECT strpos('0', 'value')", Int4(0)),
        ("SELECT strpos('1', 'value')", Int4(0)),
        ("SELECT strpos('a', 'value')", Int4(0)),
        ("SELECT strpos('abc', 'value')", Int4(0)),
        ("SELECT strpos('123', 'value')", Int4(0)),
        ("SELECT strpos('value', 'value')", Int4(1)),
        ("SELECT strpos('12345', 'value')", Int4(0)),
        ("SELECT strpos('something', 'value')", Int4(0)),
        ("SELECT strpos(' something', 'value')", Int4(0)),
        ("SELECT strpos('something ', 'value')", Int4(0)),
        ("SELECT strpos('123456789', 'value')", Int4(0)),
        ("SELECT strpos('a group of words', 'value')", Int4(0)),
        ("SELECT strpos('1234567890123456', 'value')", Int4(0)),
        ("SELECT strpos('', '12345')", Int4(0)),
        ("SELECT strpos(' ', '12345')", Int4(0)),
        ("SELECT strpos('0', '12345')", Int4(0)),
        ("SELECT strpos('1', '12345')", Int4(0)),
        ("SELECT strpos('a', '12345')", Int4(0)),
        ("SELECT strpos('abc', '12345')", Int4(0)),
        ("SELECT strpos('123', '12345')", Int4(0)),
        ("SELECT strpos('value', '12345')", Int4(0)),
        ("SELECT strpos('12345', '12345')", Int4(1)),
        ("SELECT strpos('something', '12345')", Int4(0)),
        ("SELECT strpos(' something', '12345')", Int4(0)),
        ("SELECT strpos('something ', '12345')", Int4(0)),
        ("SELECT strpos('123456789', '12345')", Int4(1)),
        ("SELECT strpos('a group of words', '12345')", Int4(0)),
        ("SELECT strpos('1234567890123456', '12345')", Int4(1)),
        ("SELECT strpos('', 'something')", Int4(0)),
        ("SELECT strpos(' ', 'something')", Int4(0)),
        ("SELECT strpos('0', 'something')", Int4(0)),
        ("SELECT strpos('1', 'something')", Int4(0)),
        ("SELECT strpos('a', 'something')", Int4(0)),
        ("SELECT strpos('abc', 'something')", Int4(0)),
        ("SELECT strpos('123', 'something')", Int4(0)),
        ("SELECT strpos('value', 'something')", Int4(0)),
        ("SELECT strpos('12345', 'something')", Int4(0)),
        ("SELECT strpos('something', 'something')", Int4(1)),
        ("SELECT strpos(' something', 'something')", Int4(2)),
        ("SELECT strpos('something ', 'something')", Int4(1)),
        ("SELECT strpos('123456789', 'something')", Int4(0)),
        ("SELECT strpos('a group of words', 'something')", Int4(0)),
        ("SELECT strpos('1234567890123456', 'something')", Int4(0)),
        ("SELECT strpos('', ' something')", Int4(0)),
        ("SELECT strpos(' ', ' something')", Int4(0)),
        ("SELECT strpos('0', ' something')", Int4(0)),
        ("SELECT strpos('1', ' something')", Int4(0)),
        ("SELECT strpos('a', ' something')", Int4(0)),
        ("SELECT strpos('abc', ' something')", Int4(0)),
        ("SELECT strpos('123', ' something')", Int4(0)),
        ("SELECT strpos('value', ' something')", Int4(0)),
        ("SELECT strpos('12345', ' something')", Int4(0)),
        ("SELECT strpos('something', ' something')", Int4(0)),
        ("SELECT strpos(' something', ' something')", Int4(1)),
        ("SELECT strpos('something ', ' something')", Int4(0)),
        ("SELECT strpos('123456789', ' something')", Int4(0)),
        ("SELECT strpos('a group of words', ' something')", Int4(0)),
        ("SELECT strpos('1234567890123456', ' something')", Int4(0)),
        ("SELECT strpos('', 'something ')", Int4(0)),
        ("SELECT strpos(' ', 'something ')", Int4(0)),
        ("SELECT strpos('0', 'something ')", Int4(0)),
        ("SELECT strpos('1', 'something ')", Int4(0)),
        ("SELECT strpos('a', 'something ')", Int4(0)),
        ("SELECT strpos('abc', 'something ')", Int4(0)),
        ("SELECT strpos('123', 'something ')", Int4(0)),
        ("SELECT strpos('value', 'something ')", Int4(0)),
        ("SELECT strpos('12345', 'something ')", Int4(0)),
        ("SELECT strpos('something', 'something ')", Int4(0)),
        ("SELECT strpos(' something', 'something ')", Int4(0)),
        ("SELECT strpos('something ', 'something ')", Int4(1)),
        ("SELECT strpos('123456789', 'something ')", Int4(0)),
        ("SELECT strpos('a group of words', 'something ')", Int4(0)),
        ("SELECT strpos('1234567890123456', 'something ')", Int4(0)),
        ("SELECT strpos('', '123456789')", Int4(0)),
        ("SELECT strpos(' ', '123456789')", Int4(0)),
        ("SELECT strpos('0', '123456789')", Int4(0)),
        ("SELECT strpos('1', '123456789')", Int4(0)),
        ("SELECT strpos('a', '123456789')", Int4(0)),
        ("SELECT strpos('abc', '123456789')", Int4(0)),
        ("SELECT strpos('123', '123456789')", Int4(0)),
        ("SELECT strpos('value', '123456789')", Int4(0)),
        ("SELECT strpos('12345', '123456789')", Int4(0)),
        ("SELECT strpos('something', '123456789')", Int4(0)),
        ("SELECT strpos(' something', '123456789')", Int4(0)),
        ("SELECT strpos('something ', '123456789')", Int4(0)),
        ("SELECT strpos('123456789', '123456789')", Int4(1)),
        ("SELECT strpos('a group of words', '123456789')", Int4(0)),
        ("SELECT strpos('1234567890123456', '123456789')", Int4(1)),
        ("SELECT strpos('', 'a group of words')", Int4(0)),
        ("SELECT strpos(' ', 'a group of words')", Int4(0)),
        ("SELECT strpos('0', 'a group of words')", Int4(0)),
        ("SELECT strpos('1', 'a group of words')", Int4(0)),
        ("SELECT strpos('a', 'a group of words')", Int4(0)),
        ("SELECT strpos('abc', 'a group of words')", Int4(0)),
        ("SELECT strpos('123', 'a group of words')", Int4(0)),
        ("SELECT strpos('value', 'a group of words')", Int4(0)),
        ("SELECT strpos('12345', 'a group of words')", Int4(0)),
        ("SELECT strpos('something', 'a group of words')", Int4(0)),
        ("SELECT strpos(' something', 'a group of words')", Int4(0)),
        ("SELECT strpos('something ', 'a group of words')", Int4(0)),
        ("SELECT strpos('123456789', 'a group of words')", Int4(0)),
        ("SELECT strpos('a group of words', 'a group of words')", Int4(1)),
        ("SELECT strpos('1234567890123456', 'a group of words')", Int4(0)),
        ("SELECT strpos('', '1234567890123456')", Int4(0)),
        ("SELECT strpos(' ', '1234567890123456')", Int4(0)),
        ("SELECT strpos('0', '1234567890123456')", Int4(0)),
        ("SELECT strpos('1', '1234567890123456')", Int4(0)),
        ("SELECT strpos('a', '1234567890123456')", Int4(0)),
        ("SELECT strpos('abc', '1234567890123456')", Int4(0)),
        ("SELECT strpos('123', '1234567890123456')", Int4(0)),
        ("SELECT strpos('value', '1234567890123456')", Int4(0)),
        ("SELECT strpos('12345', '1234567890123456')", Int4(0)),
        ("SELECT strpos('something', '1234567890123456')", Int4(0)),
        ("SELECT strpos(' something', '1234567890123456')", Int4(0)),
        ("SELECT strpos('something ', '1234567890123456')", Int4(0)),
        ("SELECT strpos('123456789', '1234567890123456')", Int4(0)),
        ("SELECT strpos('a group of words', '1234567890123456')", Int4(0)),
        ("SELECT strpos('1234567890123456', '1234567890123456')", Int4(1)),
    ]);
}
