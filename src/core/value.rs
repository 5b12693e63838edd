// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar Values
//!
//! [`Datum`] is the runtime representation of every value flowing through
//! the executors. Text output follows the PostgreSQL output functions
//! (`boolout`, `float8out`, `numeric_out`, ...).

use crate::query_api::definition::attribute::Type;
use rust_decimal::Decimal;
use std::fmt;

/// A single scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    Numeric(Decimal),
    Text(String),
}

impl Datum {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// The natural type of the value; `Null` has no type of its own
    pub fn natural_type(&self) -> Type {
        match self {
            Datum::Null => Type::Unknown,
            Datum::Bool(_) => Type::Bool,
            Datum::Int2(_) => Type::Int2,
            Datum::Int4(_) => Type::Int4,
            Datum::Int8(_) => Type::Int8,
            Datum::Float4(_) => Type::Float4,
            Datum::Float8(_) => Type::Float8,
            Datum::Numeric(_) => Type::Numeric,
            Datum::Text(_) => Type::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Datum::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer view of any integer-typed datum
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Datum::Int2(v) => Some(*v as i64),
            Datum::Int4(v) => Some(*v as i64),
            Datum::Int8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Float4(v) => Some(*v as f64),
            Datum::Float8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<Decimal> {
        match self {
            Datum::Numeric(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text output using the given `extra_float_digits`; `None` for NULL
    pub fn to_text(&self, extra_float_digits: i32) -> Option<String> {
        match self {
            Datum::Null => None,
            Datum::Bool(b) => Some(if *b { "t" } else { "f" }.to_string()),
            Datum::Int2(v) => Some(v.to_string()),
            Datum::Int4(v) => Some(v.to_string()),
            Datum::Int8(v) => Some(v.to_string()),
            Datum::Float4(v) => Some(format_float4(*v, extra_float_digits)),
            Datum::Float8(v) => Some(format_float8(*v, extra_float_digits)),
            Datum::Numeric(d) => Some(d.to_string()),
            Datum::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text(DEFAULT_EXTRA_FLOAT_DIGITS) {
            Some(text) => f.write_str(&text),
            None => f.write_str("NULL"),
        }
    }
}

/// PostgreSQL's default `extra_float_digits` (shortest-exact output)
pub const DEFAULT_EXTRA_FLOAT_DIGITS: i32 = 1;

const DBL_DIG: i32 = 15;
const FLT_DIG: i32 = 6;

/// `float8out`
pub fn format_float8(value: f64, extra_float_digits: i32) -> String {
    if let Some(special) = special_float(value.is_nan(), value.is_infinite(), value < 0.0) {
        return special;
    }
    if extra_float_digits > 0 {
        shortest_format(&format!("{:e}", value), DBL_DIG)
    } else {
        let digits = (DBL_DIG + extra_float_digits).max(1) as usize;
        precision_format(&format!("{:.*e}", digits - 1, value), digits as i32)
    }
}

/// `float4out`
pub fn format_float4(value: f32, extra_float_digits: i32) -> String {
    if let Some(special) = special_float(value.is_nan(), value.is_infinite(), value < 0.0) {
        return special;
    }
    if extra_float_digits > 0 {
        shortest_format(&format!("{:e}", value), FLT_DIG)
    } else {
        let digits = (FLT_DIG + extra_float_digits).max(1) as usize;
        precision_format(&format!("{:.*e}", digits - 1, value), digits as i32)
    }
}

fn special_float(nan: bool, infinite: bool, negative: bool) -> Option<String> {
    if nan {
        Some("NaN".to_string())
    } else if infinite && negative {
        Some("-Infinity".to_string())
    } else if infinite {
        Some("Infinity".to_string())
    } else {
        None
    }
}

/// Split Rust's `{:e}` output (`-1.25e-7`) into sign, digit string and
/// decimal exponent
fn split_scientific(formatted: &str) -> (bool, String, i32) {
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted, "0"));
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (negative, digits, exponent.parse().unwrap_or(0))
}

/// Shortest round-trip digits, switching to exponent form outside
/// `[-4, max_fixed_exponent)`
fn shortest_format(formatted: &str, max_fixed_exponent: i32) -> String {
    let (negative, digits, exponent) = split_scientific(formatted);
    render_digits(negative, digits.trim_end_matches('0'), exponent, max_fixed_exponent)
}

/// `%.{precision}g` semantics
fn precision_format(formatted: &str, precision: i32) -> String {
    let (negative, digits, exponent) = split_scientific(formatted);
    render_digits(negative, digits.trim_end_matches('0'), exponent, precision)
}

fn render_digits(negative: bool, digits: &str, exponent: i32, max_fixed_exponent: i32) -> String {
    let digits = if digits.is_empty() { "0" } else { digits };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if digits == "0" {
        out.push('0');
        return out;
    }
    if exponent < -4 || exponent >= max_fixed_exponent {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.abs()));
    } else if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}
