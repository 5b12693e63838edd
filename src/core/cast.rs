// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type Conversion
//!
//! Implements the PostgreSQL cast catalog for the supported scalar types:
//! - which casts may be applied implicitly during overload resolution
//! - explicit casts (`::`, `CAST`) with range checking
//! - type input functions (text/unknown to a type)
//! - type modifiers (`numeric(p,s)`, `varchar(n)`)

use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult, SqlState};
use crate::core::numeric::{
    f32_to_numeric, f64_to_numeric, numeric_to_f64, numeric_to_i64, parse_numeric, pow10,
    round_to_scale,
};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::{Type, TypeCategory, TypeModifier};
use rust_decimal::{Decimal, RoundingStrategy};

/// Whether `from` may be coerced to `to` without an explicit cast
pub fn can_coerce_implicitly(from: Type, to: Type) -> bool {
    if from == to || from == Type::Unknown {
        return true;
    }
    matches!(
        (from, to),
        (
            Type::Int2,
            Type::Int4 | Type::Int8 | Type::Float4 | Type::Float8 | Type::Numeric
        ) | (Type::Int4, Type::Int8 | Type::Float4 | Type::Float8 | Type::Numeric)
            | (Type::Int8, Type::Float4 | Type::Float8 | Type::Numeric)
            | (Type::Float4, Type::Float8)
            | (Type::Numeric, Type::Float4 | Type::Float8)
            | (Type::Varchar, Type::Text)
            | (Type::Text, Type::Varchar)
    )
}

/// Whether an explicit cast from `from` to `to` exists
pub fn can_cast_explicitly(from: Type, to: Type) -> bool {
    if can_coerce_implicitly(from, to) {
        return true;
    }
    match (from, to) {
        // I/O conversion casts
        (_, Type::Text | Type::Varchar) | (Type::Text | Type::Varchar, _) => true,
        (Type::Bool, Type::Int4) | (Type::Int4, Type::Bool) => true,
        (a, b) => a.category() == b.category() && a.category() != TypeCategory::Boolean,
    }
}

/// Convert `value` (of type `from`) to `to`, applying `modifier` afterwards
pub fn cast_datum(
    value: Datum,
    from: Type,
    to: Type,
    modifier: Option<TypeModifier>,
    ctx: &EvalContext,
) -> PgResult<Datum> {
    if value.is_null() {
        return Ok(Datum::Null);
    }
    let converted = convert(value, from, to, ctx)?;
    match modifier {
        Some(modifier) => apply_modifier(converted, modifier),
        None => Ok(converted),
    }
}

fn convert(value: Datum, from: Type, to: Type, ctx: &EvalContext) -> PgResult<Datum> {
    if from == to && from != Type::Unknown {
        return Ok(value);
    }
    match (value, to) {
        // === Text and unknown inputs go through the type input function ===
        (Datum::Text(text), target) if target != Type::Text && target != Type::Varchar => {
            input_function(&text, target)
        }
        (Datum::Text(text), _) => Ok(Datum::Text(text)),

        // === Output to text ===
        (Datum::Bool(b), Type::Text | Type::Varchar) => {
            Ok(Datum::Text(if b { "true" } else { "false" }.to_string()))
        }
        (other, Type::Text | Type::Varchar) => Ok(Datum::Text(
            other.to_text(ctx.extra_float_digits).unwrap_or_default(),
        )),

        // === Integer conversions ===
        (Datum::Int2(v), target) => integer_to(v as i64, target, from),
        (Datum::Int4(v), target) => integer_to(v as i64, target, from),
        (Datum::Int8(v), target) => integer_to(v, target, from),

        // === Floating point conversions ===
        (Datum::Float4(v), Type::Float8) => Ok(Datum::Float8(v as f64)),
        (Datum::Float4(v), Type::Numeric) => Ok(Datum::Numeric(f32_to_numeric(v)?)),
        (Datum::Float4(v), target) if target.is_integer() => float_to_integer(v as f64, target),
        (Datum::Float8(v), Type::Float4) => float8_to_float4(v).map(Datum::Float4),
        (Datum::Float8(v), Type::Numeric) => Ok(Datum::Numeric(f64_to_numeric(v)?)),
        (Datum::Float8(v), target) if target.is_integer() => float_to_integer(v, target),

        // === Numeric conversions ===
        (Datum::Numeric(d), Type::Float8) => Ok(Datum::Float8(numeric_to_f64(&d))),
        (Datum::Numeric(d), Type::Float4) => {
            float8_to_float4(numeric_to_f64(&d)).map(Datum::Float4)
        }
        (Datum::Numeric(d), target) if target.is_integer() => {
            let rounded = numeric_to_i64(&d).ok_or_else(|| PgError::out_of_range(target.name()))?;
            narrow_integer(rounded, target)
        }

        // === Boolean ===
        (Datum::Bool(b), Type::Int4) => Ok(Datum::Int4(b as i32)),

        (other, target) => Err(PgError::cannot_coerce(other.natural_type().name(), target.name())),
    }
}

fn integer_to(value: i64, target: Type, from: Type) -> PgResult<Datum> {
    match target {
        Type::Int2 | Type::Int4 | Type::Int8 => narrow_integer(value, target),
        Type::Float4 => Ok(Datum::Float4(value as f32)),
        Type::Float8 => Ok(Datum::Float8(value as f64)),
        Type::Numeric => Ok(Datum::Numeric(Decimal::from(value))),
        Type::Bool if from == Type::Int4 => Ok(Datum::Bool(value != 0)),
        _ => Err(PgError::cannot_coerce(from.name(), target.name())),
    }
}

/// Range-checked conversion of an `i64` into an integer type
pub fn narrow_integer(value: i64, target: Type) -> PgResult<Datum> {
    match target {
        Type::Int2 => i16::try_from(value)
            .map(Datum::Int2)
            .map_err(|_| PgError::out_of_range(target.name())),
        Type::Int4 => i32::try_from(value)
            .map(Datum::Int4)
            .map_err(|_| PgError::out_of_range(target.name())),
        Type::Int8 => Ok(Datum::Int8(value)),
        _ => Err(PgError::internal(format!("{} is not an integer type", target.name()))),
    }
}

/// Float to integer: round half to even, then range check
fn float_to_integer(value: f64, target: Type) -> PgResult<Datum> {
    let rounded = value.round_ties_even();
    if !rounded.is_finite() {
        return Err(PgError::out_of_range(target.name()));
    }
    // i64::MAX is not representable as f64; 2^63 is the exclusive bound
    if rounded < -9_223_372_036_854_775_808.0 || rounded >= 9_223_372_036_854_775_808.0 {
        return Err(PgError::out_of_range(target.name()));
    }
    narrow_integer(rounded as i64, target)
}

fn float8_to_float4(value: f64) -> PgResult<f32> {
    let narrowed = value as f32;
    if narrowed.is_infinite() && value.is_finite() {
        return Err(PgError::float_overflow());
    }
    if narrowed == 0.0 && value != 0.0 {
        return Err(PgError::float_underflow());
    }
    Ok(narrowed)
}

/// Type input function: parse `text` as a value of type `target`
pub fn input_function(text: &str, target: Type) -> PgResult<Datum> {
    match target {
        Type::Bool => parse_bool(text)
            .map(Datum::Bool)
            .ok_or_else(|| PgError::invalid_text_representation(target.name(), text)),
        Type::Int2 | Type::Int4 | Type::Int8 => {
            let value = parse_integer(text, target)?;
            narrow_integer(value, target)
                .map_err(|_| PgError::value_out_of_range_for_type(text, target.name()))
        }
        Type::Float4 => {
            let value = parse_float(text, target)?;
            let narrowed = value as f32;
            if narrowed.is_infinite() && value.is_finite() || narrowed == 0.0 && value != 0.0 {
                return Err(float_input_out_of_range(text, target));
            }
            Ok(Datum::Float4(narrowed))
        }
        Type::Float8 => parse_float(text, target).map(Datum::Float8),
        Type::Numeric => parse_numeric(text).map(Datum::Numeric),
        Type::Text | Type::Varchar | Type::Unknown => Ok(Datum::Text(text.to_string())),
    }
}

/// `boolin`: accepts unique prefixes of true/false/yes/no, on/off and 1/0
fn parse_bool(text: &str) -> Option<bool> {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    let prefix_of = |word: &str| word.starts_with(lowered.as_str());
    match lowered.as_str() {
        "1" => Some(true),
        "0" => Some(false),
        // "o" alone is ambiguous between on and off
        "o" => None,
        _ if prefix_of("true") || prefix_of("yes") => Some(true),
        _ if prefix_of("false") || prefix_of("no") => Some(false),
        _ if lowered.len() >= 2 && prefix_of("on") => Some(true),
        _ if lowered.len() >= 2 && prefix_of("off") => Some(false),
        _ => None,
    }
}

fn parse_integer(text: &str, target: Type) -> PgResult<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || trimmed.ends_with('_') {
        return Err(PgError::invalid_text_representation(target.name(), text));
    }
    let magnitude: i128 = digits
        .parse()
        .map_err(|_| PgError::value_out_of_range_for_type(text, target.name()))?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| PgError::value_out_of_range_for_type(text, target.name()))
}

fn parse_float(text: &str, target: Type) -> PgResult<f64> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();
    let unsigned = lowered.trim_start_matches(['+', '-']);
    let negative = lowered.starts_with('-');
    match unsigned {
        "nan" if lowered == "nan" => return Ok(f64::NAN),
        "infinity" | "inf" => {
            return Ok(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            })
        }
        _ => {}
    }
    let valid = !unsigned.is_empty()
        && unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'+' | b'-'))
        && unsigned.bytes().any(|b| b.is_ascii_digit());
    let value: f64 = if valid { lowered.parse().ok() } else { None }
        .ok_or_else(|| PgError::invalid_text_representation(target.name(), text))?;
    if value.is_infinite() {
        return Err(float_input_out_of_range(text, target));
    }
    if value == 0.0 && mantissa_has_nonzero_digit(unsigned) {
        return Err(float_input_out_of_range(text, target));
    }
    Ok(value)
}

fn mantissa_has_nonzero_digit(text: &str) -> bool {
    text.split('e')
        .next()
        .map(|m| m.bytes().any(|b| (b'1'..=b'9').contains(&b)))
        .unwrap_or(false)
}

fn float_input_out_of_range(text: &str, target: Type) -> PgError {
    PgError::new(
        SqlState::NumericValueOutOfRange,
        format!("\"{}\" is out of range for type {}", text, target.name()),
    )
}

/// Apply a `numeric(p,s)` or `varchar(n)` type modifier
pub fn apply_modifier(value: Datum, modifier: TypeModifier) -> PgResult<Datum> {
    match (value, modifier) {
        (Datum::Numeric(d), TypeModifier::Numeric { precision, scale }) => {
            let rounded = round_to_scale(d, scale as i64, RoundingStrategy::MidpointAwayFromZero)?;
            let limit = pow10(precision - scale);
            if rounded.abs() >= limit {
                return Err(PgError::new(SqlState::NumericValueOutOfRange, "numeric field overflow")
                    .with_detail(format!(
                        "A field with precision {}, scale {} must round to an absolute value less than {}.",
                        precision,
                        scale,
                        if precision == scale {
                            "1".to_string()
                        } else {
                            format!("10^{}", precision - scale)
                        }
                    )));
            }
            Ok(Datum::Numeric(rounded))
        }
        (Datum::Text(s), TypeModifier::Varchar { length }) => {
            if s.chars().count() > length {
                Ok(Datum::Text(s.chars().take(length).collect()))
            } else {
                Ok(Datum::Text(s))
            }
        }
        (other, _) => Ok(other),
    }
}
