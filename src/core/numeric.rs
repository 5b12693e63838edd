// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric Helpers
//!
//! Input parsing, scale selection and rounding for the `numeric` type, which
//! is backed by a 96-bit fixed-point [`Decimal`] (at most 28 fractional
//! digits).

use crate::core::error::{PgError, PgResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale the backend can store
pub const MAX_SCALE: u32 = 28;

/// Minimum number of significant digits in a division result
const MIN_SIG_DIGITS: i64 = 16;

/// Digits per base-10000 "NBASE" digit of PostgreSQL's numeric format
const DEC_DIGITS: i64 = 4;

/// Exponents past this are out of range for any stored value
const MAX_EXPONENT: i64 = 1000;

/// `numeric_in`: parse `[+-]digits[.digits][e[+-]digits]`, rounding
/// fractional digits the backend cannot store
pub fn parse_numeric(input: &str) -> PgResult<Decimal> {
    let invalid = || PgError::invalid_text_representation("numeric", input);
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if matches!(
        unsigned.to_ascii_lowercase().as_str(),
        "nan" | "inf" | "infinity"
    ) {
        return Err(PgError::feature_not_supported(format!(
            "numeric value \"{}\" is not supported",
            trimmed
        )));
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => {
            let exp = body[idx + 1..].parse::<i64>().map_err(|_| invalid())?;
            (&body[..idx], exp)
        }
        None => (body, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (int_part.is_empty() && frac_part.is_empty())
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    if exponent.abs() > MAX_EXPONENT {
        let all_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
        if exponent > 0 && !all_zero {
            return Err(PgError::numeric_overflow());
        }
        return Ok(Decimal::ZERO);
    }

    // Shift the decimal point by the exponent
    let digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() as i64 + exponent;
    let (int_digits, frac_digits) = if point <= 0 {
        (
            String::new(),
            format!("{}{}", "0".repeat((-point) as usize), digits),
        )
    } else if point as usize >= digits.len() {
        (
            format!("{}{}", digits, "0".repeat(point as usize - digits.len())),
            String::new(),
        )
    } else {
        (
            digits[..point as usize].to_string(),
            digits[point as usize..].to_string(),
        )
    };

    let int_digits = int_digits.trim_start_matches('0');
    if int_digits.len() > MAX_SCALE as usize + 1 {
        return Err(PgError::numeric_overflow());
    }

    let keep = frac_digits
        .len()
        .min((MAX_SCALE as usize).saturating_sub(int_digits.len()));
    let round_up = frac_digits
        .as_bytes()
        .get(keep)
        .map(|b| *b >= b'5')
        .unwrap_or(false);

    let int_text = if int_digits.is_empty() { "0" } else { int_digits };
    let text = if keep > 0 {
        format!("{}.{}", int_text, &frac_digits[..keep])
    } else {
        int_text.to_string()
    };
    let mut value = Decimal::from_str(&text).map_err(|_| PgError::numeric_overflow())?;
    if round_up {
        value = value
            .checked_add(Decimal::new(1, keep as u32))
            .ok_or_else(PgError::numeric_overflow)?;
    }
    if negative && !value.is_zero() {
        value.set_sign_negative(true);
    }
    Ok(value)
}

/// `numeric` → `double precision`
pub fn numeric_to_f64(value: &Decimal) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .or_else(|| value.to_f64())
        .unwrap_or(0.0)
}

/// `double precision` → `numeric`, keeping 15 significant digits like
/// `float8_numeric`
pub fn f64_to_numeric(value: f64) -> PgResult<Decimal> {
    if value.is_nan() {
        return Err(PgError::feature_not_supported(
            "cannot convert NaN to numeric",
        ));
    }
    if value.is_infinite() {
        return Err(PgError::feature_not_supported(
            "cannot convert infinity to numeric",
        ));
    }
    let parsed = parse_numeric(&format!("{:.14e}", value))?;
    Ok(parsed.normalize())
}

/// `real` → `numeric` with 6 significant digits
pub fn f32_to_numeric(value: f32) -> PgResult<Decimal> {
    if value.is_nan() || value.is_infinite() {
        return f64_to_numeric(value as f64);
    }
    let parsed = parse_numeric(&format!("{:.5e}", value))?;
    Ok(parsed.normalize())
}

/// Round half away from zero to an integer; `None` when it does not fit
pub fn numeric_to_i64(value: &Decimal) -> Option<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Round (or truncate) to `scale` digits after the point; negative scales
/// round to the left of the point
pub fn round_to_scale(value: Decimal, scale: i64, strategy: RoundingStrategy) -> PgResult<Decimal> {
    if scale >= 0 {
        let scale = scale.min(MAX_SCALE as i64) as u32;
        let mut rounded = value.round_dp_with_strategy(scale, strategy);
        rounded.rescale(scale);
        return Ok(positive_zero(rounded));
    }
    let shift = (-scale) as u32;
    if shift > MAX_SCALE {
        return Ok(Decimal::ZERO);
    }
    let factor = pow10(shift);
    let shifted = value
        .checked_div(factor)
        .ok_or_else(PgError::numeric_overflow)?
        .round_dp_with_strategy(0, strategy);
    let mut result = shifted
        .checked_mul(factor)
        .ok_or_else(PgError::numeric_overflow)?;
    result.rescale(0);
    Ok(positive_zero(result))
}

/// Drop the sign of a zero result so it prints as `0`
pub fn positive_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

/// 10^exp as a decimal, `exp <= 28`
pub fn pow10(exp: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(exp.min(MAX_SCALE)), 0)
}

/// Decimal exponent of the most significant digit (`floor(log10(|v|))`),
/// `None` for zero
pub(crate) fn decimal_exponent(value: &Decimal) -> Option<i64> {
    if value.is_zero() {
        return None;
    }
    let mantissa = value.mantissa().unsigned_abs().to_string();
    Some(mantissa.len() as i64 - 1 - value.scale() as i64)
}

/// PostgreSQL's base-10000 weight and leading base-10000 digit
pub(crate) fn nbase_weight(value: &Decimal) -> Option<(i64, u32)> {
    nbase_weight_of(value.mantissa().unsigned_abs(), value.scale())
}

/// [`nbase_weight`] of `mantissa * 10^-scale`
fn nbase_weight_of(mantissa: u128, scale: u32) -> Option<(i64, u32)> {
    if mantissa == 0 {
        return None;
    }
    let digits = mantissa.to_string();
    let exponent = digits.len() as i64 - 1 - scale as i64;
    let weight = exponent.div_euclid(DEC_DIGITS);
    let lead_len = (exponent - weight * DEC_DIGITS + 1) as usize;
    let lead: String = digits.chars().take(lead_len).collect();
    let padded = format!("{:0<width$}", lead, width = lead_len);
    Some((weight, padded.parse().unwrap_or(1)))
}

/// Result scale of a division (`select_div_scale`)
pub fn select_div_scale(dividend: &Decimal, divisor: &Decimal) -> u32 {
    div_scale(
        nbase_weight(dividend),
        dividend.scale(),
        nbase_weight(divisor),
        divisor.scale(),
    )
}

fn div_scale(
    dividend: Option<(i64, u32)>,
    dividend_scale: u32,
    divisor: Option<(i64, u32)>,
    divisor_scale: u32,
) -> u32 {
    // Equal leading digits count as a dividend smaller than the divisor
    let qweight = match (dividend, divisor) {
        (Some((w1, d1)), Some((w2, d2))) if d1 <= d2 => w1 - w2 - 1,
        (Some((w1, _)), Some((w2, _))) => w1 - w2,
        _ => 0,
    };
    let rscale = (MIN_SIG_DIGITS - qweight * DEC_DIGITS)
        .max(dividend_scale as i64)
        .max(divisor_scale as i64)
        .max(0);
    rscale.min(MAX_SCALE as i64) as u32
}

/// `numeric_div`
pub fn numeric_div(dividend: Decimal, divisor: Decimal) -> PgResult<Decimal> {
    if divisor.is_zero() {
        return Err(PgError::division_by_zero());
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or_else(PgError::numeric_overflow)?;
    let scale = select_div_scale(&dividend, &divisor);
    round_to_scale(
        quotient,
        scale as i64,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `value * factor / divisor`, rounded like [`numeric_div`] would round
/// the exact quotient; the product may exceed the 96-bit mantissa
pub fn numeric_scaled_div(value: Decimal, factor: i64, divisor: Decimal) -> PgResult<Decimal> {
    if divisor.is_zero() {
        return Err(PgError::division_by_zero());
    }
    let product = value
        .mantissa()
        .unsigned_abs()
        .checked_mul(factor.unsigned_abs() as u128)
        .ok_or_else(PgError::numeric_overflow)?;
    let quotient = value
        .checked_div(divisor)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(factor)))
        .ok_or_else(PgError::numeric_overflow)?;
    let scale = div_scale(
        nbase_weight_of(product, value.scale()),
        value.scale(),
        nbase_weight(&divisor),
        divisor.scale(),
    );
    round_to_scale(
        quotient,
        scale as i64,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Integer quotient truncated toward zero (`div`)
pub fn numeric_div_trunc(dividend: Decimal, divisor: Decimal) -> PgResult<Decimal> {
    if divisor.is_zero() {
        return Err(PgError::division_by_zero());
    }
    let remainder = dividend
        .checked_rem(divisor)
        .ok_or_else(PgError::numeric_overflow)?;
    let exact = dividend
        .checked_sub(remainder)
        .ok_or_else(PgError::numeric_overflow)?;
    let mut quotient = exact
        .checked_div(divisor)
        .ok_or_else(PgError::numeric_overflow)?
        .trunc();
    quotient.rescale(0);
    Ok(positive_zero(quotient))
}

/// Remainder with the sign of the dividend (`numeric_mod`)
pub fn numeric_mod(dividend: Decimal, divisor: Decimal) -> PgResult<Decimal> {
    if divisor.is_zero() {
        return Err(PgError::division_by_zero());
    }
    dividend
        .checked_rem(divisor)
        .map(positive_zero)
        .ok_or_else(PgError::numeric_overflow)
}

/// Greatest common divisor by Euclid's algorithm, always non-negative
pub fn numeric_gcd(a: Decimal, b: Decimal) -> PgResult<Decimal> {
    let scale = a.scale().max(b.scale());
    let mut left = a.abs();
    let mut right = b.abs();
    while !right.is_zero() {
        let next = left
            .checked_rem(right)
            .ok_or_else(PgError::numeric_overflow)?;
        left = right;
        right = next;
    }
    left.rescale(scale);
    Ok(left)
}

/// Least common multiple, zero when either input is zero
pub fn numeric_lcm(a: Decimal, b: Decimal) -> PgResult<Decimal> {
    let scale = a.scale().max(b.scale());
    if a.is_zero() || b.is_zero() {
        let mut zero = Decimal::ZERO;
        zero.rescale(scale);
        return Ok(zero);
    }
    let gcd = numeric_gcd(a, b)?;
    let reduced = a
        .abs()
        .checked_div(gcd)
        .ok_or_else(PgError::numeric_overflow)?;
    let mut result = reduced
        .checked_mul(b.abs())
        .ok_or_else(PgError::numeric_overflow)?;
    result.rescale(scale);
    Ok(result)
}
