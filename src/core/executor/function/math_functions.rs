// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mathematical Functions
//!
//! Numeric builtins with PostgreSQL semantics: domain errors, overflow
//! checks on every float result, and the `numeric` result scales chosen by
//! `numeric_sqrt`, `numeric_ln`, `numeric_exp` and `numeric_power`.

use super::builtin_wrapper::{float_arg, int_arg, numeric_arg, FunctionRegistry};
use super::operator_functions::{check_float, int_mod, integer_result, integer_type, numeric_mod_op};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::numeric::{
    decimal_exponent, nbase_weight, numeric_div_trunc, numeric_gcd, numeric_lcm, numeric_scaled_div,
    numeric_to_f64, numeric_to_i64, positive_zero, round_to_scale,
};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::f64::consts::PI;

const F8: &[Type] = &[Type::Float8];
const F8_F8: &[Type] = &[Type::Float8, Type::Float8];
const NUM: &[Type] = &[Type::Numeric];
const NUM_NUM: &[Type] = &[Type::Numeric, Type::Numeric];
const NUM_I4: &[Type] = &[Type::Numeric, Type::Int4];

/// Significant digits PostgreSQL aims for in transcendental numeric results
const MIN_SIG_DIGITS: i64 = 16;

const RADIANS_PER_DEGREE: f64 = 0.017_453_292_519_943_295;

pub(super) fn register_math_functions(registry: &mut FunctionRegistry) {
    registry.add_function("abs", &[Type::Int2], Type::Int2, int_abs);
    registry.add_function("abs", &[Type::Int4], Type::Int4, int_abs);
    registry.add_function("abs", &[Type::Int8], Type::Int8, int_abs);
    registry.add_function("abs", &[Type::Float4], Type::Float4, float_abs);
    registry.add_function("abs", F8, Type::Float8, float_abs);
    registry.add_function("abs", NUM, Type::Numeric, numeric_abs);

    registry.add_function("sign", F8, Type::Float8, float_sign);
    registry.add_function("sign", NUM, Type::Numeric, numeric_sign);

    for name in ["ceil", "ceiling"] {
        registry.add_function(name, F8, Type::Float8, float_ceil);
        registry.add_function(name, NUM, Type::Numeric, numeric_ceil);
    }
    registry.add_function("floor", F8, Type::Float8, float_floor);
    registry.add_function("floor", NUM, Type::Numeric, numeric_floor);

    registry.add_function("round", F8, Type::Float8, float_round);
    registry.add_function("round", NUM, Type::Numeric, numeric_round);
    registry.add_function("round", NUM_I4, Type::Numeric, numeric_round);
    registry.add_function("trunc", F8, Type::Float8, float_trunc);
    registry.add_function("trunc", NUM, Type::Numeric, numeric_trunc);
    registry.add_function("trunc", NUM_I4, Type::Numeric, numeric_trunc);

    registry.add_function("sqrt", F8, Type::Float8, float_sqrt);
    registry.add_function("sqrt", NUM, Type::Numeric, numeric_sqrt);
    registry.add_function("cbrt", F8, Type::Float8, float_cbrt);

    registry.add_function("exp", F8, Type::Float8, float_exp);
    registry.add_function("exp", NUM, Type::Numeric, numeric_exp);
    registry.add_function("ln", F8, Type::Float8, float_ln);
    registry.add_function("ln", NUM, Type::Numeric, numeric_ln);
    for name in ["log", "log10"] {
        registry.add_function(name, F8, Type::Float8, float_log10);
        registry.add_function(name, NUM, Type::Numeric, numeric_log10);
    }
    registry.add_function("log", NUM_NUM, Type::Numeric, numeric_log);

    for name in ["power", "pow"] {
        registry.add_function(name, F8_F8, Type::Float8, float_power);
        registry.add_function(name, NUM_NUM, Type::Numeric, numeric_power);
    }

    registry.add_function("mod", &[Type::Int2, Type::Int2], Type::Int2, int_mod);
    registry.add_function("mod", &[Type::Int4, Type::Int4], Type::Int4, int_mod);
    registry.add_function("mod", &[Type::Int8, Type::Int8], Type::Int8, int_mod);
    registry.add_function("mod", NUM_NUM, Type::Numeric, numeric_mod_op);
    registry.add_function("div", NUM_NUM, Type::Numeric, numeric_div);

    registry.add_function("gcd", &[Type::Int4, Type::Int4], Type::Int4, int_gcd);
    registry.add_function("gcd", &[Type::Int8, Type::Int8], Type::Int8, int_gcd);
    registry.add_function("gcd", NUM_NUM, Type::Numeric, numeric_gcd_fn);
    registry.add_function("lcm", &[Type::Int4, Type::Int4], Type::Int4, int_lcm);
    registry.add_function("lcm", &[Type::Int8, Type::Int8], Type::Int8, int_lcm);
    registry.add_function("lcm", NUM_NUM, Type::Numeric, numeric_lcm_fn);

    registry.add_function("degrees", F8, Type::Float8, degrees);
    registry.add_function("radians", F8, Type::Float8, radians);
    registry.add_function("pi", &[], Type::Float8, pi);
    registry.add_function("factorial", &[Type::Int8], Type::Numeric, factorial);
    registry.add_function("scale", NUM, Type::Int4, scale);

    registry.add_function(
        "width_bucket",
        &[Type::Float8, Type::Float8, Type::Float8, Type::Int4],
        Type::Int4,
        float_width_bucket,
    );
    registry.add_function(
        "width_bucket",
        &[Type::Numeric, Type::Numeric, Type::Numeric, Type::Int4],
        Type::Int4,
        numeric_width_bucket,
    );

    registry.add_function("sin", F8, Type::Float8, |args, _| {
        float8(dsin(float_arg(args, 0)?)?)
    });
    registry.add_function("cos", F8, Type::Float8, |args, _| {
        float8(dcos(float_arg(args, 0)?)?)
    });
    registry.add_function("tan", F8, Type::Float8, |args, _| {
        float8(dtan(float_arg(args, 0)?)?)
    });
    registry.add_function("cot", F8, Type::Float8, |args, _| {
        float8(dcot(float_arg(args, 0)?)?)
    });
    registry.add_function("asin", F8, Type::Float8, |args, _| {
        float8(dasin(float_arg(args, 0)?)?)
    });
    registry.add_function("acos", F8, Type::Float8, |args, _| {
        float8(dacos(float_arg(args, 0)?)?)
    });
    registry.add_function("atan", F8, Type::Float8, |args, _| {
        float8(datan(float_arg(args, 0)?)?)
    });
    registry.add_function("sind", F8, Type::Float8, |args, _| {
        float8(dsind(float_arg(args, 0)?)?)
    });
    registry.add_function("cosd", F8, Type::Float8, |args, _| {
        float8(dcosd(float_arg(args, 0)?)?)
    });
    registry.add_function("tand", F8, Type::Float8, |args, _| {
        float8(dtand(float_arg(args, 0)?)?)
    });
    registry.add_function("cotd", F8, Type::Float8, |args, _| {
        float8(dcotd(float_arg(args, 0)?)?)
    });
    registry.add_function("asind", F8, Type::Float8, |args, _| {
        float8(dasind(float_arg(args, 0)?)?)
    });
    registry.add_function("acosd", F8, Type::Float8, |args, _| {
        float8(dacosd(float_arg(args, 0)?)?)
    });
    registry.add_function("atand", F8, Type::Float8, |args, _| {
        float8(datand(float_arg(args, 0)?)?)
    });
    registry.add_function("sinh", F8, Type::Float8, |args, _| {
        float8(dsinh(float_arg(args, 0)?)?)
    });
    registry.add_function("cosh", F8, Type::Float8, |args, _| {
        float8(dcosh(float_arg(args, 0)?)?)
    });
    registry.add_function("tanh", F8, Type::Float8, |args, _| {
        float8(dtanh(float_arg(args, 0)?)?)
    });
    registry.add_function("asinh", F8, Type::Float8, |args, _| {
        float8(dasinh(float_arg(args, 0)?)?)
    });
    registry.add_function("acosh", F8, Type::Float8, |args, _| {
        float8(dacosh(float_arg(args, 0)?)?)
    });
    registry.add_function("atanh", F8, Type::Float8, |args, _| {
        float8(datanh(float_arg(args, 0)?)?)
    });
    registry.add_function("atan2", F8_F8, Type::Float8, datan2);
    registry.add_function("atan2d", F8_F8, Type::Float8, datan2d);
}

fn float8(value: f64) -> PgResult<Datum> {
    Ok(Datum::Float8(value))
}

fn numeric(value: Decimal) -> PgResult<Datum> {
    Ok(Datum::Numeric(positive_zero(value)))
}

// === Sign and rounding ===

pub(crate) fn int_abs(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let ty = integer_type(&args[0]);
    integer_result((int_arg(args, 0)? as i128).abs(), ty)
}

pub(crate) fn float_abs(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    match &args[0] {
        Datum::Float4(v) => Ok(Datum::Float4(v.abs())),
        _ => float8(float_arg(args, 0)?.abs()),
    }
}

pub(crate) fn numeric_abs(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_arg(args, 0)?.abs())
}

fn float_sign(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    float8(if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    })
}

fn numeric_sign(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    numeric(if value.is_zero() {
        Decimal::ZERO
    } else if value.is_sign_negative() {
        Decimal::NEGATIVE_ONE
    } else {
        Decimal::ONE
    })
}

fn float_ceil(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(float_arg(args, 0)?.ceil())
}

fn numeric_ceil(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_arg(args, 0)?.ceil())
}

fn float_floor(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(float_arg(args, 0)?.floor())
}

fn numeric_floor(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_arg(args, 0)?.floor())
}

/// `rint()`: halfway cases go to the even neighbour
fn float_round(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(float_arg(args, 0)?.round_ties_even())
}

fn float_trunc(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(float_arg(args, 0)?.trunc())
}

fn target_scale(args: &[Datum]) -> PgResult<i64> {
    if args.len() > 1 {
        int_arg(args, 1)
    } else {
        Ok(0)
    }
}

fn numeric_round(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    numeric(round_to_scale(
        value,
        target_scale(args)?,
        RoundingStrategy::MidpointAwayFromZero,
    )?)
}

fn numeric_trunc(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    numeric(round_to_scale(value, target_scale(args)?, RoundingStrategy::ToZero)?)
}

// === Roots, exponentials and logarithms ===

fn sqrt_of_negative() -> PgError {
    PgError::power_function("cannot take square root of a negative number")
}

pub(crate) fn float_sqrt(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    if value < 0.0 {
        return Err(sqrt_of_negative());
    }
    float8(check_float(value.sqrt(), value.is_infinite(), value == 0.0)?)
}

fn numeric_sqrt(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(sqrt_of_negative());
    }
    let weight = nbase_weight(&value).map(|(w, _)| w).unwrap_or(0);
    let result_weight = (weight + 1) * 4 / 2 - 1;
    let rscale = (MIN_SIG_DIGITS - result_weight)
        .max(value.scale() as i64)
        .max(0);
    let root = value.sqrt().ok_or_else(sqrt_of_negative)?;
    numeric(round_to_scale(root, rscale, RoundingStrategy::MidpointAwayFromZero)?)
}

pub(crate) fn float_cbrt(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    float8(check_float(value.cbrt(), value.is_infinite(), value == 0.0)?)
}

fn float_exp(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    if value.is_nan() {
        return float8(value);
    }
    if value.is_infinite() {
        return float8(if value > 0.0 { value } else { 0.0 });
    }
    let result = value.exp();
    if result.is_infinite() {
        return Err(PgError::float_overflow());
    }
    if result == 0.0 {
        return Err(PgError::float_underflow());
    }
    float8(result)
}

fn numeric_exp(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    // decimal weight of the result, approximated in double precision
    let weight = (numeric_to_f64(&value) * 0.434_294_481_903_252).clamp(-1000.0, 1000.0);
    let rscale = (MIN_SIG_DIGITS - weight as i64)
        .max(value.scale() as i64)
        .max(0);
    // A negative argument can only fail by underflowing
    let result = value
        .checked_exp()
        .or_else(|| value.is_sign_negative().then_some(Decimal::ZERO))
        .ok_or_else(PgError::numeric_overflow)?;
    numeric(round_to_scale(result, rscale, RoundingStrategy::MidpointAwayFromZero)?)
}

fn check_log_argument_f64(value: f64) -> PgResult<()> {
    if value == 0.0 {
        return Err(PgError::logarithm_of_zero());
    }
    if value < 0.0 {
        return Err(PgError::logarithm_of_negative());
    }
    Ok(())
}

fn float_ln(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    check_log_argument_f64(value)?;
    float8(check_float(value.ln(), value.is_infinite(), value == 1.0)?)
}

fn float_log10(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    check_log_argument_f64(value)?;
    float8(check_float(value.log10(), value.is_infinite(), value == 1.0)?)
}

fn check_log_argument(value: &Decimal) -> PgResult<()> {
    if value.is_zero() {
        return Err(PgError::logarithm_of_zero());
    }
    if value.is_sign_negative() {
        return Err(PgError::logarithm_of_negative());
    }
    Ok(())
}

/// Decimal exponent of `ln(value)`, used to pick the result scale
fn estimate_ln_dweight(value: &Decimal) -> i64 {
    if *value >= Decimal::new(9, 1) && *value <= Decimal::new(11, 1) {
        // ln(1 + x) is about x near one
        decimal_exponent(&(*value - Decimal::ONE)).unwrap_or(0)
    } else {
        let ln = numeric_to_f64(value).ln();
        if ln == 0.0 || !ln.is_finite() {
            0
        } else {
            ln.abs().log10() as i64
        }
    }
}

fn natural_log(value: &Decimal) -> PgResult<Decimal> {
    check_log_argument(value)?;
    value.checked_ln().ok_or_else(PgError::numeric_overflow)
}

fn numeric_ln(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = numeric_arg(args, 0)?;
    let ln = natural_log(&value)?;
    let rscale = (MIN_SIG_DIGITS - estimate_ln_dweight(&value))
        .max(value.scale() as i64)
        .max(0);
    numeric(round_to_scale(ln, rscale, RoundingStrategy::MidpointAwayFromZero)?)
}

/// `log(base, value)` computed as `ln(value) / ln(base)`
fn log_with_base(base: Decimal, value: Decimal) -> PgResult<Decimal> {
    let ln_base = natural_log(&base)?;
    let ln_value = natural_log(&value)?;
    if ln_base.is_zero() {
        return Err(PgError::division_by_zero());
    }
    let quotient = ln_value
        .checked_div(ln_base)
        .ok_or_else(PgError::numeric_overflow)?;
    let result_dweight = estimate_ln_dweight(&value) - estimate_ln_dweight(&base);
    let rscale = (MIN_SIG_DIGITS - result_dweight)
        .max(base.scale() as i64)
        .max(value.scale() as i64)
        .max(0);
    round_to_scale(quotient, rscale, RoundingStrategy::MidpointAwayFromZero)
}

fn numeric_log10(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(log_with_base(Decimal::TEN, numeric_arg(args, 0)?)?)
}

fn numeric_log(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(log_with_base(numeric_arg(args, 0)?, numeric_arg(args, 1)?)?)
}

// === Powers ===

fn zero_to_negative_power() -> PgError {
    PgError::power_function("zero raised to a negative power is undefined")
}

fn negative_to_fractional_power() -> PgError {
    PgError::power_function(
        "a negative number raised to a non-integer power yields a complex result",
    )
}

/// `dpow`
pub(crate) fn float_power(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let base = float_arg(args, 0)?;
    let exponent = float_arg(args, 1)?;

    if base.is_nan() {
        return float8(if exponent.is_nan() || exponent != 0.0 { f64::NAN } else { 1.0 });
    }
    if exponent.is_nan() {
        return float8(if base != 1.0 { f64::NAN } else { 1.0 });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(zero_to_negative_power());
    }
    if base < 0.0 && exponent.floor() != exponent {
        return Err(negative_to_fractional_power());
    }

    if exponent.is_infinite() {
        let magnitude = base.abs();
        let result = if magnitude == 1.0 {
            1.0
        } else if (exponent > 0.0) == (magnitude > 1.0) {
            f64::INFINITY
        } else {
            0.0
        };
        return float8(result);
    }
    if base.is_infinite() {
        let result = if exponent == 0.0 {
            1.0
        } else if base > 0.0 {
            if exponent > 0.0 {
                base
            } else {
                0.0
            }
        } else {
            let half = exponent / 2.0;
            let even = half == half.floor();
            match (exponent > 0.0, even) {
                (true, true) => -base,
                (true, false) => base,
                (false, true) => 0.0,
                (false, false) => -0.0,
            }
        };
        return float8(result);
    }

    let result = base.powf(exponent);
    float8(check_float(result, false, base == 0.0)?)
}

/// `numeric_power`
pub(crate) fn numeric_power(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let base = numeric_arg(args, 0)?;
    let exponent = numeric_arg(args, 1)?;
    let integral = exponent.fract().is_zero();

    if base.is_zero() && exponent.is_sign_negative() && !exponent.is_zero() {
        return Err(zero_to_negative_power());
    }
    if base.is_sign_negative() && !base.is_zero() && !integral {
        return Err(negative_to_fractional_power());
    }

    let min_scale = (base.scale().max(exponent.scale()) as i64).max(0);
    if base.is_zero() {
        let result = if exponent.is_zero() { Decimal::ONE } else { Decimal::ZERO };
        return numeric(round_to_scale(
            result,
            MIN_SIG_DIGITS.max(min_scale),
            RoundingStrategy::MidpointAwayFromZero,
        )?);
    }

    let weight = numeric_to_f64(&exponent) * numeric_to_f64(&base).abs().log10();
    if weight > 28.0 {
        return Err(PgError::numeric_overflow());
    }
    let rscale = (MIN_SIG_DIGITS - weight as i64).max(min_scale);

    let result = match numeric_to_i64(&exponent).filter(|_| integral) {
        Some(power) if i32::try_from(power).is_ok() => base.checked_powi(power),
        _ => base.checked_powd(exponent),
    }
    .or_else(|| (weight < 0.0).then_some(Decimal::ZERO))
    .ok_or_else(PgError::numeric_overflow)?;
    numeric(round_to_scale(result, rscale, RoundingStrategy::MidpointAwayFromZero)?)
}

// === Integer arithmetic ===

fn numeric_div(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_div_trunc(numeric_arg(args, 0)?, numeric_arg(args, 1)?)?)
}

fn gcd_i128(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let next = a % b;
        a = b;
        b = next;
    }
    a
}

fn int_gcd(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let ty = integer_type(&args[0]);
    let gcd = gcd_i128(int_arg(args, 0)? as i128, int_arg(args, 1)? as i128);
    integer_result(gcd, ty)
}

fn int_lcm(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let ty = integer_type(&args[0]);
    let a = int_arg(args, 0)? as i128;
    let b = int_arg(args, 1)? as i128;
    if a == 0 || b == 0 {
        return integer_result(0, ty);
    }
    integer_result((a / gcd_i128(a, b) * b).abs(), ty)
}

fn numeric_gcd_fn(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_gcd(numeric_arg(args, 0)?, numeric_arg(args, 1)?)?)
}

fn numeric_lcm_fn(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric(numeric_lcm(numeric_arg(args, 0)?, numeric_arg(args, 1)?)?)
}

fn factorial(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let n = int_arg(args, 0)?;
    if n < 0 {
        return Err(PgError::invalid_parameter("factorial of a negative number is undefined"));
    }
    let mut result = Decimal::ONE;
    for i in 2..=n {
        result = result
            .checked_mul(Decimal::from(i))
            .ok_or_else(PgError::numeric_overflow)?;
    }
    numeric(result)
}

fn scale(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(Datum::Int4(numeric_arg(args, 0)?.scale() as i32))
}

// === Angles ===

fn degrees(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    float8(check_float(value / RADIANS_PER_DEGREE, value.is_infinite(), value == 0.0)?)
}

fn radians(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = float_arg(args, 0)?;
    float8(check_float(value * RADIANS_PER_DEGREE, value.is_infinite(), value == 0.0)?)
}

fn pi(_args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(PI)
}

// === width_bucket ===

fn check_bucket_count(count: i64) -> PgResult<()> {
    if count <= 0 {
        return Err(PgError::width_bucket("count must be greater than zero"));
    }
    Ok(())
}

fn equal_bounds() -> PgError {
    PgError::width_bucket("lower bound cannot equal upper bound")
}

fn last_bucket(count: i64) -> PgResult<Datum> {
    integer_result(count as i128 + 1, Type::Int4)
}

fn float_width_bucket(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let operand = float_arg(args, 0)?;
    let low = float_arg(args, 1)?;
    let high = float_arg(args, 2)?;
    let count = int_arg(args, 3)?;

    check_bucket_count(count)?;
    if operand.is_nan() || low.is_nan() || high.is_nan() {
        return Err(PgError::width_bucket(
            "operand, lower bound, and upper bound cannot be NaN",
        ));
    }
    if low.is_infinite() || high.is_infinite() {
        return Err(PgError::width_bucket("lower and upper bounds must be finite"));
    }

    // (distance from the first bound, total width), both positive
    let (offset, width) = if low < high {
        if operand < low {
            return Ok(Datum::Int4(0));
        }
        if operand >= high {
            return last_bucket(count);
        }
        if (high - low).is_finite() {
            (operand - low, high - low)
        } else {
            (operand / 2.0 - low / 2.0, high / 2.0 - low / 2.0)
        }
    } else if low > high {
        if operand > low {
            return Ok(Datum::Int4(0));
        }
        if operand <= high {
            return last_bucket(count);
        }
        if (low - high).is_finite() {
            (low - operand, low - high)
        } else {
            (low / 2.0 - operand / 2.0, low / 2.0 - high / 2.0)
        }
    } else {
        return Err(equal_bounds());
    };

    // The quotient may round up to exactly one
    let bucket = ((count as f64 * (offset / width)) as i64).min(count - 1);
    Ok(Datum::Int4((bucket + 1) as i32))
}

fn numeric_width_bucket(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let operand = numeric_arg(args, 0)?;
    let low = numeric_arg(args, 1)?;
    let high = numeric_arg(args, 2)?;
    let count = int_arg(args, 3)?;

    check_bucket_count(count)?;
    let (from, to) = if low < high {
        if operand < low {
            return Ok(Datum::Int4(0));
        }
        if operand >= high {
            return last_bucket(count);
        }
        ((operand, low), (high, low))
    } else if low > high {
        if operand > low {
            return Ok(Datum::Int4(0));
        }
        if operand <= high {
            return last_bucket(count);
        }
        ((low, operand), (low, high))
    } else {
        return Err(equal_bounds());
    };
    let offset = from.0.checked_sub(from.1).ok_or_else(PgError::numeric_overflow)?;
    let width = to.0.checked_sub(to.1).ok_or_else(PgError::numeric_overflow)?;

    // A quotient that rounds up to `count` lands in bucket count + 1
    let position = numeric_scaled_div(offset, count, width)?;
    let bucket =
        numeric_to_i64(&position.floor()).ok_or_else(|| PgError::out_of_range("integer"))?;
    integer_result(bucket as i128 + 1, Type::Int4)
}

// === Trigonometry ===

fn input_out_of_range() -> PgError {
    PgError::input_out_of_range()
}

fn dsin(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if x.is_infinite() {
        return Err(input_out_of_range());
    }
    Ok(x.sin())
}

fn dcos(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if x.is_infinite() {
        return Err(input_out_of_range());
    }
    Ok(x.cos())
}

fn dtan(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if x.is_infinite() {
        return Err(input_out_of_range());
    }
    Ok(x.tan())
}

/// cot(0) is Infinity, not an error
fn dcot(x: f64) -> PgResult<f64> {
    Ok(1.0 / dtan(x)?)
}

fn dasin(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(input_out_of_range());
    }
    Ok(x.asin())
}

fn dacos(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(input_out_of_range());
    }
    Ok(x.acos())
}

fn datan(x: f64) -> PgResult<f64> {
    Ok(x.atan())
}

fn datan2(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float8(float_arg(args, 0)?.atan2(float_arg(args, 1)?))
}

// Degree variants return exact results at the standard angles (sind(30) is
// exactly 0.5). Each quadrant is reduced to [0, 90] and computed from sin on
// [0, 30] or cos on [0, 60], normalised by the value at the interval end.

fn sind_0_to_30(x: f64) -> f64 {
    let sin_30 = (30.0 * RADIANS_PER_DEGREE).sin();
    (x * RADIANS_PER_DEGREE).sin() / sin_30 / 2.0
}

fn cosd_0_to_60(x: f64) -> f64 {
    let one_minus_cos_60 = 1.0 - (60.0 * RADIANS_PER_DEGREE).cos();
    1.0 - ((1.0 - (x * RADIANS_PER_DEGREE).cos()) / one_minus_cos_60) / 2.0
}

fn sind_q1(x: f64) -> f64 {
    if x <= 30.0 {
        sind_0_to_30(x)
    } else {
        cosd_0_to_60(90.0 - x)
    }
}

fn cosd_q1(x: f64) -> f64 {
    if x <= 60.0 {
        cosd_0_to_60(x)
    } else {
        sind_0_to_30(90.0 - x)
    }
}

fn asind_q1(x: f64) -> f64 {
    if x <= 0.5 {
        x.asin() / 0.5f64.asin() * 30.0
    } else {
        90.0 - x.acos() / 0.5f64.acos() * 60.0
    }
}

fn acosd_q1(x: f64) -> f64 {
    if x <= 0.5 {
        90.0 - x.asin() / 0.5f64.asin() * 30.0
    } else {
        x.acos() / 0.5f64.acos() * 60.0
    }
}

fn check_degrees(x: f64) -> PgResult<()> {
    if x.is_infinite() {
        return Err(input_out_of_range());
    }
    Ok(())
}

/// Reduce to [0, 90] for tand/cotd, returning the angle and the sign
fn reduce_odd_degrees(x: f64) -> (f64, f64) {
    let mut angle = x % 360.0;
    let mut sign = 1.0;
    if angle < 0.0 {
        angle = -angle;
        sign = -sign;
    }
    if angle > 180.0 {
        angle = 360.0 - angle;
        sign = -sign;
    }
    if angle > 90.0 {
        angle = 180.0 - angle;
        sign = -sign;
    }
    (angle, sign)
}

fn dsind(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    check_degrees(x)?;
    let mut angle = x % 360.0;
    let mut sign = 1.0;
    if angle < 0.0 {
        angle = -angle;
        sign = -sign;
    }
    if angle > 180.0 {
        angle = 360.0 - angle;
        sign = -sign;
    }
    if angle > 90.0 {
        angle = 180.0 - angle;
    }
    Ok(sign * sind_q1(angle))
}

fn dcosd(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    check_degrees(x)?;
    let mut angle = (x % 360.0).abs();
    let mut sign = 1.0;
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    if angle > 90.0 {
        angle = 180.0 - angle;
        sign = -sign;
    }
    Ok(sign * cosd_q1(angle))
}

fn dtand(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    check_degrees(x)?;
    let (angle, sign) = reduce_odd_degrees(x);
    let tan_45 = sind_q1(45.0) / cosd_q1(45.0);
    let result = sign * ((sind_q1(angle) / cosd_q1(angle)) / tan_45);
    // no negative zero
    Ok(if result == 0.0 { 0.0 } else { result })
}

fn dcotd(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    check_degrees(x)?;
    let (angle, sign) = reduce_odd_degrees(x);
    let cot_45 = cosd_q1(45.0) / sind_q1(45.0);
    let result = sign * ((cosd_q1(angle) / sind_q1(angle)) / cot_45);
    Ok(if result == 0.0 { 0.0 } else { result })
}

fn dasind(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(input_out_of_range());
    }
    Ok(if x >= 0.0 { asind_q1(x) } else { -asind_q1(-x) })
}

fn dacosd(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(input_out_of_range());
    }
    Ok(if x >= 0.0 { acosd_q1(x) } else { 90.0 + asind_q1(-x) })
}

fn datand(x: f64) -> PgResult<f64> {
    if x.is_nan() {
        return Ok(x);
    }
    Ok(x.atan() / 1.0f64.atan() * 45.0)
}

fn datan2d(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let y = float_arg(args, 0)?;
    let x = float_arg(args, 1)?;
    if y.is_nan() || x.is_nan() {
        return float8(f64::NAN);
    }
    float8(y.atan2(x) / 1.0f64.atan() * 45.0)
}

// === Hyperbolic ===

fn dsinh(x: f64) -> PgResult<f64> {
    Ok(x.sinh())
}

fn dcosh(x: f64) -> PgResult<f64> {
    Ok(x.cosh())
}

fn dtanh(x: f64) -> PgResult<f64> {
    Ok(x.tanh())
}

fn dasinh(x: f64) -> PgResult<f64> {
    Ok(x.asinh())
}

fn dacosh(x: f64) -> PgResult<f64> {
    if x < 1.0 {
        return Err(input_out_of_range());
    }
    Ok(x.acosh())
}

fn datanh(x: f64) -> PgResult<f64> {
    if !(x.is_nan() || (-1.0..=1.0).contains(&x)) {
        return Err(input_out_of_range());
    }
    Ok(if x == 1.0 {
        f64::INFINITY
    } else if x == -1.0 {
        f64::NEG_INFINITY
    } else {
        x.atanh()
    })
}
