// SPDX-License-Identifier: MIT OR Apache-2.0

// Arithmetic, comparison and concatenation operators.
//
// Integer operators compute in i128 and range-check into the operand width,
// so they never wrap. Float operators report overflow only when a finite
// input produces an infinite result, as PostgreSQL's float8pl & co do.

use super::builtin_wrapper::{float_arg, int_arg, numeric_arg, text_arg, FunctionRegistry};
use super::math_functions::{
    float_abs, float_cbrt, float_power, float_sqrt, int_abs, numeric_abs, numeric_power,
};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::numeric::{numeric_div, numeric_mod, positive_zero};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

const INTEGER_TYPES: [Type; 3] = [Type::Int2, Type::Int4, Type::Int8];

pub(super) fn register_operators(registry: &mut FunctionRegistry) {
    for ty in INTEGER_TYPES {
        let binary: &'static [Type] = binary_params(ty);
        let unary: &'static [Type] = unary_params(ty);
        registry.add_operator("+", binary, ty, int_pl);
        registry.add_operator("-", binary, ty, int_mi);
        registry.add_operator("*", binary, ty, int_mul);
        registry.add_operator("/", binary, ty, int_div);
        registry.add_operator("%", binary, ty, int_mod);
        registry.add_operator("-", unary, ty, int_um);
        registry.add_operator("+", unary, ty, identity);
        registry.add_operator("@", unary, ty, int_abs);
    }

    for ty in [Type::Float4, Type::Float8] {
        let binary: &'static [Type] = binary_params(ty);
        let unary: &'static [Type] = unary_params(ty);
        registry.add_operator("+", binary, ty, float_pl);
        registry.add_operator("-", binary, ty, float_mi);
        registry.add_operator("*", binary, ty, float_mul);
        registry.add_operator("/", binary, ty, float_div);
        registry.add_operator("-", unary, ty, float_um);
        registry.add_operator("+", unary, ty, identity);
        registry.add_operator("@", unary, ty, float_abs);
    }
    registry.add_operator("^", &[Type::Float8, Type::Float8], Type::Float8, float_power);
    registry.add_operator("|/", &[Type::Float8], Type::Float8, float_sqrt);
    registry.add_operator("||/", &[Type::Float8], Type::Float8, float_cbrt);

    let numeric: &'static [Type] = &[Type::Numeric, Type::Numeric];
    registry.add_operator("+", numeric, Type::Numeric, numeric_pl);
    registry.add_operator("-", numeric, Type::Numeric, numeric_mi);
    registry.add_operator("*", numeric, Type::Numeric, numeric_mul);
    registry.add_operator("/", numeric, Type::Numeric, numeric_div_op);
    registry.add_operator("%", numeric, Type::Numeric, numeric_mod_op);
    registry.add_operator("^", numeric, Type::Numeric, numeric_power);
    registry.add_operator("-", &[Type::Numeric], Type::Numeric, numeric_um);
    registry.add_operator("+", &[Type::Numeric], Type::Numeric, identity);
    registry.add_operator("@", &[Type::Numeric], Type::Numeric, numeric_abs);

    for ty in [
        Type::Bool,
        Type::Int2,
        Type::Int4,
        Type::Int8,
        Type::Float4,
        Type::Float8,
        Type::Numeric,
        Type::Text,
    ] {
        let binary: &'static [Type] = binary_params(ty);
        registry.add_operator("=", binary, Type::Bool, op_eq);
        registry.add_operator("<>", binary, Type::Bool, op_ne);
        registry.add_operator("<", binary, Type::Bool, op_lt);
        registry.add_operator("<=", binary, Type::Bool, op_le);
        registry.add_operator(">", binary, Type::Bool, op_gt);
        registry.add_operator(">=", binary, Type::Bool, op_ge);
    }

    registry.add_operator("||", &[Type::Text, Type::Text], Type::Text, text_concat);
    for ty in [
        Type::Bool,
        Type::Int2,
        Type::Int4,
        Type::Int8,
        Type::Float4,
        Type::Float8,
        Type::Numeric,
    ] {
        registry.add_operator("||", text_any_params(ty), Type::Text, text_concat);
        registry.add_operator("||", any_text_params(ty), Type::Text, text_concat);
    }
}

fn binary_params(ty: Type) -> &'static [Type] {
    match ty {
        Type::Bool => &[Type::Bool, Type::Bool],
        Type::Int2 => &[Type::Int2, Type::Int2],
        Type::Int4 => &[Type::Int4, Type::Int4],
        Type::Int8 => &[Type::Int8, Type::Int8],
        Type::Float4 => &[Type::Float4, Type::Float4],
        Type::Float8 => &[Type::Float8, Type::Float8],
        Type::Numeric => &[Type::Numeric, Type::Numeric],
        Type::Varchar => &[Type::Varchar, Type::Varchar],
        Type::Unknown => &[Type::Unknown, Type::Unknown],
        Type::Text => &[Type::Text, Type::Text],
    }
}

fn unary_params(ty: Type) -> &'static [Type] {
    match ty {
        Type::Bool => &[Type::Bool],
        Type::Int2 => &[Type::Int2],
        Type::Int4 => &[Type::Int4],
        Type::Int8 => &[Type::Int8],
        Type::Float4 => &[Type::Float4],
        Type::Float8 => &[Type::Float8],
        Type::Numeric => &[Type::Numeric],
        Type::Varchar => &[Type::Varchar],
        Type::Unknown => &[Type::Unknown],
        Type::Text => &[Type::Text],
    }
}

fn text_any_params(ty: Type) -> &'static [Type] {
    match ty {
        Type::Bool => &[Type::Text, Type::Bool],
        Type::Int2 => &[Type::Text, Type::Int2],
        Type::Int4 => &[Type::Text, Type::Int4],
        Type::Int8 => &[Type::Text, Type::Int8],
        Type::Float4 => &[Type::Text, Type::Float4],
        Type::Float8 => &[Type::Text, Type::Float8],
        Type::Numeric => &[Type::Text, Type::Numeric],
        _ => &[Type::Text, Type::Text],
    }
}

fn any_text_params(ty: Type) -> &'static [Type] {
    match ty {
        Type::Bool => &[Type::Bool, Type::Text],
        Type::Int2 => &[Type::Int2, Type::Text],
        Type::Int4 => &[Type::Int4, Type::Text],
        Type::Int8 => &[Type::Int8, Type::Text],
        Type::Float4 => &[Type::Float4, Type::Text],
        Type::Float8 => &[Type::Float8, Type::Text],
        Type::Numeric => &[Type::Numeric, Type::Text],
        _ => &[Type::Text, Type::Text],
    }
}

fn identity(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(args[0].clone())
}

// === Integer ===

/// Width of an integer argument, taken from its variant
pub(crate) fn integer_type(value: &Datum) -> Type {
    match value {
        Datum::Int2(_) => Type::Int2,
        Datum::Int4(_) => Type::Int4,
        _ => Type::Int8,
    }
}

/// Range-check an exact result into an integer type
pub(crate) fn integer_result(value: i128, ty: Type) -> PgResult<Datum> {
    let out_of_range = || PgError::out_of_range(ty.name());
    match ty {
        Type::Int2 => i16::try_from(value).map(Datum::Int2).map_err(|_| out_of_range()),
        Type::Int4 => i32::try_from(value).map(Datum::Int4).map_err(|_| out_of_range()),
        _ => i64::try_from(value).map(Datum::Int8).map_err(|_| out_of_range()),
    }
}

fn int_binary(args: &[Datum], op: impl Fn(i128, i128) -> PgResult<i128>) -> PgResult<Datum> {
    let ty = integer_type(&args[0]);
    let left = int_arg(args, 0)? as i128;
    let right = int_arg(args, 1)? as i128;
    integer_result(op(left, right)?, ty)
}

fn int_pl(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    int_binary(args, |a, b| Ok(a + b))
}

fn int_mi(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    int_binary(args, |a, b| Ok(a - b))
}

fn int_mul(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    int_binary(args, |a, b| Ok(a * b))
}

fn int_div(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    int_binary(args, |a, b| {
        if b == 0 {
            return Err(PgError::division_by_zero());
        }
        Ok(a / b)
    })
}

pub(crate) fn int_mod(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    int_binary(args, |a, b| {
        if b == 0 {
            return Err(PgError::division_by_zero());
        }
        Ok(a % b)
    })
}

fn int_um(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let ty = integer_type(&args[0]);
    integer_result(-(int_arg(args, 0)? as i128), ty)
}

// === Floating point ===

/// Arithmetic shared by `real` and `double precision`
pub(crate) trait PgFloat:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;

    fn is_inf(self) -> bool;

    fn is_nan_value(self) -> bool;

    fn into_datum(self) -> Datum;
}

impl PgFloat for f32 {
    const ZERO: Self = 0.0;

    fn is_inf(self) -> bool {
        self.is_infinite()
    }

    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    fn into_datum(self) -> Datum {
        Datum::Float4(self)
    }
}

impl PgFloat for f64 {
    const ZERO: Self = 0.0;

    fn is_inf(self) -> bool {
        self.is_infinite()
    }

    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    fn into_datum(self) -> Datum {
        Datum::Float8(self)
    }
}

/// `float_overflow_error` / `float_underflow_error` checks
pub(crate) fn check_float<F: PgFloat>(
    result: F,
    inf_allowed: bool,
    zero_allowed: bool,
) -> PgResult<F> {
    if result.is_inf() && !inf_allowed {
        return Err(PgError::float_overflow());
    }
    if result == F::ZERO && !zero_allowed {
        return Err(PgError::float_underflow());
    }
    Ok(result)
}

fn float_pl_impl<F: PgFloat>(a: F, b: F) -> PgResult<F> {
    check_float(a + b, a.is_inf() || b.is_inf(), true)
}

fn float_mi_impl<F: PgFloat>(a: F, b: F) -> PgResult<F> {
    check_float(a - b, a.is_inf() || b.is_inf(), true)
}

fn float_mul_impl<F: PgFloat>(a: F, b: F) -> PgResult<F> {
    check_float(a * b, a.is_inf() || b.is_inf(), a == F::ZERO || b == F::ZERO)
}

fn float_div_impl<F: PgFloat>(a: F, b: F) -> PgResult<F> {
    if b == F::ZERO && !a.is_nan_value() {
        return Err(PgError::division_by_zero());
    }
    check_float(a / b, a.is_inf(), a == F::ZERO || b.is_inf())
}

fn float_binary(
    args: &[Datum],
    op4: fn(f32, f32) -> PgResult<f32>,
    op8: fn(f64, f64) -> PgResult<f64>,
) -> PgResult<Datum> {
    match (&args[0], &args[1]) {
        (Datum::Float4(a), Datum::Float4(b)) => op4(*a, *b).map(PgFloat::into_datum),
        _ => op8(float_arg(args, 0)?, float_arg(args, 1)?).map(PgFloat::into_datum),
    }
}

fn float_pl(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float_binary(args, float_pl_impl::<f32>, float_pl_impl::<f64>)
}

fn float_mi(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float_binary(args, float_mi_impl::<f32>, float_mi_impl::<f64>)
}

fn float_mul(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float_binary(args, float_mul_impl::<f32>, float_mul_impl::<f64>)
}

fn float_div(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    float_binary(args, float_div_impl::<f32>, float_div_impl::<f64>)
}

fn float_um(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    match &args[0] {
        Datum::Float4(v) => Ok(Datum::Float4(-*v)),
        _ => Ok(Datum::Float8(-float_arg(args, 0)?)),
    }
}

// === Numeric ===

fn numeric_binary(
    args: &[Datum],
    op: impl Fn(Decimal, Decimal) -> PgResult<Decimal>,
) -> PgResult<Datum> {
    let left = numeric_arg(args, 0)?;
    let right = numeric_arg(args, 1)?;
    Ok(Datum::Numeric(positive_zero(op(left, right)?)))
}

fn numeric_pl(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric_binary(args, |a, b| a.checked_add(b).ok_or_else(PgError::numeric_overflow))
}

fn numeric_mi(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric_binary(args, |a, b| a.checked_sub(b).ok_or_else(PgError::numeric_overflow))
}

fn numeric_mul(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric_binary(args, |a, b| a.checked_mul(b).ok_or_else(PgError::numeric_overflow))
}

fn numeric_div_op(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric_binary(args, numeric_div)
}

pub(crate) fn numeric_mod_op(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    numeric_binary(args, numeric_mod)
}

fn numeric_um(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(Datum::Numeric(positive_zero(-numeric_arg(args, 0)?)))
}

// === Comparison ===

/// Float ordering with NaN equal to itself and greater than everything else
fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compare two non-null values of the same type
pub(crate) fn compare_datums(left: &Datum, right: &Datum) -> PgResult<Ordering> {
    match (left, right) {
        (Datum::Bool(a), Datum::Bool(b)) => Ok(a.cmp(b)),
        (Datum::Float4(_) | Datum::Float8(_), Datum::Float4(_) | Datum::Float8(_)) => {
            Ok(float_cmp(left.as_f64().unwrap_or(f64::NAN), right.as_f64().unwrap_or(f64::NAN)))
        }
        (Datum::Numeric(a), Datum::Numeric(b)) => Ok(a.cmp(b)),
        (Datum::Text(a), Datum::Text(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
        (a, b) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => Ok(a.cmp(&b)),
            _ => Err(PgError::internal(format!(
                "cannot compare {:?} with {:?}",
                left, right
            ))),
        },
    }
}

fn comparison(args: &[Datum], test: fn(Ordering) -> bool) -> PgResult<Datum> {
    Ok(Datum::Bool(test(compare_datums(&args[0], &args[1])?)))
}

pub(crate) fn op_eq(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_eq)
}

fn op_ne(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_ne)
}

fn op_lt(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_lt)
}

fn op_le(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_le)
}

fn op_gt(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_gt)
}

fn op_ge(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    comparison(args, Ordering::is_ge)
}

// === Concatenation ===

fn text_concat(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    let left = match &args[0] {
        Datum::Text(_) => text_arg(args, 0)?.to_string(),
        other => other.to_text(ctx.extra_float_digits).unwrap_or_default(),
    };
    let right = match &args[1] {
        Datum::Text(_) => text_arg(args, 1)?.to_string(),
        other => other.to_text(ctx.extra_float_digits).unwrap_or_default(),
    };
    if left.len() + right.len() > ctx.max_text_length {
        return Err(PgError::program_limit("requested length too large"));
    }
    Ok(Datum::Text(left + &right))
}
