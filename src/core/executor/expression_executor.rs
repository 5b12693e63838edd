// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expression Executors
//!
//! An [`Expression`] tree is compiled once into a tree of boxed
//! [`ExpressionExecutor`]s. Compilation types every literal, resolves every
//! function and operator overload and inserts the implicit casts the chosen
//! overloads need, so evaluation only moves [`Datum`]s around.

use super::case_executor::CaseExecutor;
use super::cast_executor::CastExecutor;
use super::condition::{AndExecutor, IsNullExecutor, NotExecutor, OrExecutor};
use super::constant_expression_executor::ConstantExpressionExecutor;
use super::function::{FunctionExecutor, FunctionRegistry, Namespace};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use crate::query_api::expression::{Constant, Expression};
use std::fmt::Debug;

pub trait ExpressionExecutor: Debug + Send + Sync {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum>;

    fn return_type(&self) -> Type;

    /// Source text when this is a `numeric` literal, so a cast to a float
    /// type can read the digits directly
    fn literal_text(&self) -> Option<&str> {
        None
    }
}

/// Compile `expression` into an executor tree
pub fn create_expression_executor(
    expression: &Expression,
    registry: &FunctionRegistry,
) -> PgResult<Box<dyn ExpressionExecutor>> {
    match expression {
        Expression::Constant(constant) => Ok(Box::new(constant_executor(constant))),
        Expression::Cast(cast) => {
            let inner = create_expression_executor(&cast.expression, registry)?;
            if let Some(literal) = CastExecutor::float_literal(inner.as_ref(), cast.target_type) {
                return Ok(literal);
            }
            Ok(Box::new(CastExecutor::explicit(
                inner,
                cast.target_type,
                cast.modifier,
            )?))
        }
        Expression::Function(call) => {
            let args = call
                .args
                .iter()
                .map(|arg| create_expression_executor(arg, registry))
                .collect::<PgResult<Vec<_>>>()?;
            Ok(Box::new(FunctionExecutor::resolve(
                registry,
                Namespace::Function,
                &call.name,
                args,
            )?))
        }
        Expression::Operator(op_call) => {
            let mut args = Vec::with_capacity(2);
            if let Some(left) = &op_call.left {
                args.push(create_expression_executor(left, registry)?);
            }
            args.push(create_expression_executor(&op_call.right, registry)?);
            Ok(Box::new(FunctionExecutor::resolve(
                registry,
                Namespace::Operator,
                op_call.op.symbol(),
                args,
            )?))
        }
        Expression::Case(case) => Ok(Box::new(CaseExecutor::new(case, registry)?)),
        Expression::IsNull {
            expression,
            negated,
        } => Ok(Box::new(IsNullExecutor::new(
            create_expression_executor(expression, registry)?,
            *negated,
        ))),
        Expression::And(left, right) => Ok(Box::new(AndExecutor::new(
            coerce_to_boolean(create_expression_executor(left, registry)?, "AND")?,
            coerce_to_boolean(create_expression_executor(right, registry)?, "AND")?,
        ))),
        Expression::Or(left, right) => Ok(Box::new(OrExecutor::new(
            coerce_to_boolean(create_expression_executor(left, registry)?, "OR")?,
            coerce_to_boolean(create_expression_executor(right, registry)?, "OR")?,
        ))),
        Expression::Not(inner) => Ok(Box::new(NotExecutor::new(coerce_to_boolean(
            create_expression_executor(inner, registry)?,
            "NOT",
        )?))),
    }
}

/// Type a literal: integers become `integer`, `bigint` or `numeric` by
/// magnitude; anything with a fraction or exponent is `numeric`; quoted
/// strings stay `unknown` until context decides
fn constant_executor(constant: &Constant) -> ConstantExpressionExecutor {
    match constant {
        Constant::Null => ConstantExpressionExecutor::new(Datum::Null, Type::Unknown),
        Constant::Bool(b) => ConstantExpressionExecutor::new(Datum::Bool(*b), Type::Bool),
        Constant::String(s) => {
            ConstantExpressionExecutor::new(Datum::Text(s.clone()), Type::Unknown)
        }
        Constant::Number(text) => number_literal(text),
    }
}

fn number_literal(text: &str) -> ConstantExpressionExecutor {
    let integral = !text.contains(['.', 'e', 'E']);
    if integral {
        if let Ok(v) = text.parse::<i32>() {
            return ConstantExpressionExecutor::new(Datum::Int4(v), Type::Int4);
        }
        if let Ok(v) = text.parse::<i64>() {
            return ConstantExpressionExecutor::new(Datum::Int8(v), Type::Int8);
        }
    }
    ConstantExpressionExecutor::numeric_literal(text)
}

/// Require a boolean argument, resolving `unknown` literals to `boolean`
pub(crate) fn coerce_to_boolean(
    executor: Box<dyn ExpressionExecutor>,
    construct: &str,
) -> PgResult<Box<dyn ExpressionExecutor>> {
    match executor.return_type() {
        Type::Bool => Ok(executor),
        Type::Unknown => Ok(Box::new(CastExecutor::implicit(executor, Type::Bool))),
        other => Err(PgError::datatype_mismatch(format!(
            "argument of {} must be type boolean, not type {}",
            construct,
            other.name()
        ))),
    }
}
