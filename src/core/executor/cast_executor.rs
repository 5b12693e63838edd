// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cast Expression Executor
//!
//! Executes both explicit casts (`CAST(x AS t)`, `x::t`) and the implicit
//! coercions overload resolution inserts around function arguments. The
//! conversion rules themselves live in [`crate::core::cast`].

use super::expression_executor::ExpressionExecutor;
use super::constant_expression_executor::ConstantExpressionExecutor;
use crate::core::cast::{can_cast_explicitly, cast_datum, input_function};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::{Type, TypeModifier};

/// Executor for CAST expressions
#[derive(Debug)]
pub struct CastExecutor {
    /// The inner expression to evaluate before casting
    inner_executor: Box<dyn ExpressionExecutor>,
    /// The type the inner expression produces
    source_type: Type,
    /// The target type to cast to
    target_type: Type,
    modifier: Option<TypeModifier>,
}

impl CastExecutor {
    /// Explicit cast; fails at plan time when no cast exists between the types
    pub fn explicit(
        inner_executor: Box<dyn ExpressionExecutor>,
        target_type: Type,
        modifier: Option<TypeModifier>,
    ) -> PgResult<Self> {
        let source_type = inner_executor.return_type();
        if !can_cast_explicitly(source_type, target_type) {
            return Err(PgError::cannot_coerce(source_type.name(), target_type.name()));
        }
        Ok(Self {
            inner_executor,
            source_type,
            target_type,
            modifier,
        })
    }

    /// Coercion chosen by overload resolution; the cast is known to be implicit
    pub fn implicit(inner_executor: Box<dyn ExpressionExecutor>, target_type: Type) -> Self {
        let source_type = inner_executor.return_type();
        Self {
            inner_executor,
            source_type,
            target_type,
            modifier: None,
        }
    }

    /// Wrap `executor` in a coercion to `target_type` unless it already produces it
    pub fn coerce(
        executor: Box<dyn ExpressionExecutor>,
        target_type: Type,
    ) -> Box<dyn ExpressionExecutor> {
        if executor.return_type() == target_type {
            executor
        } else if let Some(literal) = Self::float_literal(executor.as_ref(), target_type) {
            literal
        } else {
            Box::new(Self::implicit(executor, target_type))
        }
    }

    /// A `numeric` literal headed for `real` or `double precision` is read
    /// from its text, which may lie outside the numeric range
    pub fn float_literal(
        executor: &dyn ExpressionExecutor,
        target_type: Type,
    ) -> Option<Box<dyn ExpressionExecutor>> {
        if !matches!(target_type, Type::Float4 | Type::Float8) {
            return None;
        }
        let text = executor.literal_text()?;
        Some(Box::new(ConstantExpressionExecutor::from_result(
            input_function(text, target_type),
            target_type,
        )))
    }
}

impl ExpressionExecutor for CastExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        let value = self.inner_executor.execute(ctx)?;
        cast_datum(value, self.source_type, self.target_type, self.modifier, ctx)
    }

    fn return_type(&self) -> Type {
        // A cast to `unknown` keeps the literal's text
        self.target_type
    }
}
