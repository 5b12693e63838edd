// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::config::eval_context::EvalContext;
use crate::core::error::PgResult;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

/// `left AND right`: false dominates NULL
#[derive(Debug)]
pub struct AndExecutor {
    left: Box<dyn ExpressionExecutor>,
    right: Box<dyn ExpressionExecutor>,
}

impl AndExecutor {
    pub fn new(left: Box<dyn ExpressionExecutor>, right: Box<dyn ExpressionExecutor>) -> Self {
        Self { left, right }
    }
}

impl ExpressionExecutor for AndExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        let left = self.left.execute(ctx)?;
        if left == Datum::Bool(false) {
            return Ok(Datum::Bool(false));
        }
        let right = self.right.execute(ctx)?;
        Ok(match (left, right) {
            (_, Datum::Bool(false)) => Datum::Bool(false),
            (Datum::Bool(true), Datum::Bool(true)) => Datum::Bool(true),
            _ => Datum::Null,
        })
    }

    fn return_type(&self) -> Type {
        Type::Bool
    }
}
