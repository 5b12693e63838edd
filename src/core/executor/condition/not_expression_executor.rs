// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::config::eval_context::EvalContext;
use crate::core::error::PgResult;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

#[derive(Debug)]
pub struct NotExecutor {
    inner: Box<dyn ExpressionExecutor>,
}

impl NotExecutor {
    pub fn new(inner: Box<dyn ExpressionExecutor>) -> Self {
        Self { inner }
    }
}

impl ExpressionExecutor for NotExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        Ok(match self.inner.execute(ctx)? {
            Datum::Bool(b) => Datum::Bool(!b),
            _ => Datum::Null,
        })
    }

    fn return_type(&self) -> Type {
        Type::Bool
    }
}
