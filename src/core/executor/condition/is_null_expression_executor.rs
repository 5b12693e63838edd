// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::config::eval_context::EvalContext;
use crate::core::error::PgResult;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

/// `expr IS [NOT] NULL`; never returns NULL itself
#[derive(Debug)]
pub struct IsNullExecutor {
    inner: Box<dyn ExpressionExecutor>,
    negated: bool,
}

impl IsNullExecutor {
    pub fn new(inner: Box<dyn ExpressionExecutor>, negated: bool) -> Self {
        Self { inner, negated }
    }
}

impl ExpressionExecutor for IsNullExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        let is_null = self.inner.execute(ctx)?.is_null();
        Ok(Datum::Bool(is_null != self.negated))
    }

    fn return_type(&self) -> Type {
        Type::Bool
    }
}
