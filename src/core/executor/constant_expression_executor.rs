// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::config::eval_context::EvalContext;
use crate::core::error::PgResult;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::numeric::parse_numeric;
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

#[derive(Debug, Clone)]
pub struct ConstantExpressionExecutor {
    value: PgResult<Datum>,
    return_type: Type,
    /// Source text of a numeric literal
    literal: Option<String>,
}

impl ConstantExpressionExecutor {
    pub fn new(value: Datum, return_type: Type) -> Self {
        Self::from_result(Ok(value), return_type)
    }

    /// A constant whose computation failed; the error surfaces on execution
    pub fn from_result(value: PgResult<Datum>, return_type: Type) -> Self {
        Self {
            value,
            return_type,
            literal: None,
        }
    }

    /// A `numeric` literal. Text outside the numeric range only fails when
    /// the literal is evaluated as `numeric`.
    pub fn numeric_literal(text: &str) -> Self {
        Self {
            value: parse_numeric(text).map(Datum::Numeric),
            return_type: Type::Numeric,
            literal: Some(text.to_string()),
        }
    }
}

impl ExpressionExecutor for ConstantExpressionExecutor {
    fn execute(&self, _ctx: &EvalContext) -> PgResult<Datum> {
        self.value.clone()
    }

    fn return_type(&self) -> Type {
        self.return_type
    }

    fn literal_text(&self) -> Option<&str> {
        self.literal.as_deref()
    }
}
