// SPDX-License-Identifier: MIT OR Apache-2.0

use super::case::Case;
use super::cast::Cast;
use super::constant::Constant;
use super::function::FunctionCall;
use super::operator::{Operator, OperatorCall};
use crate::query_api::definition::attribute::{Type, TypeModifier};

/// Scalar expression tree
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Constant(Constant),
    Cast(Cast),
    Function(FunctionCall),
    Operator(OperatorCall),
    Case(Case),
    /// `expr IS NULL` / `expr IS NOT NULL`
    IsNull {
        expression: Box<Expression>,
        negated: bool,
    },
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
}

impl Expression {
    pub fn number(text: impl Into<String>) -> Self {
        Expression::Constant(Constant::Number(text.into()))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expression::Constant(Constant::String(text.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Constant(Constant::Bool(value))
    }

    pub fn null() -> Self {
        Expression::Constant(Constant::Null)
    }

    pub fn cast(expression: Expression, target_type: Type, modifier: Option<TypeModifier>) -> Self {
        Expression::Cast(Cast::new(expression, target_type, modifier))
    }

    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function(FunctionCall::new(name, args))
    }

    pub fn unary(op: Operator, operand: Expression) -> Self {
        Expression::Operator(OperatorCall::prefix(op, operand))
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Operator(OperatorCall::infix(op, left, right))
    }

    /// Column name PostgreSQL assigns to this expression in a target list
    pub fn column_name(&self) -> String {
        match self {
            Expression::Function(call) => call.name.clone(),
            Expression::Cast(cast) => match cast.expression.as_ref() {
                // A cast of a function call keeps the function's name
                inner @ Expression::Function(_) => inner.column_name(),
                _ => cast.target_type.short_name().to_string(),
            },
            Expression::Case(_) => "case".to_string(),
            _ => "?column?".to_string(),
        }
    }
}
