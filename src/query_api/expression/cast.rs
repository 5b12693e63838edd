// SPDX-License-Identifier: MIT OR Apache-2.0

//! CAST Expression
//!
//! Represents a type conversion expression: `CAST(expr AS type)` or the
//! PostgreSQL shorthand `expr::type`.

use super::expression::Expression;
use crate::query_api::definition::attribute::{Type, TypeModifier};

/// CAST expression for type conversion
///
/// Supports conversions between:
/// - unknown literals and every type (through the type's input function)
/// - every type and text/varchar (through the type's output function)
/// - numeric types, with range checks when narrowing
/// - boolean and integer
#[derive(Clone, Debug, PartialEq)]
pub struct Cast {
    /// The expression to convert
    pub expression: Box<Expression>,
    /// The target type to convert to
    pub target_type: Type,
    /// `numeric(p,s)` / `varchar(n)` modifier of the target type
    pub modifier: Option<TypeModifier>,
}

impl Cast {
    /// Create a new Cast expression
    pub fn new(expression: Expression, target_type: Type, modifier: Option<TypeModifier>) -> Self {
        Self {
            expression: Box::new(expression),
            target_type,
            modifier,
        }
    }
}
