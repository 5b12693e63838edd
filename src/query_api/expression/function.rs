// SPDX-License-Identifier: MIT OR Apache-2.0

use super::expression::Expression;

/// Call of a named scalar function
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    /// Lower-cased, schema-stripped function name
    pub name: String,
    pub args: Vec<Expression>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}
