// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::query_api::expression::Expression;

/// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`
///
/// With an operand each WHEN holds a value compared to it with `=`;
/// without one each WHEN holds a boolean condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub operand: Option<Box<Expression>>,
    pub when_clauses: Vec<WhenClause>,
    /// NULL when absent
    pub else_result: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhenClause {
    /// Condition, or the value to compare for a simple CASE
    pub condition: Box<Expression>,
    pub result: Box<Expression>,
}

impl Case {
    pub fn new(
        operand: Option<Box<Expression>>,
        when_clauses: Vec<WhenClause>,
        else_result: Option<Box<Expression>>,
    ) -> Self {
        Self {
            operand,
            when_clauses,
            else_result,
        }
    }

    /// `CASE operand WHEN value THEN result ...`
    pub fn simple(
        operand: Expression,
        when_clauses: Vec<WhenClause>,
        else_result: Option<Expression>,
    ) -> Self {
        Self::new(Some(Box::new(operand)), when_clauses, else_result.map(Box::new))
    }

    /// `CASE WHEN condition THEN result ...`
    pub fn searched(when_clauses: Vec<WhenClause>, else_result: Option<Expression>) -> Self {
        Self::new(None, when_clauses, else_result.map(Box::new))
    }

    pub fn is_simple(&self) -> bool {
        self.operand.is_some()
    }
}

impl WhenClause {
    pub fn new(condition: Box<Expression>, result: Box<Expression>) -> Self {
        Self { condition, result }
    }
}
