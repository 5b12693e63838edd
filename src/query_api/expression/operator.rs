// SPDX-License-Identifier: MIT OR Apache-2.0

use super::expression::Expression;
use std::fmt;

/// Operators resolved through the operator catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    Concat,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    SquareRoot,
    CubeRoot,
    Abs,
}

impl Operator {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Exponent => "^",
            Operator::Concat => "||",
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::SquareRoot => "|/",
            Operator::CubeRoot => "||/",
            Operator::Abs => "@",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix (`-x`) or infix (`x + y`) operator application
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorCall {
    pub op: Operator,
    pub left: Option<Box<Expression>>,
    pub right: Box<Expression>,
}

impl OperatorCall {
    pub fn prefix(op: Operator, operand: Expression) -> Self {
        Self {
            op,
            left: None,
            right: Box::new(operand),
        }
    }

    pub fn infix(op: Operator, left: Expression, right: Expression) -> Self {
        Self {
            op,
            left: Some(Box::new(left)),
            right: Box::new(right),
        }
    }
}
