// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod case;
pub mod cast;
pub mod constant;
pub mod expression;
pub mod function;
pub mod operator;

pub use case::{Case, WhenClause};
pub use cast::Cast;
pub use constant::Constant;
pub use expression::Expression;
pub use function::FunctionCall;
pub use operator::{Operator, OperatorCall};
