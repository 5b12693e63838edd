// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod case_executor;
pub mod cast_executor;
pub mod condition;
pub mod constant_expression_executor;
pub mod expression_executor;
pub mod function;

pub use self::case_executor::CaseExecutor;
pub use self::cast_executor::CastExecutor;
pub use self::constant_expression_executor::ConstantExpressionExecutor;
pub use self::expression_executor::{create_expression_executor, ExpressionExecutor};
pub use self::function::{FunctionExecutor, FunctionRegistry};
