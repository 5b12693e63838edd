// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean connectives and null tests, with SQL three-valued logic

pub mod and_expression_executor;
pub mod is_null_expression_executor;
pub mod not_expression_executor;
pub mod or_expression_executor;

pub use and_expression_executor::AndExecutor;
pub use is_null_expression_executor::IsNullExecutor;
pub use not_expression_executor::NotExecutor;
pub use or_expression_executor::OrExecutor;
