// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod builtin_wrapper;
pub mod function_executor;
pub mod math_functions;
pub mod operator_functions;
pub mod overload_resolution;
pub mod string_functions;

pub use builtin_wrapper::{BuiltinFunction, FunctionRegistry, Namespace, Overloads, ScalarFn};
pub use function_executor::FunctionExecutor;
pub use overload_resolution::{select_candidate, Resolution};
