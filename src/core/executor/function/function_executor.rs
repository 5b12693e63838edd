// SPDX-License-Identifier: MIT OR Apache-2.0

use super::builtin_wrapper::{format_signature, BuiltinFunction, FunctionRegistry, Namespace};
use super::overload_resolution::{select_candidate, Resolution};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult, SqlState};
use crate::core::executor::cast_executor::CastExecutor;
use crate::core::executor::expression_executor::ExpressionExecutor;
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

/// Call of a resolved builtin function or operator
#[derive(Debug)]
pub struct FunctionExecutor {
    function: BuiltinFunction,
    args: Vec<Box<dyn ExpressionExecutor>>,
}

impl FunctionExecutor {
    /// Resolve `name` against the argument types and coerce the arguments to
    /// the chosen overload's parameter types
    pub fn resolve(
        registry: &FunctionRegistry,
        namespace: Namespace,
        name: &str,
        args: Vec<Box<dyn ExpressionExecutor>>,
    ) -> PgResult<Self> {
        let arg_types: Vec<Type> = args.iter().map(|a| a.return_type()).collect();
        let resolution = match registry.lookup(namespace, name) {
            Some(overloads) => select_candidate(overloads, &arg_types),
            None => Resolution::NotFound,
        };
        let function = match resolution {
            Resolution::Found(function) => function,
            Resolution::NotFound => return Err(not_found(namespace, name, &arg_types)),
            Resolution::Ambiguous => return Err(ambiguous(namespace, name, &arg_types)),
        };
        log::debug!(
            "Resolved {} to {} returning {}",
            format_signature(name, &arg_types),
            function.signature(),
            function.ret
        );

        let args = args
            .into_iter()
            .zip(function.params)
            .map(|(arg, param)| CastExecutor::coerce(arg, *param))
            .collect();
        Ok(Self { function, args })
    }

    pub fn function(&self) -> &BuiltinFunction {
        &self.function
    }
}

fn operator_signature(symbol: &str, arg_types: &[Type]) -> String {
    match arg_types {
        [operand] => format!("{} {}", symbol, operand.name()),
        [left, right] => format!("{} {} {}", left.name(), symbol, right.name()),
        _ => format_signature(symbol, arg_types),
    }
}

fn not_found(namespace: Namespace, name: &str, arg_types: &[Type]) -> PgError {
    match namespace {
        Namespace::Function => PgError::undefined_function(&format_signature(name, arg_types)),
        Namespace::Operator => PgError::undefined_operator(&operator_signature(name, arg_types)),
    }
}

fn ambiguous(namespace: Namespace, name: &str, arg_types: &[Type]) -> PgError {
    match namespace {
        Namespace::Function => PgError::ambiguous_function(&format_signature(name, arg_types)),
        Namespace::Operator => PgError::new(
            SqlState::AmbiguousFunction,
            format!(
                "operator is not unique: {}",
                operator_signature(name, arg_types)
            ),
        )
        .with_hint(
            "Could not choose a best candidate operator. \
             You might need to add explicit type casts.",
        ),
    }
}

impl ExpressionExecutor for FunctionExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        let values = self
            .args
            .iter()
            .map(|arg| arg.execute(ctx))
            .collect::<PgResult<Vec<Datum>>>()?;
        if self.function.strict && values.iter().any(Datum::is_null) {
            return Ok(Datum::Null);
        }
        (self.function.callable)(&values, ctx)
    }

    fn return_type(&self) -> Type {
        self.function.ret
    }
}
