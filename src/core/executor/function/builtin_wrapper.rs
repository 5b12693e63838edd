// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builtin function catalog
//!
//! Every builtin is a plain function pointer registered under a name with a
//! fixed parameter list. Functions and operators live in separate
//! namespaces of the same [`FunctionRegistry`]; an operator is registered
//! under its symbol (`+`, `||`, ...) with one or two parameters.

use super::{math_functions, operator_functions, string_functions};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Body of a builtin; arguments arrive already coerced to the parameter types
pub type ScalarFn = fn(&[Datum], &EvalContext) -> PgResult<Datum>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Function,
    Operator,
}

#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub params: &'static [Type],
    pub ret: Type,
    /// Strict functions return NULL for any NULL argument without being called
    pub strict: bool,
    pub callable: ScalarFn,
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("ret", &self.ret)
            .finish()
    }
}

impl BuiltinFunction {
    /// `name(type, type)` as printed in error messages
    pub fn signature(&self) -> String {
        format_signature(self.name, self.params)
    }
}

pub fn format_signature(name: &str, types: &[Type]) -> String {
    let args: Vec<&str> = types.iter().map(|t| t.name()).collect();
    format!("{}({})", name, args.join(", "))
}

/// All overloads registered under one name
#[derive(Debug, Default, Clone)]
pub struct Overloads {
    candidates: Vec<BuiltinFunction>,
}

impl Overloads {
    pub fn candidates(&self) -> &[BuiltinFunction] {
        &self.candidates
    }

    fn push(&mut self, function: BuiltinFunction) {
        self.candidates.push(function);
    }
}

static BUILTINS: Lazy<Arc<FunctionRegistry>> = Lazy::new(|| {
    let registry = FunctionRegistry::with_builtins();
    log::debug!(
        "Registered {} builtin function names and {} operators",
        registry.functions.len(),
        registry.operators.len()
    );
    Arc::new(registry)
});

#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, Overloads>,
    operators: HashMap<&'static str, Overloads>,
}

impl FunctionRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every builtin function and operator
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        math_functions::register_math_functions(&mut registry);
        string_functions::register_string_functions(&mut registry);
        operator_functions::register_operators(&mut registry);
        registry
    }

    /// Shared builtin registry, built on first use
    pub fn global() -> Arc<FunctionRegistry> {
        Arc::clone(&BUILTINS)
    }

    pub fn add_function(
        &mut self,
        name: &'static str,
        params: &'static [Type],
        ret: Type,
        callable: ScalarFn,
    ) {
        self.add(Namespace::Function, name, params, ret, callable);
    }

    pub fn add_operator(
        &mut self,
        symbol: &'static str,
        params: &'static [Type],
        ret: Type,
        callable: ScalarFn,
    ) {
        self.add(Namespace::Operator, symbol, params, ret, callable);
    }

    fn add(
        &mut self,
        namespace: Namespace,
        name: &'static str,
        params: &'static [Type],
        ret: Type,
        callable: ScalarFn,
    ) {
        let map = match namespace {
            Namespace::Function => &mut self.functions,
            Namespace::Operator => &mut self.operators,
        };
        map.entry(name).or_default().push(BuiltinFunction {
            name,
            params,
            ret,
            strict: true,
            callable,
        });
    }

    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<&Overloads> {
        match namespace {
            Namespace::Function => self.functions.get(name),
            Namespace::Operator => self.operators.get(name),
        }
    }

    /// Sorted names of all registered functions
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Sorted symbols of all registered operators
    pub fn operator_symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<&'static str> = self.operators.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}

// --- Argument accessors for builtin bodies ---

fn bad_argument(args: &[Datum], index: usize, expected: &str) -> PgError {
    PgError::internal(format!(
        "argument {} is {:?}, expected {}",
        index + 1,
        args.get(index),
        expected
    ))
}

pub(crate) fn int_arg(args: &[Datum], index: usize) -> PgResult<i64> {
    args.get(index)
        .and_then(Datum::as_i64)
        .ok_or_else(|| bad_argument(args, index, "an integer"))
}

pub(crate) fn float_arg(args: &[Datum], index: usize) -> PgResult<f64> {
    args.get(index)
        .and_then(Datum::as_f64)
        .ok_or_else(|| bad_argument(args, index, "a float"))
}

pub(crate) fn numeric_arg(args: &[Datum], index: usize) -> PgResult<Decimal> {
    args.get(index)
        .and_then(Datum::as_numeric)
        .ok_or_else(|| bad_argument(args, index, "a numeric"))
}

pub(crate) fn text_arg(args: &[Datum], index: usize) -> PgResult<&str> {
    args.get(index)
        .and_then(Datum::as_str)
        .ok_or_else(|| bad_argument(args, index, "a text"))
}

pub(crate) fn bool_arg(args: &[Datum], index: usize) -> PgResult<bool> {
    args.get(index)
        .and_then(Datum::as_bool)
        .ok_or_else(|| bad_argument(args, index, "a boolean"))
}
