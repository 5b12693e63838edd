// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared harness for the compatibility tests: statements run through an
// in-process Engine and results are compared against values recorded from a
// PostgreSQL server.

#![allow(dead_code)]

use pgscalar::core::numeric::parse_numeric;
use pgscalar::core::{Datum, Engine, PgError, SqlState};
use rust_decimal::Decimal;

/// Floats and numerics only need to agree to this many units
pub const TOLERANCE: f64 = 0.001;

/// What a single-value query should produce
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Null,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float8(f64),
    /// Decimal text, compared with [`TOLERANCE`]
    Numeric(&'static str),
    Text(&'static str),
    /// Any error
    Error,
    /// An error with this SQLSTATE
    ErrorCode(SqlState),
}

pub struct ScriptTestAssertion {
    pub query: &'static str,
    pub expected: Outcome,
}

/// Statements run in order on one engine, so session settings carry over
pub struct ScriptTest {
    pub name: &'static str,
    pub set_up_script: &'static [&'static str],
    pub assertions: &'static [ScriptTestAssertion],
}

/// Run `(query, expected)` pairs on a shared engine
pub fn run_cases(cases: &[(&str, Outcome)]) {
    let mut engine = Engine::new();
    for (query, expected) in cases {
        check(&mut engine, "cases", query, *expected);
    }
}

/// Run a single-value query that must succeed
pub fn query_value(engine: &mut Engine, query: &str) -> Datum {
    match engine.execute(query) {
        Ok(result) => match result.scalar() {
            Some(datum) => datum.clone(),
            None => panic!("{}: expected one value, got {:?}", query, result.rows),
        },
        Err(e) => panic!("{}: unexpected error {}", query, e),
    }
}

pub fn run_script(test: &ScriptTest) {
    let mut engine = Engine::new();
    for statement in test.set_up_script {
        if let Err(e) = engine.execute(statement) {
            panic!("[{}] set-up statement {:?} failed: {}", test.name, statement, e);
        }
    }
    for assertion in test.assertions {
        check(&mut engine, test.name, assertion.query, assertion.expected);
    }
}

pub fn run_scripts(tests: &[ScriptTest]) {
    for test in tests {
        run_script(test);
    }
}

fn check(engine: &mut Engine, name: &str, query: &str, expected: Outcome) {
    let result = engine.execute(query);
    match (expected, result) {
        (Outcome::Error, Err(_)) => {}
        (Outcome::ErrorCode(code), Err(PgError { code: actual, .. })) if code == actual => {}
        (Outcome::Error | Outcome::ErrorCode(_), Err(e)) => {
            panic!("[{}] {}: expected {:?}, got error {}", name, query, expected, e)
        }
        (Outcome::Error | Outcome::ErrorCode(_), Ok(result)) => {
            panic!("[{}] {}: expected {:?}, got {:?}", name, query, expected, result.rows)
        }
        (_, Err(e)) => panic!("[{}] {}: expected {:?}, got error {}", name, query, expected, e),
        (_, Ok(result)) => {
            let actual = match result.scalar() {
                Some(datum) => datum,
                None => panic!("[{}] {}: expected one value, got {:?}", name, query, result.rows),
            };
            assert!(
                matches(expected, actual),
                "[{}] {}: expected {:?}, got {:?}",
                name,
                query,
                expected,
                actual
            );
        }
    }
}

fn matches(expected: Outcome, actual: &Datum) -> bool {
    match (expected, actual) {
        (Outcome::Null, Datum::Null) => true,
        (Outcome::Bool(e), Datum::Bool(a)) => e == *a,
        (Outcome::Int2(e), Datum::Int2(a)) => e == *a,
        (Outcome::Int4(e), Datum::Int4(a)) => e == *a,
        (Outcome::Int8(e), Datum::Int8(a)) => e == *a,
        (Outcome::Float8(e), Datum::Float8(a)) => (e - a).abs() <= TOLERANCE,
        (Outcome::Numeric(e), Datum::Numeric(a)) => {
            let e = parse_numeric(e).expect("expected numeric literal");
            (e - *a).abs() <= Decimal::new(1, 3)
        }
        (Outcome::Text(e), Datum::Text(a)) => e == a,
        _ => false,
    }
}
