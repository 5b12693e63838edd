// SPDX-License-Identifier: MIT OR Apache-2.0

use super::cast_executor::CastExecutor;
use super::expression_executor::{coerce_to_boolean, create_expression_executor, ExpressionExecutor};
use super::function::{select_candidate, BuiltinFunction, FunctionRegistry, Namespace, Resolution};
use crate::core::cast::{can_coerce_implicitly, cast_datum};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use crate::query_api::expression::Case;

/// Executor for CASE expressions (both searched and simple CASE)
///
/// Searched CASE: `CASE WHEN condition THEN result ... [ELSE default] END`
/// Simple CASE: `CASE operand WHEN value THEN result ... [ELSE default] END`
///
/// - the result type is the common type of all THEN/ELSE branches
/// - a simple CASE evaluates its operand once and compares it with the
///   resolved `=` operator, so NULL never matches
/// - evaluation stops at the first matching WHEN; without ELSE the result is NULL
#[derive(Debug)]
pub struct CaseExecutor {
    /// Operand of a simple CASE with its type
    operand: Option<(Box<dyn ExpressionExecutor>, Type)>,
    when_clauses: Vec<WhenClauseExecutor>,
    else_executor: Option<Box<dyn ExpressionExecutor>>,
    result_type: Type,
}

#[derive(Debug)]
struct WhenClauseExecutor {
    test: WhenTest,
    result_executor: Box<dyn ExpressionExecutor>,
}

#[derive(Debug)]
enum WhenTest {
    /// Searched CASE: a boolean condition
    Condition(Box<dyn ExpressionExecutor>),
    /// Simple CASE: `operand = value`
    Equals {
        value: Box<dyn ExpressionExecutor>,
        equality: BuiltinFunction,
    },
}

impl CaseExecutor {
    pub fn new(case: &Case, registry: &FunctionRegistry) -> PgResult<Self> {
        let operand = match &case.operand {
            Some(operand) => {
                let executor = create_expression_executor(operand, registry)?;
                let ty = executor.return_type();
                Some((executor, ty))
            }
            None => None,
        };

        let mut tests = Vec::with_capacity(case.when_clauses.len());
        let mut results = Vec::with_capacity(case.when_clauses.len());
        for clause in &case.when_clauses {
            let condition = create_expression_executor(&clause.condition, registry)?;
            let test = match &operand {
                Some((_, operand_type)) => equality_test(registry, *operand_type, condition)?,
                None => WhenTest::Condition(coerce_to_boolean(condition, "CASE/WHEN")?),
            };
            tests.push(test);
            results.push(create_expression_executor(&clause.result, registry)?);
        }
        let else_executor = match &case.else_result {
            Some(else_result) => Some(create_expression_executor(else_result, registry)?),
            None => None,
        };

        // ELSE is considered first, like PostgreSQL's transformCaseExpr
        let mut branch_types: Vec<Type> = Vec::with_capacity(results.len() + 1);
        branch_types.push(
            else_executor
                .as_ref()
                .map(|e| e.return_type())
                .unwrap_or(Type::Unknown),
        );
        branch_types.extend(results.iter().map(|r| r.return_type()));
        let result_type = select_common_type(&branch_types, "CASE")?;
        log::debug!("CASE branches {:?} resolved to {}", branch_types, result_type);

        let when_clauses = tests
            .into_iter()
            .zip(results)
            .map(|(test, result)| WhenClauseExecutor {
                test,
                result_executor: CastExecutor::coerce(result, result_type),
            })
            .collect();
        Ok(Self {
            operand,
            when_clauses,
            else_executor: else_executor.map(|e| CastExecutor::coerce(e, result_type)),
            result_type,
        })
    }
}

/// Resolve `operand = value` for one WHEN of a simple CASE
fn equality_test(
    registry: &FunctionRegistry,
    operand_type: Type,
    value: Box<dyn ExpressionExecutor>,
) -> PgResult<WhenTest> {
    let arg_types = [operand_type, value.return_type()];
    let resolution = match registry.lookup(Namespace::Operator, "=") {
        Some(overloads) => select_candidate(overloads, &arg_types),
        None => Resolution::NotFound,
    };
    match resolution {
        Resolution::Found(equality) => Ok(WhenTest::Equals {
            value: CastExecutor::coerce(value, equality.params[1]),
            equality,
        }),
        Resolution::NotFound | Resolution::Ambiguous => Err(PgError::undefined_operator(
            &format!("{} = {}", arg_types[0].name(), arg_types[1].name()),
        )),
    }
}

/// PostgreSQL's `select_common_type`: all-unknown branches become `text`;
/// otherwise every branch must share a category and the result moves to a
/// type the others implicitly convert to, stopping at the preferred type
pub(crate) fn select_common_type(types: &[Type], context: &str) -> PgResult<Type> {
    let mut known = types.iter().copied().filter(|t| *t != Type::Unknown);
    let Some(mut chosen) = known.next() else {
        return Ok(Type::Text);
    };
    for next in known {
        if next == chosen {
            continue;
        }
        if next.category() != chosen.category() {
            return Err(PgError::datatype_mismatch(format!(
                "{} types {} and {} cannot be matched",
                context,
                chosen.name(),
                next.name()
            )));
        }
        if !chosen.is_preferred()
            && can_coerce_implicitly(chosen, next)
            && !can_coerce_implicitly(next, chosen)
        {
            chosen = next;
        }
    }
    Ok(chosen)
}

impl WhenClauseExecutor {
    fn matches(&self, operand: Option<(&Datum, Type)>, ctx: &EvalContext) -> PgResult<bool> {
        match (&self.test, operand) {
            (WhenTest::Condition(condition), _) => {
                Ok(condition.execute(ctx)? == Datum::Bool(true))
            }
            (WhenTest::Equals { value, equality }, Some((operand_value, operand_type))) => {
                let value = value.execute(ctx)?;
                if operand_value.is_null() || value.is_null() {
                    return Ok(false);
                }
                let left = cast_datum(
                    operand_value.clone(),
                    operand_type,
                    equality.params[0],
                    None,
                    ctx,
                )?;
                Ok((equality.callable)(&[left, value], ctx)? == Datum::Bool(true))
            }
            (WhenTest::Equals { .. }, None) => Ok(false),
        }
    }
}

impl ExpressionExecutor for CaseExecutor {
    fn execute(&self, ctx: &EvalContext) -> PgResult<Datum> {
        let operand_value = match &self.operand {
            Some((executor, ty)) => Some((executor.execute(ctx)?, *ty)),
            None => None,
        };
        let operand = operand_value.as_ref().map(|(value, ty)| (value, *ty));

        for clause in &self.when_clauses {
            if clause.matches(operand, ctx)? {
                return clause.result_executor.execute(ctx);
            }
        }
        match &self.else_executor {
            Some(else_executor) => else_executor.execute(ctx),
            None => Ok(Datum::Null),
        }
    }

    fn return_type(&self) -> Type {
        self.result_type
    }
}
