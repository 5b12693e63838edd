// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Query Engine
//!
//! Entry point tying the pieces together: SQL text is converted by
//! [`SqlConverter`], expressions are compiled against the shared
//! [`FunctionRegistry`] and evaluated with the session's [`EvalContext`].
//!
//! ```
//! use pgscalar::core::{Datum, Engine};
//!
//! let mut engine = Engine::new();
//! let result = engine.execute("SELECT gcd(12, 18) AS g").unwrap();
//! assert_eq!(result.columns[0].name, "g");
//! assert_eq!(result.rows, vec![vec![Datum::Int4(6)]]);
//! ```

use crate::core::config::{EngineConfig, EvalContext};
use crate::core::error::{PgError, PgResult};
use crate::core::executor::expression_executor::coerce_to_boolean;
use crate::core::executor::{create_expression_executor, ExpressionExecutor, FunctionRegistry};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;
use crate::query_api::statement::{SelectStatement, Statement};
use crate::sql_compiler::{split_statements, SqlConverter};
use std::sync::Arc;

/// Output column descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: Type,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Result of one statement
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Datum>>,
    /// `SELECT n`, `SET`, `RESET` or `SHOW`
    pub command_tag: String,
}

impl QueryResult {
    fn command(tag: &str) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            command_tag: tag.to_string(),
        }
    }

    /// The only value of a one-row, one-column result
    pub fn scalar(&self) -> Option<&Datum> {
        match (self.rows.as_slice(), self.columns.len()) {
            ([row], 1) => row.first(),
            _ => None,
        }
    }
}

/// Single-session evaluation engine
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    registry: Arc<FunctionRegistry>,
}

impl Engine {
    /// Engine with built-in defaults
    pub fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            registry: FunctionRegistry::global(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Execute one SQL statement
    pub fn execute(&mut self, sql: &str) -> PgResult<QueryResult> {
        if self.config.log_statements() {
            log::info!("[Engine] statement: {}", sql.trim());
        }
        let statement = SqlConverter::convert(sql)?;
        self.execute_statement(&statement)
    }

    /// Execute a `;`-separated script, stopping at the first error
    pub fn execute_script(&mut self, sql: &str) -> PgResult<Vec<QueryResult>> {
        split_statements(sql)
            .iter()
            .map(|statement| self.execute(statement))
            .collect()
    }

    /// Execute an already converted statement
    pub fn execute_statement(&mut self, statement: &Statement) -> PgResult<QueryResult> {
        match statement {
            Statement::Select(select) => self.execute_select(select),
            Statement::Set { name, value } => {
                match value {
                    Some(value) => self.config.set(name, value)?,
                    None => self.config.reset(name)?,
                }
                log::debug!("[Engine] {} = {}", name, self.config.show(name)?);
                Ok(QueryResult::command("SET"))
            }
            Statement::Reset(name) => {
                if name == "all" {
                    self.config.reset_all();
                } else {
                    self.config.reset(name)?;
                }
                Ok(QueryResult::command("RESET"))
            }
            Statement::Show(name) if name == "all" => Ok(self.show_all()),
            Statement::Show(name) => {
                let value = self.config.show(name)?;
                Ok(QueryResult {
                    columns: vec![Column::new(name.clone(), Type::Text)],
                    rows: vec![vec![Datum::Text(value)]],
                    command_tag: "SHOW".to_string(),
                })
            }
        }
    }

    fn show_all(&self) -> QueryResult {
        let rows = self
            .config
            .show_all()
            .into_iter()
            .map(|(name, value, source)| {
                vec![
                    Datum::Text(name.to_string()),
                    Datum::Text(value),
                    Datum::Text(source.description().to_string()),
                ]
            })
            .collect();
        QueryResult {
            columns: vec![
                Column::new("name", Type::Text),
                Column::new("setting", Type::Text),
                Column::new("source", Type::Text),
            ],
            rows,
            command_tag: "SHOW".to_string(),
        }
    }

    fn execute_select(&self, select: &SelectStatement) -> PgResult<QueryResult> {
        let ctx = self.config.eval_context();

        let executors = select
            .items
            .iter()
            .map(|item| create_expression_executor(&item.expression, &self.registry))
            .collect::<PgResult<Vec<_>>>()?;
        let filter = match &select.selection {
            Some(condition) => Some(coerce_to_boolean(
                create_expression_executor(condition, &self.registry)?,
                "WHERE",
            )?),
            None => None,
        };

        let columns = select
            .items
            .iter()
            .zip(&executors)
            .map(|(item, executor)| Column::new(item.column_name(), output_type(executor.as_ref())))
            .collect();

        let rows = if passes(filter.as_deref(), &ctx)? {
            let row = executors
                .iter()
                .map(|executor| executor.execute(&ctx))
                .collect::<PgResult<Vec<Datum>>>()?;
            vec![row]
        } else {
            Vec::new()
        };

        Ok(QueryResult {
            command_tag: format!("SELECT {}", rows.len()),
            columns,
            rows,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Literals nobody resolved are reported as `text`
fn output_type(executor: &dyn ExpressionExecutor) -> Type {
    match executor.return_type() {
        Type::Unknown => Type::Text,
        ty => ty,
    }
}

/// WHERE keeps the row only when the condition is true; NULL filters it out
fn passes(filter: Option<&dyn ExpressionExecutor>, ctx: &EvalContext) -> PgResult<bool> {
    match filter {
        Some(filter) => match filter.execute(ctx)? {
            Datum::Bool(b) => Ok(b),
            Datum::Null => Ok(false),
            other => Err(PgError::internal(format!(
                "WHERE condition produced non-boolean value {}",
                other
            ))),
        },
        None => Ok(true),
    }
}
