// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL to Statement Converter
//!
//! Converts PostgreSQL-dialect SQL text into query_api::Statement structures.
//! Session commands (`SET`, `SHOW`, `RESET`) are recognised up front; every
//! other statement goes through `sqlparser`.

use once_cell::sync::Lazy;
use regex::Regex;
use sqlparser::ast::{
    BinaryOperator, CastKind, CeilFloorKind, DateTimeField, Expr as SqlExpr, FunctionArg,
    FunctionArgExpr, FunctionArguments, GroupByExpr, Ident, ObjectName, Query as SqlQuery,
    Select as SqlSelect, SelectItem as SqlSelectItem, SetExpr, Statement as SqlStatement,
    TrimWhereField, UnaryOperator, Value as SqlValue, ValueWithSpan,
};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

use crate::query_api::definition::attribute::Type;
use crate::query_api::expression::{Case, Expression, Operator, WhenClause};
use crate::query_api::statement::{SelectItem, SelectStatement, Statement};

use super::error::ConverterError;

/// `SET [SESSION|LOCAL] name {=|TO} value`
static SET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^\s*SET\s+(?:SESSION\s+|LOCAL\s+)?([a-z_][a-z0-9_.]*)\s*(?:=|\bTO\b)\s*(.+?)\s*;?\s*$",
    )
    .expect("Invalid SET regex")
});

static SHOW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*SHOW\s+([a-z_][a-z0-9_.]*)\s*;?\s*$").expect("Invalid SHOW regex")
});

static RESET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*RESET\s+([a-z_][a-z0-9_.]*)\s*;?\s*$").expect("Invalid RESET regex")
});

/// SQL to Statement Converter
pub struct SqlConverter;

impl SqlConverter {
    /// Convert a single SQL statement
    pub fn convert(sql: &str) -> Result<Statement, ConverterError> {
        if let Some(statement) = Self::convert_session_command(sql) {
            return Ok(statement);
        }

        let statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)
            .map_err(|e| ConverterError::ParseError(e.to_string()))?;

        match statements.as_slice() {
            [] => Err(ConverterError::ConversionFailed(
                "No SQL statements found".to_string(),
            )),
            [statement] => Self::convert_statement(statement),
            _ => Err(ConverterError::ConversionFailed(
                "cannot execute multiple commands in a single statement".to_string(),
            )),
        }
    }

    /// Convert a `;`-separated script, one [`Statement`] per command
    pub fn convert_script(sql: &str) -> Result<Vec<Statement>, ConverterError> {
        split_statements(sql)
            .iter()
            .map(|statement| Self::convert(statement))
            .collect()
    }

    fn convert_session_command(sql: &str) -> Option<Statement> {
        if let Some(captures) = SET_REGEX.captures(sql) {
            let name = captures.get(1)?.as_str().to_lowercase();
            let raw = captures.get(2)?.as_str().trim();
            let value = if raw.eq_ignore_ascii_case("default") {
                None
            } else {
                Some(unquote(raw))
            };
            return Some(Statement::Set { name, value });
        }
        if let Some(captures) = SHOW_REGEX.captures(sql) {
            return Some(Statement::Show(captures.get(1)?.as_str().to_lowercase()));
        }
        if let Some(captures) = RESET_REGEX.captures(sql) {
            return Some(Statement::Reset(captures.get(1)?.as_str().to_lowercase()));
        }
        None
    }

    fn convert_statement(statement: &SqlStatement) -> Result<Statement, ConverterError> {
        match statement {
            SqlStatement::Query(query) => Ok(Statement::Select(Self::convert_query(query)?)),
            other => {
                let text = other.to_string();
                let keyword = text.split_whitespace().next().unwrap_or_default();
                Err(ConverterError::UnsupportedFeature(format!(
                    "{} statement",
                    keyword.to_uppercase()
                )))
            }
        }
    }

    fn convert_query(query: &SqlQuery) -> Result<SelectStatement, ConverterError> {
        if query.with.is_some() {
            return Err(ConverterError::UnsupportedFeature("WITH clause".to_string()));
        }
        if query.order_by.is_some() {
            return Err(ConverterError::UnsupportedFeature("ORDER BY".to_string()));
        }
        if query.limit_clause.is_some() || query.fetch.is_some() {
            return Err(ConverterError::UnsupportedFeature("LIMIT/OFFSET".to_string()));
        }

        match query.body.as_ref() {
            SetExpr::Select(select) => Self::convert_select(select),
            SetExpr::Query(inner) => Self::convert_query(inner),
            SetExpr::SetOperation { .. } => Err(ConverterError::UnsupportedFeature(
                "UNION/INTERSECT/EXCEPT".to_string(),
            )),
            SetExpr::Values(_) => Err(ConverterError::UnsupportedFeature("VALUES".to_string())),
            _ => Err(ConverterError::UnsupportedFeature(
                "Only SELECT queries are supported".to_string(),
            )),
        }
    }

    fn convert_select(select: &SqlSelect) -> Result<SelectStatement, ConverterError> {
        if !select.from.is_empty() {
            return Err(ConverterError::UnsupportedFeature("FROM clause".to_string()));
        }
        if select.into.is_some() {
            return Err(ConverterError::UnsupportedFeature("SELECT INTO".to_string()));
        }
        match &select.group_by {
            GroupByExpr::Expressions(exprs, modifiers)
                if exprs.is_empty() && modifiers.is_empty() => {}
            _ => return Err(ConverterError::UnsupportedFeature("GROUP BY".to_string())),
        }
        if select.having.is_some() {
            return Err(ConverterError::UnsupportedFeature("HAVING".to_string()));
        }

        let mut items = Vec::with_capacity(select.projection.len());
        for item in &select.projection {
            match item {
                SqlSelectItem::UnnamedExpr(expr) => {
                    items.push(SelectItem::new(Self::convert_expression(expr)?, None));
                }
                SqlSelectItem::ExprWithAlias { expr, alias } => {
                    items.push(SelectItem::new(
                        Self::convert_expression(expr)?,
                        Some(normalize_ident(alias)),
                    ));
                }
                _ => {
                    return Err(ConverterError::ConversionFailed(
                        "SELECT * with no tables specified is not valid".to_string(),
                    ))
                }
            }
        }

        let selection = match &select.selection {
            Some(condition) => Some(Self::convert_expression(condition)?),
            None => None,
        };

        Ok(SelectStatement { items, selection })
    }

    /// Convert SQL expression to query_api Expression
    pub fn convert_expression(expr: &SqlExpr) -> Result<Expression, ConverterError> {
        match expr {
            SqlExpr::Identifier(ident) => {
                Err(ConverterError::UndefinedColumn(normalize_ident(ident)))
            }

            SqlExpr::CompoundIdentifier(parts) => Err(ConverterError::UndefinedColumn(
                parts.iter().map(normalize_ident).collect::<Vec<_>>().join("."),
            )),

            SqlExpr::Value(value_with_span) => Self::convert_value(&value_with_span.value),

            SqlExpr::Nested(inner) => Self::convert_expression(inner),

            SqlExpr::Cast {
                kind,
                expr,
                data_type,
                format,
                ..
            } => {
                if matches!(kind, CastKind::TryCast | CastKind::SafeCast) || format.is_some() {
                    return Err(ConverterError::UnsupportedFeature(format!("{}", expr)));
                }
                let (target_type, modifier) = Type::from_sql_name(&data_type.to_string())?;
                Ok(Expression::cast(
                    Self::convert_expression(expr)?,
                    target_type,
                    modifier,
                ))
            }

            SqlExpr::UnaryOp { op, expr } => Self::convert_unary(op, expr),

            SqlExpr::BinaryOp { left, op, right } => {
                let left_expr = Self::convert_expression(left)?;
                let right_expr = Self::convert_expression(right)?;

                let operator = match op {
                    BinaryOperator::And => {
                        return Ok(Expression::And(Box::new(left_expr), Box::new(right_expr)))
                    }
                    BinaryOperator::Or => {
                        return Ok(Expression::Or(Box::new(left_expr), Box::new(right_expr)))
                    }

                    // Comparison operators
                    BinaryOperator::Eq => Operator::Equal,
                    BinaryOperator::NotEq => Operator::NotEqual,
                    BinaryOperator::Lt => Operator::Less,
                    BinaryOperator::LtEq => Operator::LessEqual,
                    BinaryOperator::Gt => Operator::Greater,
                    BinaryOperator::GtEq => Operator::GreaterEqual,

                    // Math operators
                    BinaryOperator::Plus => Operator::Plus,
                    BinaryOperator::Minus => Operator::Minus,
                    BinaryOperator::Multiply => Operator::Multiply,
                    BinaryOperator::Divide => Operator::Divide,
                    BinaryOperator::Modulo => Operator::Modulo,
                    BinaryOperator::PGExp => Operator::Exponent,
                    BinaryOperator::StringConcat => Operator::Concat,

                    _ => {
                        return Err(ConverterError::UnsupportedFeature(format!(
                            "operator {}",
                            op
                        )))
                    }
                };
                Ok(Expression::binary(operator, left_expr, right_expr))
            }

            SqlExpr::IsNull(inner) => Ok(Expression::IsNull {
                expression: Box::new(Self::convert_expression(inner)?),
                negated: false,
            }),

            SqlExpr::IsNotNull(inner) => Ok(Expression::IsNull {
                expression: Box::new(Self::convert_expression(inner)?),
                negated: true,
            }),

            SqlExpr::Case {
                operand,
                conditions,
                else_result,
                ..
            } => {
                let mut when_clauses = Vec::with_capacity(conditions.len());
                for when in conditions {
                    when_clauses.push(WhenClause::new(
                        Box::new(Self::convert_expression(&when.condition)?),
                        Box::new(Self::convert_expression(&when.result)?),
                    ));
                }
                let else_result = else_result
                    .as_deref()
                    .map(Self::convert_expression)
                    .transpose()?;
                let case = match operand {
                    Some(operand) => {
                        Case::simple(Self::convert_expression(operand)?, when_clauses, else_result)
                    }
                    None => Case::searched(when_clauses, else_result),
                };
                Ok(Expression::Case(case))
            }

            SqlExpr::Function(func) => Self::convert_function(func),

            // SUBSTRING(x FROM a FOR b) and SUBSTR(x, a, b)
            SqlExpr::Substring {
                expr,
                substring_from,
                substring_for,
                shorthand,
                ..
            } => {
                let name = if *shorthand { "substr" } else { "substring" };
                let mut args = vec![Self::convert_expression(expr)?];
                match (substring_from, substring_for) {
                    (Some(from), Some(length)) => {
                        args.push(Self::convert_expression(from)?);
                        args.push(Self::convert_expression(length)?);
                    }
                    (Some(from), None) => args.push(Self::convert_expression(from)?),
                    (None, Some(length)) => {
                        args.push(Expression::number("1"));
                        args.push(Self::convert_expression(length)?);
                    }
                    (None, None) => {}
                }
                Ok(Expression::function(name, args))
            }

            // TRIM([BOTH|LEADING|TRAILING] [chars] FROM x)
            SqlExpr::Trim {
                expr,
                trim_where,
                trim_what,
                trim_characters,
                ..
            } => {
                let name = match trim_where {
                    Some(TrimWhereField::Leading) => "ltrim",
                    Some(TrimWhereField::Trailing) => "rtrim",
                    Some(TrimWhereField::Both) | None => "btrim",
                };
                let mut args = vec![Self::convert_expression(expr)?];
                if let Some(what) = trim_what {
                    args.push(Self::convert_expression(what)?);
                }
                if let Some(characters) = trim_characters {
                    for characters in characters {
                        args.push(Self::convert_expression(characters)?);
                    }
                }
                Ok(Expression::function(name, args))
            }

            // POSITION(needle IN haystack) is position(haystack, needle)
            SqlExpr::Position { expr, r#in, .. } => Ok(Expression::function(
                "position",
                vec![
                    Self::convert_expression(r#in)?,
                    Self::convert_expression(expr)?,
                ],
            )),

            SqlExpr::Ceil { expr, field, .. } => Self::convert_ceil_floor("ceil", expr, field),
            SqlExpr::Floor { expr, field, .. } => Self::convert_ceil_floor("floor", expr, field),

            _ => Err(ConverterError::UnsupportedFeature(format!(
                "expression \"{}\"",
                expr
            ))),
        }
    }

    fn convert_value(value: &SqlValue) -> Result<Expression, ConverterError> {
        match value {
            SqlValue::Number(n, _) => Ok(Expression::number(n.clone())),
            SqlValue::SingleQuotedString(s)
            | SqlValue::EscapedStringLiteral(s)
            | SqlValue::NationalStringLiteral(s) => Ok(Expression::string(s.clone())),
            SqlValue::DollarQuotedString(s) => Ok(Expression::string(s.value.clone())),
            SqlValue::Boolean(b) => Ok(Expression::boolean(*b)),
            SqlValue::Null => Ok(Expression::null()),
            _ => Err(ConverterError::UnsupportedFeature(format!(
                "literal {}",
                value
            ))),
        }
    }

    fn convert_unary(op: &UnaryOperator, expr: &SqlExpr) -> Result<Expression, ConverterError> {
        // A minus directly in front of a numeric literal is part of the literal
        if let (
            UnaryOperator::Minus,
            SqlExpr::Value(ValueWithSpan {
                value: SqlValue::Number(n, _),
                ..
            }),
        ) = (op, expr)
        {
            return Ok(Expression::number(format!("-{}", n)));
        }

        let inner_expr = Self::convert_expression(expr)?;
        let operator = match op {
            UnaryOperator::Not => return Ok(Expression::Not(Box::new(inner_expr))),
            UnaryOperator::Minus => Operator::Minus,
            UnaryOperator::Plus => Operator::Plus,
            UnaryOperator::PGSquareRoot => Operator::SquareRoot,
            UnaryOperator::PGCubeRoot => Operator::CubeRoot,
            UnaryOperator::PGAbs => Operator::Abs,
            _ => {
                return Err(ConverterError::UnsupportedFeature(format!(
                    "unary operator {}",
                    op
                )))
            }
        };
        Ok(Expression::unary(operator, inner_expr))
    }

    fn convert_ceil_floor(
        name: &str,
        expr: &SqlExpr,
        field: &CeilFloorKind,
    ) -> Result<Expression, ConverterError> {
        match field {
            CeilFloorKind::DateTimeField(DateTimeField::NoDateTime) => Ok(Expression::function(
                name,
                vec![Self::convert_expression(expr)?],
            )),
            _ => Err(ConverterError::UnsupportedFeature(format!(
                "{}(... TO field)",
                name
            ))),
        }
    }

    /// Convert SQL function call; `pg_catalog.` qualification is accepted
    fn convert_function(func: &sqlparser::ast::Function) -> Result<Expression, ConverterError> {
        if func.over.is_some() {
            return Err(ConverterError::UnsupportedFeature("window functions".to_string()));
        }
        if func.filter.is_some() {
            return Err(ConverterError::UnsupportedFeature("FILTER clause".to_string()));
        }
        if !func.within_group.is_empty() {
            return Err(ConverterError::UnsupportedFeature("WITHIN GROUP".to_string()));
        }
        let func_name = function_name(&func.name)?;

        let arg_list = match &func.args {
            FunctionArguments::List(list) => list,
            FunctionArguments::None => return Ok(Expression::function(func_name, Vec::new())),
            FunctionArguments::Subquery(_) => {
                return Err(ConverterError::UnsupportedFeature(
                    "Subquery as function argument".to_string(),
                ));
            }
        };
        if arg_list.duplicate_treatment.is_some() {
            return Err(ConverterError::UnsupportedFeature(
                "DISTINCT/ALL in function arguments".to_string(),
            ));
        }
        if !arg_list.clauses.is_empty() {
            return Err(ConverterError::UnsupportedFeature(format!(
                "clauses in arguments of {}()",
                func_name
            )));
        }

        let mut args = Vec::with_capacity(arg_list.args.len());
        for arg in &arg_list.args {
            match arg {
                FunctionArg::Unnamed(FunctionArgExpr::Expr(expr)) => {
                    args.push(Self::convert_expression(expr)?);
                }
                FunctionArg::Unnamed(_) => {
                    return Err(ConverterError::UnsupportedFeature(format!(
                        "{}(*)",
                        func_name
                    )));
                }
                _ => {
                    return Err(ConverterError::UnsupportedFeature(
                        "named function arguments".to_string(),
                    ));
                }
            }
        }

        Ok(Expression::function(func_name, args))
    }
}

/// Unquoted identifiers fold to lower case; quoted ones keep their spelling
fn normalize_ident(ident: &Ident) -> String {
    match ident.quote_style {
        Some(_) => ident.value.clone(),
        None => ident.value.to_lowercase(),
    }
}

fn normalize_name_part(part: &str) -> String {
    match part.strip_prefix('"').and_then(|p| p.strip_suffix('"')) {
        Some(quoted) => quoted.replace("\"\"", "\""),
        None => part.to_lowercase(),
    }
}

fn function_name(name: &ObjectName) -> Result<String, ConverterError> {
    let full = name.to_string();
    let parts: Vec<&str> = full.split('.').collect();
    match parts.as_slice() {
        [base] => Ok(normalize_name_part(base)),
        [schema, base] if normalize_name_part(schema) == "pg_catalog" => {
            Ok(normalize_name_part(base))
        }
        [schema, _] => Err(ConverterError::UnsupportedFeature(format!(
            "schema \"{}\"",
            normalize_name_part(schema)
        ))),
        _ => Err(ConverterError::InvalidExpression(format!(
            "improper qualified name (too many dotted names): {}",
            full
        ))),
    }
}

/// Strip one level of single quotes from a `SET` value
fn unquote(raw: &str) -> String {
    match raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        Some(inner) => inner.replace("''", "'"),
        None => raw.to_string(),
    }
}

/// Split a script on `;`, ignoring semicolons inside quotes and comments.
/// Pieces holding nothing but whitespace or comments are dropped.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut has_content = false;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                has_content = true;
                current.push(c);
                // A doubled quote re-enters the literal on the next iteration
                for inner in chars.by_ref() {
                    current.push(inner);
                    if inner == c {
                        break;
                    }
                }
            }
            '-' if chars.peek() == Some(&'-') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        current.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for inner in chars.by_ref() {
                    if previous == '*' && inner == '/' {
                        break;
                    }
                    previous = inner;
                }
                current.push(' ');
            }
            ';' => {
                if has_content {
                    statements.push(current.trim().to_string());
                }
                current.clear();
                has_content = false;
            }
            _ => {
                if !c.is_whitespace() {
                    has_content = true;
                }
                current.push(c);
            }
        }
    }
    if has_content {
        statements.push(current.trim().to_string());
    }
    statements
}
