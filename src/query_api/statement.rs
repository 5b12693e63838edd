// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::query_api::expression::Expression;

/// Top-level statement accepted by the engine
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    /// `SET name = value`; `None` value means `SET name TO DEFAULT`
    Set { name: String, value: Option<String> },
    Show(String),
    Reset(String),
}

/// FROM-less `SELECT` producing at most one row
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStatement {
    pub items: Vec<SelectItem>,
    pub selection: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectItem {
    pub expression: Expression,
    pub alias: Option<String>,
}

impl SelectItem {
    pub fn new(expression: Expression, alias: Option<String>) -> Self {
        Self { expression, alias }
    }

    /// Output column name: the alias if given, else the derived name
    pub fn column_name(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.expression.column_name(),
        }
    }
}
