// SPDX-License-Identifier: MIT OR Apache-2.0

/// Literal as written in the query. Numeric literals keep their text so the
/// executor builder can pick `integer`, `bigint` or `numeric` from the value.
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Number(String),
    /// Quoted literal of type `unknown`
    String(String),
    Bool(bool),
    Null,
}
