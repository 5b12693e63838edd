// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query API
//!
//! Dialect-independent representation of a compiled statement: the
//! [`Expression`](expression::Expression) tree produced by the SQL compiler
//! and consumed by the executor builder.

pub mod definition;
pub mod expression;
pub mod statement;

pub use definition::attribute::{Type, TypeCategory, TypeModifier};
pub use expression::Expression;
pub use statement::{SelectItem, SelectStatement, Statement};
