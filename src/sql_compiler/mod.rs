// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL Compiler
//!
//! Parses PostgreSQL-dialect SQL with `sqlparser` and converts it into the
//! dialect-independent [`query_api`](crate::query_api) representation.

pub mod converter;
pub mod error;

pub use converter::{split_statements, SqlConverter};
pub use error::ConverterError;
