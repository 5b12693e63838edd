// SPDX-License-Identifier: MIT OR Apache-2.0

//! # pgscalar
//!
//! PostgreSQL-compatible evaluation of scalar SQL expressions.
//!
//! - [`sql_compiler`] turns SQL text into a [`query_api::Statement`]
//! - [`core::executor`] resolves functions and operators with PostgreSQL's
//!   overload and implicit-cast rules and builds an executor tree
//! - [`core::Engine`] runs statements and reports failures as
//!   [`core::PgError`] values carrying a SQLSTATE

pub mod core;
pub mod query_api;
pub mod sql_compiler;

pub use crate::core::{Datum, Engine, EngineConfig, PgError, PgResult, QueryResult, SqlState};
