// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cast;
pub mod config;
pub mod engine;
pub mod error;
pub mod executor;
pub mod numeric;
pub mod value;

pub use self::config::{EngineConfig, EvalContext};
pub use self::engine::{Column, Engine, QueryResult};
pub use self::error::{PgError, PgResult, SqlState};
pub use self::value::Datum;
