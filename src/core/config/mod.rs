// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod engine_config;
pub mod eval_context;
pub mod flat_config;

pub use engine_config::{ConfigError, EngineConfig};
pub use eval_context::EvalContext;
pub use flat_config::{FlatConfig, PropertySource};
