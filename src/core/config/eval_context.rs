// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::value::DEFAULT_EXTRA_FLOAT_DIGITS;

/// Largest text value PostgreSQL can store (1 GB - 1)
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_073_741_823;

/// Session settings visible to executors while evaluating an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    pub extra_float_digits: i32,
    pub max_text_length: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            extra_float_digits: DEFAULT_EXTRA_FLOAT_DIGITS,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}
