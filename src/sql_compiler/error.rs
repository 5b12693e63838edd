// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::core::error::{PgError, SqlState};
use thiserror::Error;

/// Errors raised while turning SQL text into a [`Statement`](crate::query_api::Statement)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConverterError {
    #[error("syntax error: {0}")]
    ParseError(String),

    #[error("{0}")]
    ConversionFailed(String),

    #[error("{0} is not supported")]
    UnsupportedFeature(String),

    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    #[error("column \"{0}\" does not exist")]
    UndefinedColumn(String),

    /// Type names and modifiers are validated while converting casts
    #[error(transparent)]
    Type(#[from] PgError),
}

impl From<ConverterError> for PgError {
    fn from(err: ConverterError) -> Self {
        let code = match &err {
            ConverterError::ParseError(_)
            | ConverterError::ConversionFailed(_)
            | ConverterError::InvalidExpression(_) => SqlState::SyntaxError,
            ConverterError::UnsupportedFeature(_) => SqlState::FeatureNotSupported,
            ConverterError::UndefinedColumn(_) => SqlState::UndefinedColumn,
            ConverterError::Type(inner) => return inner.clone(),
        };
        PgError::new(code, err.to_string())
    }
}
