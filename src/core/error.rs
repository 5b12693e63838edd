// SPDX-License-Identifier: MIT OR Apache-2.0

//! pgscalar Core Error Types
//!
//! Every failure raised while compiling or evaluating a query is a [`PgError`]
//! carrying a PostgreSQL SQLSTATE, so callers can classify errors the same way
//! a PostgreSQL client would (domain errors, overflow, invalid arguments, ...).

use std::fmt;
use thiserror::Error;

/// Result type for pgscalar operations
pub type PgResult<T> = Result<T, PgError>;

/// SQLSTATE error codes raised by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlState {
    /// 0A000
    FeatureNotSupported,
    /// 22003
    NumericValueOutOfRange,
    /// 22011
    SubstringError,
    /// 22012
    DivisionByZero,
    /// 2201E
    InvalidArgumentForLogarithm,
    /// 2201F
    InvalidArgumentForPowerFunction,
    /// 2201G
    InvalidArgumentForWidthBucketFunction,
    /// 22023
    InvalidParameterValue,
    /// 22P02
    InvalidTextRepresentation,
    /// 42601
    SyntaxError,
    /// 42703
    UndefinedColumn,
    /// 42704
    UndefinedObject,
    /// 42725
    AmbiguousFunction,
    /// 42804
    DatatypeMismatch,
    /// 42846
    CannotCoerce,
    /// 42883
    UndefinedFunction,
    /// 54000
    ProgramLimitExceeded,
    /// 58030
    IoError,
    /// XX000
    InternalError,
}

impl SqlState {
    /// The five-character SQLSTATE code
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            SqlState::FeatureNotSupported => "0A000",
            SqlState::NumericValueOutOfRange => "22003",
            SqlState::SubstringError => "22011",
            SqlState::DivisionByZero => "22012",
            SqlState::InvalidArgumentForLogarithm => "2201E",
            SqlState::InvalidArgumentForPowerFunction => "2201F",
            SqlState::InvalidArgumentForWidthBucketFunction => "2201G",
            SqlState::InvalidParameterValue => "22023",
            SqlState::InvalidTextRepresentation => "22P02",
            SqlState::SyntaxError => "42601",
            SqlState::UndefinedColumn => "42703",
            SqlState::UndefinedObject => "42704",
            SqlState::AmbiguousFunction => "42725",
            SqlState::DatatypeMismatch => "42804",
            SqlState::CannotCoerce => "42846",
            SqlState::UndefinedFunction => "42883",
            SqlState::ProgramLimitExceeded => "54000",
            SqlState::IoError => "58030",
            SqlState::InternalError => "XX000",
        }
    }

    /// Whether the error was raised by evaluating data (class 22) rather than
    /// by compiling the statement
    #[inline]
    pub const fn is_data_exception(&self) -> bool {
        matches!(
            self,
            SqlState::NumericValueOutOfRange
                | SqlState::SubstringError
                | SqlState::DivisionByZero
                | SqlState::InvalidArgumentForLogarithm
                | SqlState::InvalidArgumentForPowerFunction
                | SqlState::InvalidArgumentForWidthBucketFunction
                | SqlState::InvalidParameterValue
                | SqlState::InvalidTextRepresentation
        )
    }
}

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error reported the way PostgreSQL reports it: SQLSTATE plus message
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct PgError {
    pub code: SqlState,
    pub message: String,
    pub detail: Option<String>,
    pub hint: Option<String>,
}

// Custom error creation helpers
impl PgError {
    /// Create an error with the given SQLSTATE
    pub fn new(code: SqlState, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
            hint: None,
        }
    }

    /// Attach a DETAIL line
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a HINT line
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// `smallint out of range`, `integer out of range`, ...
    pub fn out_of_range(type_name: &str) -> Self {
        Self::new(
            SqlState::NumericValueOutOfRange,
            format!("{} out of range", type_name),
        )
    }

    /// Domain error for trigonometric and hyperbolic functions
    pub fn input_out_of_range() -> Self {
        Self::new(SqlState::NumericValueOutOfRange, "input is out of range")
    }

    pub fn float_overflow() -> Self {
        Self::new(
            SqlState::NumericValueOutOfRange,
            "value out of range: overflow",
        )
    }

    pub fn float_underflow() -> Self {
        Self::new(
            SqlState::NumericValueOutOfRange,
            "value out of range: underflow",
        )
    }

    pub fn numeric_overflow() -> Self {
        Self::new(
            SqlState::NumericValueOutOfRange,
            "value overflows numeric format",
        )
    }

    pub fn division_by_zero() -> Self {
        Self::new(SqlState::DivisionByZero, "division by zero")
    }

    pub fn logarithm_of_zero() -> Self {
        Self::new(
            SqlState::InvalidArgumentForLogarithm,
            "cannot take logarithm of zero",
        )
    }

    pub fn logarithm_of_negative() -> Self {
        Self::new(
            SqlState::InvalidArgumentForLogarithm,
            "cannot take logarithm of a negative number",
        )
    }

    pub fn power_function(message: impl Into<String>) -> Self {
        Self::new(SqlState::InvalidArgumentForPowerFunction, message)
    }

    pub fn width_bucket(message: impl Into<String>) -> Self {
        Self::new(SqlState::InvalidArgumentForWidthBucketFunction, message)
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(SqlState::InvalidParameterValue, message)
    }

    /// `invalid input syntax for type integer: "abc"`
    pub fn invalid_text_representation(type_name: &str, input: &str) -> Self {
        Self::new(
            SqlState::InvalidTextRepresentation,
            format!("invalid input syntax for type {}: \"{}\"", type_name, input),
        )
    }

    /// `value "99999999999" is out of range for type integer`
    pub fn value_out_of_range_for_type(input: &str, type_name: &str) -> Self {
        Self::new(
            SqlState::NumericValueOutOfRange,
            format!("value \"{}\" is out of range for type {}", input, type_name),
        )
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        Self::new(SqlState::SyntaxError, message)
    }

    pub fn feature_not_supported(message: impl Into<String>) -> Self {
        Self::new(SqlState::FeatureNotSupported, message)
    }

    pub fn undefined_function(signature: &str) -> Self {
        Self::new(
            SqlState::UndefinedFunction,
            format!("function {} does not exist", signature),
        )
        .with_hint(
            "No function matches the given name and argument types. \
             You might need to add explicit type casts.",
        )
    }

    pub fn undefined_operator(signature: &str) -> Self {
        Self::new(
            SqlState::UndefinedFunction,
            format!("operator does not exist: {}", signature),
        )
        .with_hint(
            "No operator matches the given name and argument types. \
             You might need to add explicit type casts.",
        )
    }

    pub fn ambiguous_function(signature: &str) -> Self {
        Self::new(
            SqlState::AmbiguousFunction,
            format!("function {} is not unique", signature),
        )
        .with_hint(
            "Could not choose a best candidate function. \
             You might need to add explicit type casts.",
        )
    }

    pub fn cannot_coerce(from: &str, to: &str) -> Self {
        Self::new(
            SqlState::CannotCoerce,
            format!("cannot cast type {} to {}", from, to),
        )
    }

    pub fn datatype_mismatch(message: impl Into<String>) -> Self {
        Self::new(SqlState::DatatypeMismatch, message)
    }

    pub fn program_limit(message: impl Into<String>) -> Self {
        Self::new(SqlState::ProgramLimitExceeded, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(SqlState::InternalError, message)
    }
}
