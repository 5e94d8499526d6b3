//! Fatal Sipfile errors.
//!
//! Anything reported here aborts the section being loaded. Non-fatal
//! conditions go through [`crate::core::warnings`] instead.

use std::fmt;

use thiserror::Error;

/// Why a test range expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("trailing hyphen")]
    TrailingHyphen,
    #[error("test prefix of the end test is not empty and does not match the begin test prefix")]
    PrefixMismatch,
    #[error("group id is too big")]
    GroupIdTooLarge,
    #[error("test IDs have different length")]
    SuffixLengthMismatch,
    #[error("begin test ID is greater than end test ID")]
    BeginAfterEnd,
}

/// Shape a Sipfile variable is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Scalar,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => f.write_str("an array"),
            Shape::Scalar => f.write_str("a single value"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SipfileError {
    #[error("invalid Sipfile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Sipfile: variable `{var}` has to be specified as {expected}")]
    Schema { var: String, expected: Shape },

    #[error("Sipfile: variable `{var}` {detail}")]
    InvalidValue { var: String, detail: String },

    #[error("invalid test range `{range}` ({reason})")]
    InvalidRange { range: String, reason: RangeError },

    #[error("Sipfile (gen): missing generator for the test range `{range}`")]
    MissingGenerator { range: String },

    #[error("Sipfile (gen): specified generator `{token}` matches more than one file: `{first}` and `{second}`")]
    AmbiguousGenerator {
        token: String,
        first: String,
        second: String,
    },

    #[error("Sipfile (gen): test `{test}` is specified in more than one test range")]
    DuplicateGeneratedTest { test: String },

    #[error("Sipfile: missing default_time_limit")]
    MissingTimeLimit,

    #[error("Sipfile: invalid default time limit `{value}`")]
    InvalidTimeLimit { value: String },

    #[error("Sipfile: default time limit has to be greater than 0")]
    NonPositiveTimeLimit,

    #[error(
        "Sipfile: default time limit is too small - after rounding it is equal to 0 nanoseconds, but it has to be at least 1 nanosecond"
    )]
    TimeLimitTooSmall,
}

impl SipfileError {
    pub(crate) fn invalid_range(range: &str, reason: RangeError) -> Self {
        SipfileError::InvalidRange {
            range: range.to_string(),
            reason,
        }
    }
}
