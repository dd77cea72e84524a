//! Validation errors shared by every value type.
//!
//! Two failure kinds cover the whole library:
//! - a *format* violation: the input could not be read as the type's
//!   underlying representation at all (not a number, malformed identifier)
//! - a *range* violation: the input parsed but lies outside the closed
//!   interval the type allows
//!
//! Vocabulary types never produce either; unrecognized tokens resolve to
//! their fallback member instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for value construction.
pub type ValueResult<T> = Result<T, ValueError>;

/// Error raised when input cannot become a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Input is structurally invalid for the type
    #[error("invalid {type_name} '{input}': {reason}")]
    InvalidFormat {
        type_name: &'static str,
        input: String,
        reason: String,
    },

    /// Input parsed but is outside the closed interval `[min, max]`
    #[error("{type_name} value {value} is outside valid range [{min}, {max}]")]
    OutOfRange {
        type_name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValueError {
    pub(crate) fn format(
        type_name: &'static str,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            type_name,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The failure kind, for callers that branch on "not a number" versus
    /// "out of range".
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::InvalidFormat { .. } => ErrorKind::Format,
            ValueError::OutOfRange { .. } => ErrorKind::Range,
        }
    }

    /// Name of the value type that rejected the input.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueError::InvalidFormat { type_name, .. } | ValueError::OutOfRange { type_name, .. } => {
                type_name
            }
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

/// Failure kind of a [`ValueError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input could not be parsed into the underlying representation
    Format,
    /// Input parsed but falls outside the permitted interval
    Range,
}

impl ErrorKind {
    /// Stable label used in logs and JSON output.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format_violation",
            ErrorKind::Range => "range_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}
