//! Conversion errors
//!
//! Every failed check at the boundary produces a `ConversionError`. The error
//! carries the argument name and, for range failures, the exact bound that was
//! violated, so callers can both match on the kind and show a precise message.

use serde::Serialize;
use std::fmt;

/// Field-less mirror of `ConversionError` for matching and stable codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value has the wrong kind, or is not length 1
    Shape,
    /// Value is outside the target domain `[0, MAX]`
    Range,
    /// A required scalar is the missing sentinel
    MissingValue,
    /// A double meant to hold an integer has a fractional part
    NotWholeNumber,
}

impl ErrorKind {
    /// Stable numeric code used across the C ABI (`0` is reserved for "no error")
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::Shape => 1,
            ErrorKind::Range => 2,
            ErrorKind::MissingValue => 3,
            ErrorKind::NotWholeNumber => 4,
        }
    }
}

/// A failed boundary check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    /// The value is not of the expected kind
    WrongKind {
        arg: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// The value does not have exactly one element
    WrongLength { arg: String, actual: usize },
    /// The value lies outside `[0, max]` of the target type
    OutOfRange {
        arg: String,
        target: &'static str,
        bound: &'static str,
        max: u64,
    },
    /// The value is the host's missing sentinel
    Missing { arg: String },
    /// The double has a fractional part
    NotWholeNumber { arg: String },
}

impl ConversionError {
    pub fn wrong_kind(arg: &str, expected: &'static str, actual: &'static str) -> Self {
        ConversionError::WrongKind {
            arg: arg.to_owned(),
            expected,
            actual,
        }
    }

    pub fn wrong_length(arg: &str, actual: usize) -> Self {
        ConversionError::WrongLength {
            arg: arg.to_owned(),
            actual,
        }
    }

    pub fn out_of_range(arg: &str, target: &'static str, bound: &'static str, max: u64) -> Self {
        ConversionError::OutOfRange {
            arg: arg.to_owned(),
            target,
            bound,
            max,
        }
    }

    pub fn missing(arg: &str) -> Self {
        ConversionError::Missing {
            arg: arg.to_owned(),
        }
    }

    pub fn not_whole_number(arg: &str) -> Self {
        ConversionError::NotWholeNumber {
            arg: arg.to_owned(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::WrongKind { .. } | ConversionError::WrongLength { .. } => {
                ErrorKind::Shape
            }
            ConversionError::OutOfRange { .. } => ErrorKind::Range,
            ConversionError::Missing { .. } => ErrorKind::MissingValue,
            ConversionError::NotWholeNumber { .. } => ErrorKind::NotWholeNumber,
        }
    }

    /// Name of the offending argument
    pub fn arg(&self) -> &str {
        match self {
            ConversionError::WrongKind { arg, .. }
            | ConversionError::WrongLength { arg, .. }
            | ConversionError::OutOfRange { arg, .. }
            | ConversionError::Missing { arg }
            | ConversionError::NotWholeNumber { arg } => arg,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::WrongKind {
                arg,
                expected,
                actual,
            } => write!(f, "`{}` must be {}, not {}.", arg, expected, actual),
            ConversionError::WrongLength { arg, actual } => {
                write!(f, "`{}` must be length 1, not length {}.", arg, actual)
            }
            ConversionError::OutOfRange {
                arg,
                target,
                bound,
                max,
            } => write!(
                f,
                "Can't convert `{arg}` to `{target}`. `{arg}` must be within the range of `[0, {bound}]` ({max})."
            ),
            ConversionError::Missing { arg } => write!(f, "`{}` can't be missing.", arg),
            ConversionError::NotWholeNumber { arg } => {
                write!(f, "`{}` must be a whole number.", arg)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type for boundary conversions
pub type Result<T> = std::result::Result<T, ConversionError>;
