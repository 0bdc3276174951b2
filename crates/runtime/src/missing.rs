//! Missing-value scans
//!
//! Each element kind compares against its own reserved sentinel. `0`, `FALSE`
//! and the empty string are ordinary values, never "missing".

use crate::value::{HostString, NA_INTEGER, NA_LOGICAL, Value};

/// An element kind with a reserved missing representation
pub trait Missing {
    fn is_missing(&self) -> bool;
}

impl Missing for HostString {
    fn is_missing(&self) -> bool {
        self.is_na()
    }
}

impl Missing for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

/// Whether any element is missing; stops at the first hit
pub fn any_missing<T: Missing>(x: &[T]) -> bool {
    x.iter().any(Missing::is_missing)
}

/// Whether any logical element is `NA_LOGICAL`
pub fn lgl_any_missing(x: &[i32]) -> bool {
    x.iter().any(|&v| v == NA_LOGICAL)
}

/// Whether any integer element is `NA_INTEGER`
pub fn int_any_missing(x: &[i32]) -> bool {
    x.iter().any(|&v| v == NA_INTEGER)
}

/// Whether any string element is the missing string
pub fn chr_any_missing(x: &[HostString]) -> bool {
    any_missing(x)
}

/// Whether any double element is NaN
pub fn dbl_any_missing(x: &[f64]) -> bool {
    any_missing(x)
}

impl Value {
    /// Whether any element is its kind's missing sentinel
    ///
    /// `Null` has no elements and never reports a missing value.
    pub fn any_missing(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Logical(v) => lgl_any_missing(v),
            Value::Integer(v) => int_any_missing(v),
            Value::Double(v) => dbl_any_missing(v),
            Value::Character(v) => chr_any_missing(v),
        }
    }
}
