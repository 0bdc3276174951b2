//! Host value model
//!
//! A minimal stand-in for the host's vectors: each kind is a homogeneous
//! sequence, and each element kind reserves one representation for "missing":
//!
//! | Kind      | Element      | Missing sentinel                 |
//! |-----------|--------------|----------------------------------|
//! | logical   | `i32`        | `NA_LOGICAL` (`i32::MIN`)        |
//! | integer   | `i32`        | `NA_INTEGER` (`i32::MIN`)        |
//! | double    | `f64`        | NaN                              |
//! | character | `HostString` | the shared instance `na_string()`|
//!
//! The missing string is identified by pointer identity, not by its text.

use std::fmt;
use std::sync::{Arc, LazyLock};

/// Host logical TRUE
pub const TRUE: i32 = 1;
/// Host logical FALSE
pub const FALSE: i32 = 0;
/// Host logical missing value
pub const NA_LOGICAL: i32 = i32::MIN;
/// Host integer missing value
pub const NA_INTEGER: i32 = i32::MIN;

static NA_STRING: LazyLock<HostString> = LazyLock::new(|| HostString(Arc::from("NA")));

/// Immutable, reference-counted host text element
///
/// Clones share the same allocation, so identity survives cloning.
#[derive(Clone)]
pub struct HostString(Arc<str>);

impl HostString {
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        HostString(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether this is the reserved missing string
    pub fn is_na(&self) -> bool {
        Arc::ptr_eq(&self.0, &NA_STRING.0)
    }
}

/// The reserved missing string
pub fn na_string() -> HostString {
    (*NA_STRING).clone()
}

// The missing string equals only itself, never the text "NA"
impl PartialEq for HostString {
    fn eq(&self, other: &Self) -> bool {
        self.is_na() == other.is_na() && self.as_str() == other.as_str()
    }
}

impl Eq for HostString {}

impl fmt::Debug for HostString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            write!(f, "NA")
        } else {
            write!(f, "{:?}", self.as_str())
        }
    }
}

impl From<&str> for HostString {
    fn from(s: &str) -> Self {
        HostString::new(s)
    }
}

impl From<String> for HostString {
    fn from(s: String) -> Self {
        HostString::new(s)
    }
}

/// Kind of a host value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Logical,
    Integer,
    Double,
    Character,
}

impl ValueKind {
    /// Name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "NULL",
            ValueKind::Logical => "logical",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::Character => "character",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A host value: one homogeneous sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Logical(Vec<i32>),
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Character(Vec<HostString>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Logical(_) => ValueKind::Logical,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Character(_) => ValueKind::Character,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Logical(v) | Value::Integer(v) => v.len(),
            Value::Double(v) => v.len(),
            Value::Character(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single-element character value
    pub fn string(s: impl Into<HostString>) -> Self {
        Value::Character(vec![s.into()])
    }

    /// Logical value from plain booleans
    pub fn logical(values: &[bool]) -> Self {
        Value::Logical(
            values
                .iter()
                .map(|&b| if b { TRUE } else { FALSE })
                .collect(),
        )
    }
}
