//! Argument shape validation
//!
//! Guards for host values passed as scalar arguments. Each helper checks the
//! kind first, then that there is exactly one element, then hands the element
//! to the matching checked conversion.

use crate::value::{HostString, NA_INTEGER, Value};
use hostbridge_core::{ConversionError, NativeId, Result, dbl_as_u32, narrow};

fn single<T: Clone>(elements: &[T], arg: &str) -> Result<T> {
    match elements {
        [only] => Ok(only.clone()),
        _ => Err(ConversionError::wrong_length(arg, elements.len())),
    }
}

/// Extract the single string of a length-1 character value
///
/// The missing string is returned as-is; callers that need text check
/// `is_na()` themselves.
pub fn arg_as_string(x: &Value, arg: &str) -> Result<HostString> {
    match x {
        Value::Character(v) => single(v, arg),
        other => Err(ConversionError::wrong_kind(
            arg,
            "a string",
            other.kind().name(),
        )),
    }
}

/// Extract a `u32` from a length-1 double or integer value
pub fn arg_as_u32(x: &Value, arg: &str) -> Result<u32> {
    match x {
        Value::Double(v) => dbl_as_u32(single(v, arg)?, arg),
        Value::Integer(v) => {
            let n = single(v, arg)?;
            if n == NA_INTEGER {
                return Err(ConversionError::missing(arg));
            }
            narrow::<u32, _>(n, arg)
        }
        other => Err(ConversionError::wrong_kind(
            arg,
            "a whole number",
            other.kind().name(),
        )),
    }
}

/// Extract a native identifier from a length-1 integer value
pub fn arg_as_id<I: NativeId>(x: &Value, arg: &str) -> Result<I> {
    match x {
        Value::Integer(v) => {
            let n = single(v, arg)?;
            if n == NA_INTEGER {
                return Err(ConversionError::missing(arg));
            }
            I::from_int(n, arg)
        }
        other => Err(ConversionError::wrong_kind(
            arg,
            "an integer",
            other.kind().name(),
        )),
    }
}
