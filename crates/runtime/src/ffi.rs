//! C ABI conversion surface
//!
//! These functions are exported with C ABI for native code to call.
//!
//! Narrowing conversions take the argument's name (for the error message) and
//! an out-pointer. On success they write the converted value and return
//! `true`. On failure they leave `out` untouched, route the error through
//! `raise` (thread-local slot by default) and return `false`. Widening
//! conversions cannot fail and return the value directly.

use crate::error::raise;
use hostbridge_core::{
    CInt, ConversionError, FieldId, Index, NativeId, Result, StateId, SymbolId, dbl_as_u32,
    index_as_u32, str_equal_raw, str_equal_sized_raw, u32_as_dbl, u32_as_index, u32_as_int,
};
use libc::c_char;
use std::borrow::Cow;
use std::ffi::CStr;

/// Read the argument name passed from C
///
/// # Safety
/// `arg` must be null or point to a nul-terminated string.
unsafe fn arg_name<'a>(arg: *const c_char) -> Result<Cow<'a, str>> {
    if arg.is_null() {
        return Err(ConversionError::wrong_kind("arg", "a C string", "NULL"));
    }
    Ok(unsafe { CStr::from_ptr(arg) }.to_string_lossy())
}

/// Run a checked conversion and write its result through `out`
///
/// # Safety
/// `arg` as for `arg_name`; `out` must be null or valid for writes.
unsafe fn convert_into<T>(
    out: *mut T,
    arg: *const c_char,
    convert: impl FnOnce(&str) -> Result<T>,
) -> bool {
    let result = unsafe { arg_name(arg) }.and_then(|name| {
        if out.is_null() {
            return Err(ConversionError::wrong_kind(
                &name,
                "a writable out-pointer",
                "NULL",
            ));
        }
        convert(&*name)
    });

    match result {
        Ok(value) => {
            unsafe { out.write(value) };
            true
        }
        Err(err) => {
            raise(err);
            false
        }
    }
}

// =============================================================================
// Index / u32 / double
// =============================================================================

/// Host index to `u32`, failing outside `[0, UINT32_MAX]`
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_ssize_as_uint32(
    x: Index,
    arg: *const c_char,
    out: *mut u32,
) -> bool {
    tracing::trace!(x, "ssize_as_uint32");
    unsafe { convert_into(out, arg, |name| index_as_u32(x, name)) }
}

/// `u32` to host index (always succeeds)
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_uint32_as_ssize(x: u32) -> Index {
    u32_as_index(x)
}

/// Double to `u32`: missing, range and whole-number checks in that order
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_dbl_as_uint32(
    x: f64,
    arg: *const c_char,
    out: *mut u32,
) -> bool {
    tracing::trace!(x, "dbl_as_uint32");
    unsafe { convert_into(out, arg, |name| dbl_as_u32(x, name)) }
}

/// `u32` to double (exact)
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_uint32_as_dbl(x: u32) -> f64 {
    u32_as_dbl(x)
}

/// `u32` to C `int`, failing above `INT_MAX`
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_uint32_as_int(
    x: u32,
    arg: *const c_char,
    out: *mut CInt,
) -> bool {
    tracing::trace!(x, "uint32_as_int");
    unsafe { convert_into(out, arg, |name| u32_as_int(x, name)) }
}

// =============================================================================
// Native identifiers
// =============================================================================

/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
unsafe fn int_as_id<I: NativeId>(x: CInt, arg: *const c_char, out: *mut u16) -> bool {
    unsafe { convert_into(out, arg, |name| I::from_int(x, name).map(NativeId::raw)) }
}

/// C `int` to symbol id, failing outside `[0, UINT16_MAX]`
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_int_as_symbol(
    x: CInt,
    arg: *const c_char,
    out: *mut u16,
) -> bool {
    unsafe { int_as_id::<SymbolId>(x, arg, out) }
}

/// Symbol id to C `int`
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_symbol_as_int(x: u16) -> CInt {
    SymbolId::from_raw(x).to_int()
}

/// C `int` to field id, failing outside `[0, UINT16_MAX]`
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_int_as_field(
    x: CInt,
    arg: *const c_char,
    out: *mut u16,
) -> bool {
    unsafe { int_as_id::<FieldId>(x, arg, out) }
}

/// Field id to C `int`
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_field_as_int(x: u16) -> CInt {
    FieldId::from_raw(x).to_int()
}

/// C `int` to parse state id, failing outside `[0, UINT16_MAX]`
///
/// # Safety
/// `arg` must be null or a nul-terminated string; `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_int_as_state(
    x: CInt,
    arg: *const c_char,
    out: *mut u16,
) -> bool {
    unsafe { int_as_id::<StateId>(x, arg, out) }
}

/// Parse state id to C `int`
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_state_as_int(x: u16) -> CInt {
    StateId::from_raw(x).to_int()
}

// =============================================================================
// String equality
// =============================================================================

/// Equality of two nul-terminated strings
///
/// A null pointer is a contract violation: it is reported and the strings
/// compare unequal.
///
/// # Safety
/// Non-null pointers must point to nul-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_str_equal(x: *const c_char, y: *const c_char) -> bool {
    if x.is_null() || y.is_null() {
        raise(null_string_error(x));
        return false;
    }
    unsafe { str_equal_raw(x, y) }
}

// Names `x` when it is the null operand, otherwise `y`
fn null_string_error(x: *const c_char) -> ConversionError {
    let arg = if x.is_null() { "x" } else { "y" };
    ConversionError::wrong_kind(arg, "a C string", "NULL")
}

/// Equality of two (pointer, length) views that need not be nul-terminated
///
/// Different sizes compare unequal without reading either view.
///
/// # Safety
/// When the sizes are equal and non-zero, both pointers must be valid for
/// reads of that many bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hostbridge_str_equal_sized(
    x: *const c_char,
    x_size: usize,
    y: *const c_char,
    y_size: usize,
) -> bool {
    if x_size == y_size && x_size != 0 && (x.is_null() || y.is_null()) {
        raise(null_string_error(x));
        return false;
    }
    unsafe { str_equal_sized_raw(x, x_size, y, y_size) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{clear_runtime_error, has_runtime_error, take_runtime_error};
    use hostbridge_core::ErrorKind;

    #[test]
    fn test_ssize_as_uint32_success() {
        clear_runtime_error();
        let mut out = 0u32;
        assert!(unsafe { hostbridge_ssize_as_uint32(123, c"x".as_ptr(), &mut out) });
        assert_eq!(out, 123);
        assert!(!has_runtime_error());
    }

    #[test]
    fn test_ssize_as_uint32_failure_leaves_out_untouched() {
        let mut out = 7u32;
        assert!(!unsafe { hostbridge_ssize_as_uint32(-1, c"len".as_ptr(), &mut out) });
        assert_eq!(out, 7);
        let err = take_runtime_error().unwrap();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.arg(), "len");
    }

    #[test]
    fn test_dbl_as_uint32_reports_kind() {
        let mut out = 0u32;
        assert!(!unsafe { hostbridge_dbl_as_uint32(f64::NAN, c"row".as_ptr(), &mut out) });
        assert_eq!(take_runtime_error().unwrap().kind(), ErrorKind::MissingValue);

        assert!(!unsafe { hostbridge_dbl_as_uint32(2.5, c"row".as_ptr(), &mut out) });
        assert_eq!(
            take_runtime_error().unwrap().kind(),
            ErrorKind::NotWholeNumber
        );

        assert!(unsafe { hostbridge_dbl_as_uint32(9.0, c"row".as_ptr(), &mut out) });
        assert_eq!(out, 9);
    }

    #[test]
    fn test_null_out_pointer_is_reported() {
        assert!(!unsafe {
            hostbridge_ssize_as_uint32(1, c"x".as_ptr(), std::ptr::null_mut())
        });
        assert_eq!(take_runtime_error().unwrap().kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_null_arg_name_is_reported() {
        let mut out = 0u32;
        assert!(!unsafe { hostbridge_uint32_as_int(1, std::ptr::null(), std::ptr::null_mut()) });
        assert!(!unsafe { hostbridge_dbl_as_uint32(1.0, std::ptr::null(), &mut out) });
        assert_eq!(take_runtime_error().unwrap().arg(), "arg");
    }

    #[test]
    fn test_id_conversions() {
        let mut out = 0u16;
        assert!(unsafe { hostbridge_int_as_symbol(42, c"symbol".as_ptr(), &mut out) });
        assert_eq!(hostbridge_symbol_as_int(out), 42);

        assert!(!unsafe { hostbridge_int_as_field(65_536, c"field".as_ptr(), &mut out) });
        let err = take_runtime_error().unwrap();
        assert!(err.to_string().contains("`FieldId`"));

        assert!(!unsafe { hostbridge_int_as_state(-1, c"state".as_ptr(), &mut out) });
        let err = take_runtime_error().unwrap();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.to_string().contains("`StateId`"));
        assert_eq!(out, 42);

        assert_eq!(hostbridge_field_as_int(u16::MAX), 65_535);
        assert_eq!(hostbridge_state_as_int(0), 0);
    }

    #[test]
    fn test_uint32_as_int() {
        let mut out: CInt = 0;
        assert!(unsafe { hostbridge_uint32_as_int(5, c"n".as_ptr(), &mut out) });
        assert_eq!(out, 5);
        assert!(!unsafe { hostbridge_uint32_as_int(u32::MAX, c"n".as_ptr(), &mut out) });
        assert_eq!(out, 5);
        clear_runtime_error();
    }

    #[test]
    fn test_widening_round_trips() {
        assert_eq!(hostbridge_uint32_as_ssize(u32::MAX), u32::MAX as Index);
        assert_eq!(hostbridge_uint32_as_dbl(u32::MAX), 4_294_967_295.0);
    }

    #[test]
    fn test_str_equal_sized_views() {
        let foobar = c"foobar";
        let foo = c"foo";
        unsafe {
            assert!(!hostbridge_str_equal_sized(foo.as_ptr(), 3, foobar.as_ptr(), 6));
            assert!(hostbridge_str_equal_sized(foo.as_ptr(), 3, foobar.as_ptr(), 3));
            assert!(hostbridge_str_equal_sized(std::ptr::null(), 0, std::ptr::null(), 0));
        }
    }

    #[test]
    fn test_str_equal_null_is_reported() {
        clear_runtime_error();
        assert!(!unsafe { hostbridge_str_equal(std::ptr::null(), c"a".as_ptr()) });
        assert_eq!(take_runtime_error().unwrap().arg(), "x");
        assert!(unsafe { hostbridge_str_equal(c"a".as_ptr(), c"a".as_ptr()) });
        assert!(!has_runtime_error());
    }

    #[test]
    fn test_null_operand_is_named() {
        clear_runtime_error();
        assert!(!unsafe { hostbridge_str_equal(c"a".as_ptr(), std::ptr::null()) });
        let err = take_runtime_error().unwrap();
        assert_eq!(err.arg(), "y");
        assert_eq!(err.to_string(), "`y` must be a C string, not NULL.");

        assert!(!unsafe { hostbridge_str_equal_sized(c"a".as_ptr(), 1, std::ptr::null(), 1) });
        assert_eq!(take_runtime_error().unwrap().arg(), "y");
        assert!(!unsafe { hostbridge_str_equal_sized(std::ptr::null(), 1, c"a".as_ptr(), 1) });
        assert_eq!(take_runtime_error().unwrap().arg(), "x");
    }
}
