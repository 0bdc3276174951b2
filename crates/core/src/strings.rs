//! String equality for nul-terminated and length-delimited text
//!
//! Native text often arrives as a view into a larger buffer: a pointer and a
//! byte count, with the nul terminator only at the very end of the buffer.
//! Comparing such views with a plain prefix comparison gets two cases wrong:
//!
//! - comparing "up to the shorter length" says `foo` equals `foobar`
//! - comparing "up to the longer length" reads past the end of `foo`
//!
//! `str_equal_sized` rejects different lengths before touching any byte, then
//! compares exactly that many bytes, stopping early at a shared nul.

use libc::c_char;
use std::ffi::CStr;

/// Equality of two nul-terminated strings
pub fn str_equal(x: &CStr, y: &CStr) -> bool {
    x == y
}

/// Equality of two nul-terminated strings given as raw pointers
///
/// # Safety
/// Both pointers must be non-null and point to nul-terminated strings that
/// stay valid for the duration of the call.
pub unsafe fn str_equal_raw(x: *const c_char, y: *const c_char) -> bool {
    unsafe { str_equal(CStr::from_ptr(x), CStr::from_ptr(y)) }
}

/// Equality of two byte views that are not necessarily nul-terminated
///
/// Views of different lengths are never equal. Otherwise bytes are compared
/// pairwise up to the common length; a nul reached in both views ends the
/// comparison, matching `strncmp` semantics.
pub fn str_equal_sized(x: &[u8], y: &[u8]) -> bool {
    if x.len() != y.len() {
        return false;
    }

    for (&a, &b) in x.iter().zip(y) {
        if a != b {
            return false;
        }
        if a == 0 {
            break;
        }
    }

    true
}

/// Equality of two raw (pointer, length) views
///
/// No byte is read when the lengths differ, and never more than `x_size`
/// bytes are read from either view.
///
/// # Safety
/// When the sizes are equal and non-zero, `x` and `y` must each be valid for
/// reads of `x_size` bytes.
pub unsafe fn str_equal_sized_raw(
    x: *const c_char,
    x_size: usize,
    y: *const c_char,
    y_size: usize,
) -> bool {
    if x_size != y_size {
        return false;
    }
    if x_size == 0 {
        return true;
    }

    let (x, y) = unsafe {
        (
            std::slice::from_raw_parts(x as *const u8, x_size),
            std::slice::from_raw_parts(y as *const u8, y_size),
        )
    };
    str_equal_sized(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_length_mismatch() {
        assert!(!str_equal_sized(b"foo", b"foobar"));
        assert!(!str_equal_sized(b"foobar", b"foo"));
    }

    #[test]
    fn test_sized_equal_and_empty() {
        assert!(str_equal_sized(b"foo", b"foo"));
        assert!(str_equal_sized(b"", b""));
    }

    #[test]
    fn test_sized_differing_byte() {
        assert!(!str_equal_sized(b"fob", b"foo"));
        assert!(!str_equal_sized(b"xoo", b"foo"));
    }

    #[test]
    fn test_sized_views_into_larger_buffer() {
        // Neither view is nul-terminated
        let buffer = b"foobarfoo";
        let head = &buffer[0..3];
        let tail = &buffer[6..9];
        let wide = &buffer[0..6];
        assert!(str_equal_sized(head, tail));
        assert!(!str_equal_sized(head, wide));
    }

    #[test]
    fn test_sized_stops_at_shared_nul() {
        assert!(str_equal_sized(b"ab\0x", b"ab\0y"));
        assert!(!str_equal_sized(b"ab\0x", b"abcx"));
    }

    #[test]
    fn test_sized_raw_does_not_read_on_length_mismatch() {
        let x = b"foo";
        // A dangling pointer is fine: differing lengths short-circuit
        let y = std::ptr::NonNull::<c_char>::dangling().as_ptr();
        assert!(!unsafe { str_equal_sized_raw(x.as_ptr() as *const c_char, 3, y, 6) });
    }

    #[test]
    fn test_sized_raw_zero_length_with_null() {
        assert!(unsafe { str_equal_sized_raw(std::ptr::null(), 0, std::ptr::null(), 0) });
    }

    #[test]
    fn test_sized_raw_compares_views() {
        let buffer = b"foobar\0";
        let foo = b"foo";
        let p = buffer.as_ptr() as *const c_char;
        let q = foo.as_ptr() as *const c_char;
        assert!(unsafe { str_equal_sized_raw(p, 3, q, 3) });
        assert!(!unsafe { str_equal_sized_raw(p, 6, q, 3) });
    }

    #[test]
    fn test_terminated_equality() {
        assert!(str_equal(c"foo", c"foo"));
        assert!(!str_equal(c"foo", c"foobar"));
        assert!(unsafe { str_equal_raw(c"abc".as_ptr(), c"abc".as_ptr()) });
        assert!(!unsafe { str_equal_raw(c"abc".as_ptr(), c"abd".as_ptr()) });
    }
}
