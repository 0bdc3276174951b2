//! Runtime Error Handling
//!
//! Provides thread-local error state so conversions called across the C ABI
//! can report failures without unwinding through foreign frames.
//!
//! # Usage
//!
//! FFI functions record an error and return a failure flag:
//! ```ignore
//! match index_as_u32(x, "x") {
//!     Ok(v) => { *out = v; true }
//!     Err(e) => { raise(e); false }
//! }
//! ```
//!
//! Callers check for errors:
//! ```ignore
//! if hostbridge_has_error() {
//!     let msg = hostbridge_take_error();
//!     // Handle error...
//! }
//! ```

use crate::config::{ErrorAction, config};
use hostbridge_core::ConversionError;
use libc::c_char;
use std::cell::RefCell;
use std::ffi::CString;
use std::ptr;

thread_local! {
    /// Thread-local storage for the last conversion error
    static LAST_ERROR: RefCell<Option<ConversionError>> = const { RefCell::new(None) };

    /// Cached C string for FFI access (avoids allocation on every get)
    static ERROR_CSTRING: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last runtime error
///
/// Note: This clears any cached CString to prevent stale pointer access.
pub fn set_runtime_error(err: ConversionError) {
    tracing::debug!(kind = ?err.kind(), arg = err.arg(), "conversion failed: {}", err);
    ERROR_CSTRING.with(|cs| *cs.borrow_mut() = None);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(err);
    });
}

/// Take (and clear) the last runtime error
pub fn take_runtime_error() -> Option<ConversionError> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}

/// Peek at the last runtime error without clearing it
pub fn peek_runtime_error() -> Option<ConversionError> {
    LAST_ERROR.with(|e| e.borrow().clone())
}

/// Check if there's a pending runtime error
pub fn has_runtime_error() -> bool {
    LAST_ERROR.with(|e| e.borrow().is_some())
}

/// Clear any pending runtime error
pub fn clear_runtime_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
    ERROR_CSTRING.with(|e| *e.borrow_mut() = None);
}

/// Route a failed conversion according to `HOSTBRIDGE_ON_ERROR`
///
/// With the default `record` action the error lands in the thread-local slot
/// (and in the JSON report, when configured). With `abort` the report is
/// still written first, then the process ends after logging the message.
pub fn raise(err: ConversionError) {
    let cfg = config();
    crate::report::emit_error_report(&err, cfg);
    if cfg.on_error == ErrorAction::Abort {
        tracing::error!("{}", err);
        eprintln!("hostbridge: {}", err);
        std::process::abort();
    }
    set_runtime_error(err);
}

/// Cache `msg` as a C string and return a pointer into the cache
pub(crate) fn cache_cstring(msg: String) -> *const c_char {
    // Replace null bytes with '?' to preserve error content
    let safe_msg: String = msg
        .chars()
        .map(|c| if c == '\0' { '?' } else { c })
        .collect();
    let cstring = CString::new(safe_msg).unwrap_or_default();
    ERROR_CSTRING.with(|cs| {
        let ptr = cstring.as_ptr();
        *cs.borrow_mut() = Some(cstring);
        ptr
    })
}

// FFI-safe error access functions

/// Check if there's a pending runtime error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_has_error() -> bool {
    has_runtime_error()
}

/// Kind code of the pending error, or `0` if none (FFI-safe)
///
/// Codes: `1` shape, `2` range, `3` missing value, `4` not a whole number.
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_error_kind() -> i32 {
    LAST_ERROR.with(|e| e.borrow().as_ref().map_or(0, |err| err.kind().code()))
}

/// Get the last error message as a C string pointer (FFI-safe)
///
/// Returns null if no error is pending.
///
/// # WARNING: Pointer Lifetime
/// The returned pointer is only valid until the next call to `set_runtime_error`,
/// `get_error`, `take_error`, or `clear_error`. Callers must copy the string
/// immediately if they need to retain it.
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_get_error() -> *const c_char {
    match peek_runtime_error() {
        Some(err) => cache_cstring(err.to_string()),
        None => ptr::null(),
    }
}

/// Take (and clear) the last error, returning it as a C string (FFI-safe)
///
/// Returns null if no error is pending.
///
/// # WARNING: Pointer Lifetime
/// Same as `hostbridge_get_error`.
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_take_error() -> *const c_char {
    match take_runtime_error() {
        Some(err) => cache_cstring(err.to_string()),
        None => ptr::null(),
    }
}

/// Clear any pending error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_clear_error() {
    clear_runtime_error();
}
