//! Stub module for error reports when the "report-json" feature is disabled.
//!
//! These are no-op functions that ensure linking works regardless of feature flags.

use crate::config::BridgeConfig;
use hostbridge_core::ConversionError;
use libc::c_char;

/// No-op report when JSON output is disabled
pub fn emit_error_report(_err: &ConversionError, _cfg: &BridgeConfig) {
    // No-op: report-json feature not enabled
}

/// Always null when JSON output is disabled
///
/// The pending error, if any, is left in place for `hostbridge_take_error`.
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_take_error_json() -> *const c_char {
    std::ptr::null()
}
