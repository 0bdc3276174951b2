//! JSON error reports
//!
//! When `HOSTBRIDGE_REPORT` is set, every recorded conversion failure is also
//! written as one JSON object per line:
//! - `json` → stderr
//! - `json:/path` → appended to the file
//!
//! ## Feature Flag
//!
//! This module requires the `report-json` feature (enabled by default).
//! When disabled, `report_stub.rs` provides the same symbols as no-ops.

use crate::config::{BridgeConfig, ReportDestination};
use crate::error::{cache_cstring, take_runtime_error};
use hostbridge_core::ConversionError;
use libc::c_char;
use std::io::Write;
use std::ptr;

/// Render an error as a JSON object with its kind, fields and message
pub fn error_to_json(err: &ConversionError) -> serde_json::Value {
    let mut value = serde_json::to_value(err).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut value {
        map.insert(
            "message".to_string(),
            serde_json::Value::String(err.to_string()),
        );
    }
    value
}

/// Write the report line for `err` to the configured destination, if any
pub fn emit_error_report(err: &ConversionError, cfg: &BridgeConfig) {
    let Some(dest) = &cfg.report else {
        return;
    };
    let line = error_to_json(err).to_string();

    match dest {
        ReportDestination::Stderr => {
            eprintln!("{}", line);
        }
        ReportDestination::File(path) => {
            let written = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut f| writeln!(f, "{}", line));
            if let Err(e) = written {
                tracing::warn!("failed to write error report to {}: {}", path, e);
            }
        }
    }
}

/// Take (and clear) the last error, returning it as a JSON C string (FFI-safe)
///
/// Returns null if no error is pending. The pointer has the same lifetime
/// rules as `hostbridge_take_error`.
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_take_error_json() -> *const c_char {
    match take_runtime_error() {
        Some(err) => cache_cstring(error_to_json(&err).to_string()),
        None => ptr::null(),
    }
}
