//! Hostbridge Runtime: the host side of checked boundary conversions
//!
//! Key design principles:
//! - Value: a minimal host value model (logical, integer, double, character)
//!   with one reserved missing sentinel per element kind
//! - Conversions: every narrowing check lives in `hostbridge-core`; this crate
//!   applies them to host arguments and exposes them over the C ABI
//! - Errors: failures never unwind across the C ABI; they land in a
//!   thread-local slot (or abort, per `HOSTBRIDGE_ON_ERROR`)

pub mod args;
pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod missing;
#[cfg(feature = "report-json")]
pub mod report;
#[cfg(not(feature = "report-json"))]
#[path = "report_stub.rs"]
pub mod report;
pub mod value;

// Re-export key types and functions
pub use value::{
    FALSE, HostString, NA_INTEGER, NA_LOGICAL, TRUE, Value, ValueKind, na_string,
};

pub use hostbridge_core::{
    CInt, ConversionError, ErrorKind, FieldId, Index, NativeId, Result, StateId, SymbolId,
};

// Argument validation
pub use args::{arg_as_id, arg_as_string, arg_as_u32};

// Missing-value scans
pub use missing::{
    Missing, any_missing, chr_any_missing, dbl_any_missing, int_any_missing, lgl_any_missing,
};

// Configuration and logging
pub use config::{BridgeConfig, ErrorAction, ReportDestination, config};
pub use logging::{hostbridge_init_logging as init_logging_ffi, init_logging};

// Error handling
pub use error::{
    clear_runtime_error, has_runtime_error, hostbridge_clear_error as clear_error,
    hostbridge_error_kind as error_kind, hostbridge_get_error as get_error,
    hostbridge_has_error as has_error, hostbridge_take_error as take_error, peek_runtime_error,
    raise, set_runtime_error, take_runtime_error,
};
pub use report::hostbridge_take_error_json as take_error_json;

// Conversions (exported for C linking)
pub use ffi::{
    hostbridge_dbl_as_uint32 as dbl_as_uint32, hostbridge_field_as_int as field_as_int,
    hostbridge_int_as_field as int_as_field, hostbridge_int_as_state as int_as_state,
    hostbridge_int_as_symbol as int_as_symbol, hostbridge_ssize_as_uint32 as ssize_as_uint32,
    hostbridge_state_as_int as state_as_int, hostbridge_str_equal as str_equal,
    hostbridge_str_equal_sized as str_equal_sized, hostbridge_symbol_as_int as symbol_as_int,
    hostbridge_uint32_as_dbl as uint32_as_dbl, hostbridge_uint32_as_int as uint32_as_int,
    hostbridge_uint32_as_ssize as uint32_as_ssize,
};
