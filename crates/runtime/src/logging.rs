//! Logging setup
//!
//! The runtime logs through `tracing`. A host that wants to see those events
//! calls `init_logging` (or `hostbridge_init_logging` from C) once; the filter
//! comes from `HOSTBRIDGE_LOG` and defaults to warnings only.

use crate::config::config;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "hostbridge_runtime=warn";

/// Build the filter from `directives`, falling back to the default on parse errors
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr `fmt` subscriber
///
/// Safe to call multiple times (idempotent via Once). If another global
/// subscriber is already installed, that one is kept.
pub fn init_logging() {
    LOGGING_INIT.call_once(|| {
        let filter = build_filter(config().log_filter.as_deref());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Install the logging subscriber (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn hostbridge_init_logging() {
    init_logging();
}
