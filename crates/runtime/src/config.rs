//! Runtime configuration
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOSTBRIDGE_ON_ERROR` | `record` | `record` (thread-local error slot) or `abort` (log and abort) |
//! | `HOSTBRIDGE_LOG` | unset | `EnvFilter` directives used by `init_logging` |
//! | `HOSTBRIDGE_REPORT` | unset | `json` (stderr) or `json:/path` (append to file) |
//!
//! ## Example
//!
//! ```bash
//! # Log every recorded conversion failure
//! HOSTBRIDGE_LOG=hostbridge_runtime=debug ./host
//!
//! # Fail hard on the first bad conversion, with a JSON record in a file
//! HOSTBRIDGE_ON_ERROR=abort HOSTBRIDGE_REPORT=json:/tmp/bridge.jsonl ./host
//! ```
//!
//! The process-wide configuration is read once, on first use.

use std::sync::OnceLock;

static CONFIG: OnceLock<BridgeConfig> = OnceLock::new();

/// What to do when a conversion called through the C ABI fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Store the error in the thread-local slot and return a failure flag (default)
    Record,
    /// Log the error and abort the process
    Abort,
}

/// Where JSON error reports go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub on_error: ErrorAction,
    /// Filter directives for the tracing subscriber
    pub log_filter: Option<String>,
    /// JSON error report destination; `None` disables reporting
    pub report: Option<ReportDestination>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorAction::Record,
            log_filter: None,
            report: None,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// Unknown values fall back to the defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let on_error = get("HOSTBRIDGE_ON_ERROR")
            .map(|s| match s.to_lowercase().as_str() {
                "abort" => ErrorAction::Abort,
                _ => ErrorAction::Record,
            })
            .unwrap_or(ErrorAction::Record);

        let log_filter = get("HOSTBRIDGE_LOG").filter(|s| !s.is_empty());

        let report = get("HOSTBRIDGE_REPORT").and_then(|s| match s.as_str() {
            "json" => Some(ReportDestination::Stderr),
            s if s.starts_with("json:") && s.len() > 5 => {
                Some(ReportDestination::File(s[5..].to_string()))
            }
            _ => None,
        });

        Self {
            on_error,
            log_filter,
            report,
        }
    }
}

/// Process-wide configuration, read from the environment on first use
pub fn config() -> &'static BridgeConfig {
    CONFIG.get_or_init(BridgeConfig::from_env)
}
