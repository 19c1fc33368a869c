//! Structured logging via `tracing`.
//!
//! Logs go to stderr so reports on stdout stay machine-readable.
//! `RUST_LOG` overrides the configured filter.

use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Level for a CLI verbosity count (0 = warnings only).
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub default_level: LogLevel,
    pub module_filters: Vec<(String, LogLevel)>,
    pub show_targets: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Warn,
            module_filters: Vec::new(),
            show_targets: false,
        }
    }
}

impl TracingConfig {
    pub fn to_env_filter_string(&self) -> String {
        let mut parts = vec![self.default_level.as_str().to_string()];
        for (module, level) in &self.module_filters {
            parts.push(format!("{}={}", module, level.as_str()));
        }
        parts.join(",")
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_tracing(config: &TracingConfig) {
    let filter_str = config.to_env_filter_string();
    let show_targets = config.show_targets;
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(show_targets)
            .compact();

        // a subscriber may already be installed by an embedding application
        let _ = subscriber.try_init();
    });
}
