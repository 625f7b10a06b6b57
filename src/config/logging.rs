//! Logging configuration

use serde::Deserialize;
use std::fmt;

/// Log verbosity, least to most verbose
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Returns the filter directive for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level implied by a `-v` count (0 = none)
    fn from_verbosity(verbosity: u8) -> Option<Self> {
        match verbosity {
            0 => None,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level written to stderr
    #[serde(default)]
    pub level: LogLevel,
}

impl LoggingConfig {
    /// Effective level once `-v` flags are applied.
    ///
    /// Flags only ever raise verbosity above the configured level.
    pub fn effective_level(&self, verbosity: u8) -> LogLevel {
        LogLevel::from_verbosity(verbosity)
            .map(|level| level.max(self.level))
            .unwrap_or(self.level)
    }
}
