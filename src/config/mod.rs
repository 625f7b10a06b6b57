//! Application configuration module
//!
//! Configuration is layered with the `config` crate: built-in defaults, then
//! an optional configuration file (TOML, JSON or YAML, picked by extension),
//! then command-line overrides. Environment variables are not consulted.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use topsis_rank::config::{AppConfig, ConfigOverrides};
//!
//! let config = AppConfig::load(Some(Path::new("topsis.toml")), &ConfigOverrides::default())
//!     .expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogLevel, LoggingConfig};
pub use output::{OutputConfig, MAX_SCORE_PRECISION};

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Table delimiter and score formatting
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line, applied over file settings
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub delimiter: Option<char>,
    pub score_precision: Option<usize>,
}

impl AppConfig {
    /// Load configuration
    ///
    /// This function:
    /// 1. Starts from built-in defaults
    /// 2. Merges `file` if given (the file must exist)
    /// 3. Applies `overrides`
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if values
    /// cannot be parsed into expected types.
    pub fn load(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("output.delimiter", ",")?
            .set_default("logging.level", LogLevel::default().as_str())?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .set_override_option("output.delimiter", overrides.delimiter.map(|c| c.to_string()))?
            .set_override_option(
                "output.score_precision",
                overrides.score_precision.map(|p| p as i64),
            )?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        Ok(())
    }
}
