//! Output table configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::ScoreFormat;

/// Largest fixed precision accepted for scores.
pub const MAX_SCORE_PRECISION: usize = 17;

/// Settings for reading and writing tables
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Field delimiter for both input and output files
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Fixed number of decimals for scores; full precision when unset
    #[serde(default)]
    pub score_precision: Option<usize>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.delimiter_byte()?;
        if let Some(precision) = self.score_precision {
            if precision > MAX_SCORE_PRECISION {
                return Err(ValidationError::PrecisionTooLarge {
                    max: MAX_SCORE_PRECISION,
                    actual: precision,
                });
            }
        }
        Ok(())
    }

    /// Returns the delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8, ValidationError> {
        match self.delimiter.as_bytes() {
            &[byte] if byte.is_ascii() && !matches!(byte, b'"' | b'\n' | b'\r') => Ok(byte),
            _ => Err(ValidationError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    /// Returns how scores should be rendered
    pub fn score_format(&self) -> ScoreFormat {
        ScoreFormat::from_precision(self.score_precision)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            score_precision: None,
        }
    }
}
