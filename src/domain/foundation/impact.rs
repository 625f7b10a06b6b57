//! Impact direction of a criterion (`+` benefit, `-` cost).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParameterError;

/// Whether higher or lower values of a criterion are preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

impl Impact {
    /// Parses a single impact token. Surrounding whitespace is ignored.
    pub fn from_symbol(token: &str) -> Result<Self, ParameterError> {
        match token.trim() {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(ParameterError::InvalidImpact {
                token: other.to_string(),
            }),
        }
    }

    /// Returns the command-line symbol for this direction.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered impact directions, one per criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }
}
