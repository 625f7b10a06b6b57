//! Weight value object (finite, strictly positive).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParameterError;

/// Relative importance of one criterion. Weights need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Creates a Weight, returning error if not a finite positive number.
    pub fn try_new(value: f64) -> Result<Self, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NonNumericWeight {
                token: value.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(ParameterError::NonPositiveWeight { value });
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered weights, one per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<Weight>);

impl WeightVector {
    pub fn new(weights: Vec<Weight>) -> Self {
        Self(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw weight values in criterion order.
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(Weight::value).collect()
    }
}

impl From<Vec<Weight>> for WeightVector {
    fn from(weights: Vec<Weight>) -> Self {
        Self(weights)
    }
}
