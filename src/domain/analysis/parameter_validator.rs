//! Parameter Validator - Parses weights and impacts against the criteria count.

use crate::domain::foundation::{
    Impact, ImpactVector, ParameterError, Weight, WeightVector,
};

/// Separator between tokens in the weights and impacts arguments.
pub const PARAMETER_DELIMITER: char = ',';

/// Parsing and validation of the weight/impact parameters.
pub struct ParameterValidator;

impl ParameterValidator {
    /// Parses both parameter strings and checks them against `expected_count`.
    ///
    /// # Check order
    /// 1. Every weight token is a finite number
    /// 2. Every weight is strictly positive
    /// 3. Every impact token is `+` or `-`
    /// 4. Both lists have exactly `expected_count` entries
    ///
    /// The first failing check is returned.
    pub fn validate_parameters(
        weights_text: &str,
        impacts_text: &str,
        expected_count: usize,
    ) -> Result<(WeightVector, ImpactVector), ParameterError> {
        let weights = Self::parse_weights(weights_text)?;
        let impacts = Self::parse_impacts(impacts_text)?;

        if weights.len() != expected_count || impacts.len() != expected_count {
            return Err(ParameterError::CountMismatch {
                expected: expected_count,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        Ok((weights, impacts))
    }

    /// Parses a delimited list of weights.
    ///
    /// All tokens must be numeric before positivity is considered, so
    /// `"-1,abc"` reports the non-numeric token.
    pub fn parse_weights(text: &str) -> Result<WeightVector, ParameterError> {
        let raw = Self::tokens(text)
            .map(|token| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ParameterError::NonNumericWeight {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        raw.into_iter()
            .map(Weight::try_new)
            .collect::<Result<Vec<_>, _>>()
            .map(WeightVector::new)
    }

    /// Parses a delimited list of impact symbols.
    pub fn parse_impacts(text: &str) -> Result<ImpactVector, ParameterError> {
        Self::tokens(text)
            .map(Impact::from_symbol)
            .collect::<Result<Vec<_>, _>>()
            .map(ImpactVector::new)
    }

    /// Splits on the delimiter, trims, and drops empty tokens.
    fn tokens(text: &str) -> impl Iterator<Item = &str> {
        text.split(PARAMETER_DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
