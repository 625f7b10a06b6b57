//! Error types for the domain layer.
//!
//! Every failure is fatal to a ranking run. The three categories mirror the
//! stage that detected the problem: reading the table, checking the
//! weight/impact parameters, or running the computation itself.

use std::fmt;
use thiserror::Error;

/// Failures detected while reading or validating the input table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("File not found")]
    FileNotFound { path: String },

    #[error("Unable to read file: {reason}")]
    Unreadable { reason: String },

    #[error("Input file must have at least 3 columns")]
    TooFewColumns { found: usize },

    #[error("Columns 2 onwards must contain only numeric values")]
    NonNumericCriteria,
}

impl InputError {
    /// Creates a file-not-found error for the given path.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        InputError::FileNotFound { path: path.into() }
    }

    /// Creates an unreadable-source error.
    pub fn unreadable(reason: impl Into<String>) -> Self {
        InputError::Unreadable {
            reason: reason.into(),
        }
    }
}

/// Failures detected while parsing weights and impacts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Weights must be numeric and separated by commas")]
    NonNumericWeight { token: String },

    #[error("Weights must be positive numbers")]
    NonPositiveWeight { value: f64 },

    #[error("Impacts must be '+' or '-' and separated by commas")]
    InvalidImpact { token: String },

    #[error("Weights and impacts count must equal criteria count ({expected})")]
    CountMismatch {
        expected: usize,
        weights: usize,
        impacts: usize,
    },
}

/// Failures raised by the TOPSIS computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    #[error("Column with all zeros detected")]
    DegenerateColumn { column: usize },
}

/// Error category, used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InputError,
    ParameterError,
    ComputationError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InputError => "INPUT_ERROR",
            ErrorCode::ParameterError => "PARAMETER_ERROR",
            ErrorCode::ComputationError => "COMPUTATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Any failure of a ranking run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl TopsisError {
    /// Returns the category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::Input(_) => ErrorCode::InputError,
            TopsisError::Parameter(_) => ErrorCode::ParameterError,
            TopsisError::Computation(_) => ErrorCode::ComputationError,
        }
    }
}
