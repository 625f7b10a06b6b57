//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the ranking domain.

mod errors;
mod impact;
mod weight;

pub use errors::{ComputationError, ErrorCode, InputError, ParameterError, TopsisError};
pub use impact::{Impact, ImpactVector};
pub use weight::{Weight, WeightVector};
