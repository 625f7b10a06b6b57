//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (weights, impacts, errors)
//! - `analysis` - Pure domain services for validation and TOPSIS scoring

pub mod analysis;
pub mod foundation;
