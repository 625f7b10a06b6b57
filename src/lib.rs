//! Topsis Rank - Multi-criteria ranking of alternatives
//!
//! This crate scores and ranks the rows of a table against weighted,
//! directional criteria using TOPSIS (Technique for Order Preference by
//! Similarity to Ideal Solution).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
