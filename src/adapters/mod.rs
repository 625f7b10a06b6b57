//! Adapters - Implementations of the ports.
//!
//! - `delimited` - CSV files on the local filesystem
//! - `memory` - In-memory tables for tests and embedding

pub mod delimited;
pub mod memory;

pub use delimited::{CsvTableSink, CsvTableSource, DEFAULT_DELIMITER};
pub use memory::InMemoryTable;
