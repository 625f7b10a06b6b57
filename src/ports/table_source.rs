//! Table Source Port - Where the input table comes from.
//!
//! The application depends on this trait, while adapters (like
//! CsvTableSource) provide the implementation.

use crate::domain::analysis::RawTable;
use crate::domain::foundation::InputError;

/// Port for loading the table to be ranked.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first record as the header row
/// - Return every data row in source order
/// - Return `InputError::FileNotFound` when the source does not exist and
///   `InputError::Unreadable` when it cannot be parsed as a table
pub trait TableSource: Send + Sync {
    /// Reads the whole table into memory.
    fn read(&self) -> Result<RawTable, InputError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
