//! Delimited-file adapters - CSV implementations of the table ports.
//!
//! - `CsvTableSource` - Reads a header row plus data rows
//! - `CsvTableSink` - Writes the ranked table atomically

mod table_sink;
mod table_source;

pub use table_sink::CsvTableSink;
pub use table_source::CsvTableSource;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';
