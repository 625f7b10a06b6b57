//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableSource` - Loads the table to rank
//! - `TableSink` - Persists the ranked table

mod table_sink;
mod table_source;

pub use table_sink::{StorageError, TableSink};
pub use table_source::TableSource;
