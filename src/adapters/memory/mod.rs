//! In-memory adapters.

mod in_memory_table;

pub use in_memory_table::InMemoryTable;
