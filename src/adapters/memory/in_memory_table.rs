//! In-Memory Table Adapter
//!
//! Serves a fixed input table and captures the ranked output in memory.
//! Useful for testing and for embedding the ranker without touching disk.

use std::sync::{Arc, RwLock};

use crate::domain::analysis::{RankedTable, RawTable};
use crate::domain::foundation::InputError;
use crate::ports::{StorageError, TableSink, TableSource};

/// In-memory source and sink for tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    input: Option<RawTable>,
    output: Arc<RwLock<Option<RankedTable>>>,
}

impl InMemoryTable {
    /// Creates an adapter that serves `input`.
    pub fn new(input: RawTable) -> Self {
        Self {
            input: Some(input),
            output: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates an adapter with no input; reading reports a missing source.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the last table written, if any.
    pub fn written(&self) -> Option<RankedTable> {
        self.output.read().ok().and_then(|guard| guard.clone())
    }

    /// Returns true if a table has been written.
    pub fn has_output(&self) -> bool {
        self.written().is_some()
    }
}

impl TableSource for InMemoryTable {
    fn read(&self) -> Result<RawTable, InputError> {
        self.input
            .clone()
            .ok_or_else(|| InputError::file_not_found(TableSource::describe(self)))
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

impl TableSink for InMemoryTable {
    fn write(&self, table: &RankedTable) -> Result<(), StorageError> {
        let mut output = self
            .output
            .write()
            .map_err(|_| StorageError::io("in-memory table lock poisoned"))?;
        *output = Some(table.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
