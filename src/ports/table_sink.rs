//! Table Sink Port - Where the ranked table goes.

use thiserror::Error;

use crate::domain::analysis::RankedTable;

/// Port for persisting the ranked table.
///
/// # Contract
///
/// Implementations must never leave partial output behind: either the whole
/// table is written, or the destination is left as it was.
pub trait TableSink: Send + Sync {
    /// Writes the whole table.
    fn write(&self, table: &RankedTable) -> Result<(), StorageError>;

    /// Human-readable description of the destination, for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while writing output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Destination directory was not found.
    #[error("Output location not found: {path}")]
    NotFound { path: String },

    /// Permission denied writing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during write.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        StorageError::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        StorageError::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_displays_correctly() {
        assert_eq!(
            StorageError::not_found("/missing/out.csv").to_string(),
            "Output location not found: /missing/out.csv"
        );
        assert_eq!(
            StorageError::permission_denied("out.csv").to_string(),
            "Permission denied: out.csv"
        );
        assert_eq!(StorageError::io("disk full").to_string(), "IO error: disk full");
    }
}
