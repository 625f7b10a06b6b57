//! Raw Table - Header row plus opaque string cells, as read at the boundary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::InputError;

/// A rectangular table of unparsed cells.
///
/// Every row has exactly as many cells as there are headers. Cells are kept
/// as the original text so the identifier column and criteria values can be
/// written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table, rejecting rows whose width differs from the header row.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, InputError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(InputError::unreadable(format!(
                "row {} has {} fields, expected {}",
                index + 1,
                row.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, rows })
    }

    /// Convenience constructor from string slices.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Result<Self, InputError> {
        Self::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of columns (identifier included).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
