//! Dataset Validator - Table shape and numeric-ness of the criteria columns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CriteriaMatrix, RawTable};
use crate::domain::foundation::InputError;

/// Identifier column plus at least two criteria.
pub const MIN_COLUMNS: usize = 3;

/// A table that passed validation, split into identifiers and criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedDataset {
    /// Header of the identifier column.
    pub identifier_header: String,
    /// Headers of the criteria columns, in order.
    pub criteria_headers: Vec<String>,
    /// Identifier cells, passed through unchanged.
    pub identifiers: Vec<String>,
    /// Criteria values with the identifier column dropped.
    pub matrix: CriteriaMatrix,
}

impl ValidatedDataset {
    /// Returns the number of criteria columns.
    pub fn criteria_count(&self) -> usize {
        self.criteria_headers.len()
    }
}

/// Shape and type checks on the input table.
pub struct DatasetValidator;

impl DatasetValidator {
    /// Validates the table and extracts the criteria matrix.
    ///
    /// # Errors
    /// - `TooFewColumns` if there are fewer than [`MIN_COLUMNS`] columns
    /// - `NonNumericCriteria` if any cell outside the first column is not a
    ///   finite real number. Every cell is examined before deciding.
    ///
    /// # Edge Cases
    /// - Header-only table: yields an empty matrix with the right width
    pub fn validate_table(table: &RawTable) -> Result<ValidatedDataset, InputError> {
        let column_count = table.column_count();
        if column_count < MIN_COLUMNS {
            return Err(InputError::TooFewColumns {
                found: column_count,
            });
        }

        let criteria_count = column_count - 1;
        let mut values = Vec::with_capacity(table.row_count());
        let mut invalid = 0usize;
        let mut first_invalid: Option<(usize, usize)> = None;

        for (row_index, row) in table.rows().iter().enumerate() {
            let mut parsed = Vec::with_capacity(criteria_count);
            for (column_index, cell) in row.iter().enumerate().skip(1) {
                match Self::coerce_numeric(cell) {
                    Some(value) => parsed.push(value),
                    None => {
                        invalid += 1;
                        first_invalid.get_or_insert((row_index, column_index));
                        parsed.push(f64::NAN);
                    }
                }
            }
            values.push(parsed);
        }

        if let Some((row, column)) = first_invalid {
            debug!(
                invalid_cells = invalid,
                first_row = row + 1,
                first_column = %table.headers()[column],
                "Criteria columns contain non-numeric values"
            );
            return Err(InputError::NonNumericCriteria);
        }

        let matrix = CriteriaMatrix::from_rows(criteria_count, values)?;
        let headers = table.headers();

        Ok(ValidatedDataset {
            identifier_header: headers[0].clone(),
            criteria_headers: headers[1..].to_vec(),
            identifiers: table.rows().iter().map(|row| row[0].clone()).collect(),
            matrix,
        })
    }

    /// Coerces a cell to a finite real number.
    ///
    /// Surrounding whitespace is ignored. Empty cells, `NaN` and infinities
    /// are not numeric.
    pub fn coerce_numeric(cell: &str) -> Option<f64> {
        cell.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}
