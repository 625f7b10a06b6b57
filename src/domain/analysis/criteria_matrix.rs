//! Criteria Matrix - Alternatives x criteria numeric values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::InputError;

/// Row-major R x C matrix of finite criterion values.
///
/// Immutable once built. Rows are alternatives, columns are criteria, both in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl CriteriaMatrix {
    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> CriteriaMatrixBuilder {
        CriteriaMatrixBuilder::new()
    }

    /// Creates a matrix from nested rows.
    ///
    /// `columns` fixes the width so that a matrix with zero rows still knows
    /// how many criteria it has.
    pub fn from_rows(columns: usize, rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let mut values = Vec::with_capacity(rows.len() * columns);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(InputError::unreadable(format!(
                    "matrix row {} has {} values, expected {}",
                    index + 1,
                    row.len(),
                    columns
                )));
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            values,
        })
    }

    /// Returns the number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the number of criteria.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns one alternative's values.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    /// Iterates over alternatives in input order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Returns one criterion's values, top to bottom.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.rows().map(|row| row[column]).collect()
    }

    /// Euclidean norm of one criterion column.
    ///
    /// Accumulated with `hypot`, so any column holding a nonzero finite value
    /// has a nonzero finite norm.
    pub fn column_norm(&self, column: usize) -> f64 {
        self.rows().map(|row| row[column]).fold(0.0, f64::hypot)
    }

    /// Returns a new matrix with `f(row, column, value)` applied to every cell.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| f(i / self.columns, i % self.columns, v))
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            values,
        }
    }
}

/// Builder for constructing CriteriaMatrix instances.
#[derive(Debug, Default)]
pub struct CriteriaMatrixBuilder {
    columns: Option<usize>,
    rows: Vec<Vec<f64>>,
}

impl CriteriaMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the number of criteria. Defaults to the first row's width.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Appends an alternative.
    pub fn row(mut self, values: Vec<f64>) -> Self {
        self.rows.push(values);
        self
    }

    /// Builds the matrix.
    pub fn build(self) -> Result<CriteriaMatrix, InputError> {
        let columns = self
            .columns
            .or_else(|| self.rows.first().map(Vec::len))
            .unwrap_or(0);
        CriteriaMatrix::from_rows(columns, self.rows)
    }
}
