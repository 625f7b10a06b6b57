//! Ranked Table - The input table with score and rank columns appended.

use serde::{Deserialize, Serialize};

use super::{RawTable, TopsisResult};

/// Header of the appended closeness column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// How closeness scores are rendered in the output table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFormat {
    /// Shortest text that parses back to the same value, always with a
    /// decimal point (`0.0`, `0.5342768571821003`).
    #[default]
    RoundTrip,
    /// Fixed number of digits after the decimal point.
    Fixed(usize),
}

impl ScoreFormat {
    /// Creates a format from an optional precision.
    pub fn from_precision(precision: Option<usize>) -> Self {
        match precision {
            Some(digits) => ScoreFormat::Fixed(digits),
            None => ScoreFormat::RoundTrip,
        }
    }

    /// Renders a score.
    pub fn format(&self, score: f64) -> String {
        match self {
            ScoreFormat::Fixed(digits) => format!("{:.*}", *digits, score),
            ScoreFormat::RoundTrip => {
                let text = score.to_string();
                if score.is_finite() && !text.contains('.') {
                    format!("{}.0", text)
                } else {
                    text
                }
            }
        }
    }
}

/// Output table: every input column unchanged, then score and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RankedTable {
    /// Appends `result` to `table`, row by row in input order.
    ///
    /// `result` must hold one entry per table row.
    pub fn from_result(table: &RawTable, result: &TopsisResult, format: ScoreFormat) -> Self {
        debug_assert_eq!(table.row_count(), result.len());

        let mut headers = table.headers().to_vec();
        headers.push(SCORE_COLUMN.to_string());
        headers.push(RANK_COLUMN.to_string());

        let rows = table
            .rows()
            .iter()
            .zip(&result.alternatives)
            .map(|(row, alternative)| {
                let mut out = row.clone();
                out.push(format.format(alternative.score));
                out.push(alternative.rank.to_string());
                out
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
