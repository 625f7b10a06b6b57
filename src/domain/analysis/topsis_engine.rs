//! TOPSIS Engine - Vector-normalized closeness scores and ranks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AlternativeScore, CriteriaMatrix, TopsisResult};
use crate::domain::foundation::{ComputationError, Impact, ImpactVector, WeightVector};

/// The two synthetic reference points, one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks every alternative of `matrix`.
    ///
    /// `weights` and `impacts` must have one entry per matrix column; the
    /// caller guarantees this.
    ///
    /// # Algorithm
    /// 1. Column norms, failing on any zero norm
    /// 2. Normalize and weight each cell
    /// 3. Ideal best/worst per criterion, according to its impact
    /// 4. Euclidean separation of each alternative from both ideal points
    /// 5. Closeness = s_worst / (s_best + s_worst), 0 when both are 0
    /// 6. Ranks by descending closeness, ties kept in input order
    pub fn compute(
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisResult, ComputationError> {
        debug_assert_eq!(weights.len(), matrix.column_count());
        debug_assert_eq!(impacts.len(), matrix.column_count());

        let norms = Self::column_norms(matrix)?;

        // Separations are measured in units of the largest weight, which
        // keeps them finite; closeness does not depend on the unit.
        let weight_values = weights.values();
        let scale = weight_values.iter().copied().fold(0.0, f64::max);
        let unit_weights: Vec<f64> = weight_values.iter().map(|w| w / scale).collect();

        let weighted = Self::weighted_matrix(matrix, &norms, &unit_weights);
        let ideal = Self::ideal_points(&weighted, impacts.as_slice());

        let separations: Vec<(f64, f64)> = weighted
            .rows()
            .map(|row| {
                (
                    Self::separation(row, &ideal.best),
                    Self::separation(row, &ideal.worst),
                )
            })
            .collect();

        let scores: Vec<f64> = separations
            .iter()
            .map(|&(s_best, s_worst)| Self::closeness(s_best, s_worst))
            .collect();
        let ranks = Self::rank_by_score(&scores);

        debug!(
            alternatives = matrix.row_count(),
            criteria = matrix.column_count(),
            "Computed TOPSIS scores"
        );

        let alternatives = separations
            .iter()
            .zip(scores.iter().zip(ranks.iter()))
            .map(|(&(separation_best, separation_worst), (&score, &rank))| AlternativeScore {
                score,
                rank,
                separation_best: separation_best * scale,
                separation_worst: separation_worst * scale,
            })
            .collect();

        Ok(TopsisResult {
            alternatives,
            ideal_best: ideal.best.iter().map(|v| v * scale).collect(),
            ideal_worst: ideal.worst.iter().map(|v| v * scale).collect(),
        })
    }

    /// Euclidean norm of every criterion column.
    ///
    /// # Errors
    /// `DegenerateColumn` for the first column whose norm is zero. This
    /// includes every column of a matrix with no rows.
    pub fn column_norms(matrix: &CriteriaMatrix) -> Result<Vec<f64>, ComputationError> {
        (0..matrix.column_count())
            .map(|column| {
                let norm = matrix.column_norm(column);
                if norm == 0.0 {
                    Err(ComputationError::DegenerateColumn { column })
                } else {
                    Ok(norm)
                }
            })
            .collect()
    }

    /// `weighted[i][j] = matrix[i][j] / norms[j] * weights[j]`.
    pub fn weighted_matrix(matrix: &CriteriaMatrix, norms: &[f64], weights: &[f64]) -> CriteriaMatrix {
        matrix.map(|_, column, value| value / norms[column] * weights[column])
    }

    /// Ideal best and worst values per criterion.
    ///
    /// Benefit criteria take the column maximum as best; cost criteria take
    /// the minimum.
    pub fn ideal_points(weighted: &CriteriaMatrix, impacts: &[Impact]) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (column, impact) in impacts.iter().enumerate() {
            let values = weighted.column(column);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);

            match impact {
                Impact::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Euclidean distance between an alternative and a reference point.
    pub fn separation(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(a, b)| a - b)
            .fold(0.0, f64::hypot)
    }

    /// Relative closeness to the ideal solution.
    ///
    /// An alternative sitting on both ideal points at once (single row, or
    /// all rows identical) has zero total separation and scores 0.
    pub fn closeness(separation_best: f64, separation_worst: f64) -> f64 {
        let total = separation_best + separation_worst;
        if total == 0.0 {
            0.0
        } else {
            separation_worst / total
        }
    }

    /// 1-indexed ranks by descending score.
    ///
    /// Sorts row indices by descending score with a stable sort, then gives
    /// each row its position in that order. Equal scores therefore get
    /// distinct ranks in input order; ranks are always a permutation of 1..=n.
    pub fn rank_by_score(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0; scores.len()];
        for (position, &index) in order.iter().enumerate() {
            ranks[index] = position + 1;
        }
        ranks
    }
}
