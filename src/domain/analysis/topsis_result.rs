//! TOPSIS results - Per-alternative closeness, rank, and separations.

use serde::{Deserialize, Serialize};

/// Score and rank for a single alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    /// Relative closeness to the ideal solution, in [0, 1].
    pub score: f64,
    /// 1 = best. Distinct for every alternative.
    pub rank: usize,
    /// Euclidean distance to the ideal best point.
    pub separation_best: f64,
    /// Euclidean distance to the ideal worst point.
    pub separation_worst: f64,
}

/// Outcome of one TOPSIS computation, alternatives in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub alternatives: Vec<AlternativeScore>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
}

impl TopsisResult {
    /// Returns the closeness scores in input order.
    pub fn scores(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.score).collect()
    }

    /// Returns the ranks in input order.
    pub fn ranks(&self) -> Vec<usize> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TopsisResult {
        TopsisResult {
            alternatives: vec![
                AlternativeScore {
                    score: 0.25,
                    rank: 2,
                    separation_best: 0.3,
                    separation_worst: 0.1,
                },
                AlternativeScore {
                    score: 0.75,
                    rank: 1,
                    separation_best: 0.1,
                    separation_worst: 0.3,
                },
            ],
            ideal_best: vec![0.5, 0.5],
            ideal_worst: vec![0.1, 0.1],
        }
    }

    #[test]
    fn accessors_keep_input_order() {
        let result = sample();
        assert_eq!(result.scores(), vec![0.25, 0.75]);
        assert_eq!(result.ranks(), vec![2, 1]);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn result_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["alternatives"][1]["rank"], 1);
        assert_eq!(json["ideal_best"][0], 0.5);
        assert!(json["alternatives"][0].get("separation_worst").is_some());
    }
}
