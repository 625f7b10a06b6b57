//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that turn a raw table and the
//! weight/impact parameters into TOPSIS closeness scores and ranks.
//!
//! # Components
//!
//! - `RawTable` / `RankedTable` - Input and output tables as text cells
//! - `CriteriaMatrix` - Numeric alternatives x criteria values
//! - `ParameterValidator` - Weight and impact parsing
//! - `DatasetValidator` - Table shape and numeric checks
//! - `TopsisEngine` - Normalization, ideal points, separations, ranks
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Reading and
//! writing tables happens behind the ports; nothing here touches I/O.

mod criteria_matrix;
mod dataset_validator;
mod parameter_validator;
mod ranked_table;
mod raw_table;
mod topsis_engine;
mod topsis_result;

pub use criteria_matrix::{CriteriaMatrix, CriteriaMatrixBuilder};
pub use dataset_validator::{DatasetValidator, ValidatedDataset, MIN_COLUMNS};
pub use parameter_validator::{ParameterValidator, PARAMETER_DELIMITER};
pub use ranked_table::{RankedTable, ScoreFormat, RANK_COLUMN, SCORE_COLUMN};
pub use raw_table::RawTable;
pub use topsis_engine::{IdealPoints, TopsisEngine};
pub use topsis_result::{AlternativeScore, TopsisResult};
