//! RankAlternativesHandler - Command handler for one TOPSIS ranking run.
//!
//! Reads the table, validates it and the parameters, computes scores and
//! ranks, and writes the augmented table. The first failure aborts the run
//! before anything is written.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{
    DatasetValidator, ParameterValidator, RankedTable, ScoreFormat, TopsisEngine, TopsisResult,
};
use crate::domain::foundation::{ErrorCode, TopsisError};
use crate::ports::{StorageError, TableSink, TableSource};

/// Command to rank the alternatives of the source table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Comma-delimited weights, one per criterion.
    pub weights: String,
    /// Comma-delimited `+`/`-` impacts, one per criterion.
    pub impacts: String,
}

impl RankAlternativesCommand {
    pub fn new(weights: impl Into<String>, impacts: impl Into<String>) -> Self {
        Self {
            weights: weights.into(),
            impacts: impacts.into(),
        }
    }
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub result: TopsisResult,
    pub table: RankedTable,
}

impl RankAlternativesResult {
    /// Returns the number of ranked alternatives.
    pub fn alternative_count(&self) -> usize {
        self.result.len()
    }
}

/// Errors from a ranking run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankAlternativesError {
    #[error(transparent)]
    Topsis(#[from] TopsisError),

    #[error("Unable to write output: {0}")]
    Storage(#[from] StorageError),
}

impl RankAlternativesError {
    /// Returns the domain category, if this is a domain failure.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            RankAlternativesError::Topsis(err) => Some(err.code()),
            RankAlternativesError::Storage(_) => None,
        }
    }
}

/// Handler for ranking runs.
pub struct RankAlternativesHandler {
    source: Arc<dyn TableSource>,
    sink: Arc<dyn TableSink>,
    score_format: ScoreFormat,
}

impl RankAlternativesHandler {
    pub fn new(source: Arc<dyn TableSource>, sink: Arc<dyn TableSink>) -> Self {
        Self {
            source,
            sink,
            score_format: ScoreFormat::default(),
        }
    }

    /// Sets how scores are rendered in the output table.
    pub fn with_score_format(mut self, score_format: ScoreFormat) -> Self {
        self.score_format = score_format;
        self
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        match self.run(&cmd) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                debug!(
                    code = ?err.code(),
                    source = %self.source.describe(),
                    error = %err,
                    "Ranking aborted"
                );
                Err(err)
            }
        }
    }

    fn run(
        &self,
        cmd: &RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        // 1. Load and validate the table
        let raw = self.source.read().map_err(TopsisError::from)?;
        let dataset = DatasetValidator::validate_table(&raw).map_err(TopsisError::from)?;

        // 2. Validate parameters against the criteria count
        let (weights, impacts) = ParameterValidator::validate_parameters(
            &cmd.weights,
            &cmd.impacts,
            dataset.criteria_count(),
        )
        .map_err(TopsisError::from)?;

        debug!(
            criteria = dataset.criteria_count(),
            alternatives = dataset.matrix.row_count(),
            "Input validated"
        );

        // 3. Score and rank
        let result =
            TopsisEngine::compute(&dataset.matrix, &weights, &impacts).map_err(TopsisError::from)?;

        // 4. Persist
        let table = RankedTable::from_result(&raw, &result, self.score_format);
        self.sink.write(&table)?;

        info!(
            alternatives = result.len(),
            destination = %self.sink.describe(),
            "Ranking complete"
        );

        Ok(RankAlternativesResult { result, table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTable;
    use crate::domain::analysis::RawTable;
    use crate::domain::foundation::{ComputationError, InputError, ParameterError};
    use std::sync::Mutex;

    struct FailingSink {
        attempts: Mutex<usize>,
    }

    impl FailingSink {
        fn new() -> Self {
            Self {
                attempts: Mutex::new(0),
            }
        }

        fn attempts(&self) -> usize {
            *self.attempts.lock().unwrap()
        }
    }

    impl TableSink for FailingSink {
        fn write(&self, _table: &RankedTable) -> Result<(), StorageError> {
            *self.attempts.lock().unwrap() += 1;
            Err(StorageError::io("disk full"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn mobiles() -> RawTable {
        RawTable::from_strs(
            &["Model", "Price", "Storage", "Camera", "Looks"],
            &[
                &["M1", "250", "16", "12", "5"],
                &["M2", "200", "16", "8", "3"],
                &["M3", "300", "32", "16", "4"],
                &["M4", "275", "32", "8", "4"],
                &["M5", "225", "16", "16", "2"],
            ],
        )
        .unwrap()
    }

    fn handler_for(table: RawTable) -> (RankAlternativesHandler, InMemoryTable) {
        let adapter = InMemoryTable::new(table);
        let handler =
            RankAlternativesHandler::new(Arc::new(adapter.clone()), Arc::new(adapter.clone()));
        (handler, adapter)
    }

    #[test]
    fn ranks_and_writes_table() {
        let (handler, adapter) = handler_for(mobiles());

        let outcome = handler
            .handle(RankAlternativesCommand::new("0.25,0.25,0.25,0.25", "-,+,+,+"))
            .unwrap();

        assert_eq!(outcome.alternative_count(), 5);
        assert_eq!(outcome.result.ranks(), vec![3, 5, 1, 2, 4]);

        let written = adapter.written().unwrap();
        assert_eq!(written, outcome.table);
        assert_eq!(written.headers()[5], "Topsis Score");
        assert_eq!(written.headers()[6], "Rank");
        assert_eq!(written.rows()[2][0], "M3");
        assert_eq!(written.rows()[2][6], "1");
    }

    #[test]
    fn score_format_applies_to_output() {
        let (handler, adapter) = handler_for(mobiles());
        let handler = handler.with_score_format(ScoreFormat::Fixed(3));

        handler
            .handle(RankAlternativesCommand::new("1,1,1,1", "-,+,+,+"))
            .unwrap();

        assert_eq!(adapter.written().unwrap().rows()[2][5], "0.692");
    }

    #[test]
    fn missing_source_is_input_error() {
        let adapter = InMemoryTable::empty();
        let handler =
            RankAlternativesHandler::new(Arc::new(adapter.clone()), Arc::new(adapter.clone()));

        let err = handler
            .handle(RankAlternativesCommand::new("1,1", "+,+"))
            .unwrap_err();

        assert!(matches!(
            err,
            RankAlternativesError::Topsis(TopsisError::Input(InputError::FileNotFound { .. }))
        ));
        assert!(!adapter.has_output());
    }

    #[test]
    fn count_mismatch_writes_nothing() {
        let table = RawTable::from_strs(&["Id", "C1", "C2", "C3"], &[&["A", "1", "2", "3"]]).unwrap();
        let (handler, adapter) = handler_for(table);

        let err = handler
            .handle(RankAlternativesCommand::new("1,1", "+,+"))
            .unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::ParameterError));
        assert!(matches!(
            err,
            RankAlternativesError::Topsis(TopsisError::Parameter(ParameterError::CountMismatch {
                expected: 3,
                ..
            }))
        ));
        assert!(!adapter.has_output());
    }

    #[test]
    fn dataset_errors_come_before_parameter_errors() {
        let table = RawTable::from_strs(&["Id", "C1", "C2"], &[&["A", "x", "2"]]).unwrap();
        let (handler, _) = handler_for(table);

        let err = handler
            .handle(RankAlternativesCommand::new("bad", "?"))
            .unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::InputError));
    }

    #[test]
    fn zero_column_writes_nothing() {
        let table =
            RawTable::from_strs(&["Id", "C1", "C2"], &[&["A", "0", "2"], &["B", "0", "3"]]).unwrap();
        let (handler, adapter) = handler_for(table);

        let err = handler
            .handle(RankAlternativesCommand::new("1,1", "+,+"))
            .unwrap_err();

        assert_eq!(
            err,
            RankAlternativesError::Topsis(TopsisError::Computation(
                ComputationError::DegenerateColumn { column: 0 }
            ))
        );
        assert!(!adapter.has_output());
    }

    #[test]
    fn sink_failure_is_storage_error() {
        let sink = Arc::new(FailingSink::new());
        let handler =
            RankAlternativesHandler::new(Arc::new(InMemoryTable::new(mobiles())), sink.clone());

        let err = handler
            .handle(RankAlternativesCommand::new("1,1,1,1", "+,+,+,+"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Unable to write output: IO error: disk full");
        assert_eq!(err.code(), None);
        assert_eq!(sink.attempts(), 1);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (handler, _) = handler_for(mobiles());
        let cmd = RankAlternativesCommand::new("1,2,1,2", "-,+,-,+");

        let first = handler.handle(cmd.clone()).unwrap();
        let second = handler.handle(cmd).unwrap();

        assert_eq!(first.table, second.table);
    }
}
