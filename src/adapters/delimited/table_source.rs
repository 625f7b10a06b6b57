//! CSV Table Source - Implementation of TableSource over a delimited file.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use super::DEFAULT_DELIMITER;
use crate::domain::analysis::RawTable;
use crate::domain::foundation::InputError;
use crate::ports::TableSource;

/// Reads a delimited file whose first record is the header row.
///
/// Cells are kept verbatim (no trimming) so they can be written back out
/// unchanged. Blank lines are skipped; records whose width differs from the
/// header are rejected as unreadable.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableSource {
    /// Creates a comma-delimited source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Overrides the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses a table from any reader.
    pub fn parse<R: Read>(&self, input: R) -> Result<RawTable, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| InputError::unreadable(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        if headers.is_empty() {
            return Err(InputError::unreadable("No columns to parse from file"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| InputError::unreadable(e.to_string()))?;
            rows.push(record.iter().map(String::from).collect());
        }

        RawTable::new(headers, rows)
    }

    fn open(&self) -> Result<File, InputError> {
        File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InputError::file_not_found(self.path.display().to_string()),
            _ => InputError::unreadable(e.to_string()),
        })
    }
}

impl TableSource for CsvTableSource {
    fn read(&self) -> Result<RawTable, InputError> {
        let file = self.open()?;
        let table = self.parse(file)?;

        debug!(
            path = %self.path.display(),
            columns = table.column_count(),
            rows = table.row_count(),
            "Read input table"
        );

        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn source() -> CsvTableSource {
        CsvTableSource::new("unused.csv")
    }

    #[test]
    fn parse_reads_headers_and_rows() {
        let table = source()
            .parse("Model,Price,Storage\nM1,250,16\nM2,200,32\n".as_bytes())
            .unwrap();

        assert_eq!(table.headers(), &["Model", "Price", "Storage"]);
        assert_eq!(table.rows()[1], vec!["M2", "200", "32"]);
    }

    #[test]
    fn parse_keeps_cells_verbatim() {
        let table = source()
            .parse("Id,C1,C2\n\"a, b\", 1.50 ,2\n".as_bytes())
            .unwrap();

        assert_eq!(table.rows()[0], vec!["a, b", " 1.50 ", "2"]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let table = source().parse("Id,C1,C2\n\nA,1,2\n\n".as_bytes()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn parse_rejects_ragged_records() {
        let result = source().parse("Id,C1,C2\nA,1,2\nB,3\n".as_bytes());
        assert!(matches!(result, Err(InputError::Unreadable { .. })));
    }

    #[test]
    fn parse_rejects_empty_input() {
        let result = source().parse("".as_bytes());
        match result {
            Err(InputError::Unreadable { reason }) => {
                assert_eq!(reason, "No columns to parse from file")
            }
            other => panic!("expected Unreadable, got {:?}", other),
        }
    }

    #[test]
    fn parse_honours_delimiter() {
        let table = source()
            .with_delimiter(b';')
            .parse("Id;C1;C2\nA;1,5;2\n".as_bytes())
            .unwrap();
        assert_eq!(table.rows()[0], vec!["A", "1,5", "2"]);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = CsvTableSource::new(dir.path().join("missing.csv"));

        assert!(matches!(source.read(), Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn read_loads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Id,C1,C2").unwrap();
        writeln!(file, "A,1,2").unwrap();

        let source = CsvTableSource::new(file.path());
        let table = source.read().unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(source.describe(), file.path().display().to_string());
    }
}
