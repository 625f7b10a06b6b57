//! CSV Table Sink - Implementation of TableSink over a delimited file.
//!
//! Uses a write-to-temp-then-rename pattern so a failed run never leaves a
//! partial output file behind.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::DEFAULT_DELIMITER;
use crate::domain::analysis::RankedTable;
use crate::ports::{StorageError, TableSink};

/// Prefix of the uniquely named temp file created next to the destination.
const TEMP_PREFIX: &str = ".topsis-";

/// Writes the ranked table as a delimited file.
///
/// # Atomic Writes
///
/// 1. Write content to a fresh, uniquely named temp file in the destination
///    directory
/// 2. Sync to disk
/// 3. Rename over the destination
///
/// The temp file is removed if any step fails. Existing files other than the
/// destination are never touched.
#[derive(Debug, Clone)]
pub struct CsvTableSink {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableSink {
    /// Creates a comma-delimited sink for `path`.
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

    /// Directory that receives the temp file.
    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_temp(&self, table: &RankedTable) -> Result<NamedTempFile, StorageError> {
        let directory = self.directory();
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(".tmp");

        // Same mode as a freshly created file; the umask still applies.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut temp = builder
            .tempfile_in(directory)
            .map_err(|e| Self::map_io(e, directory))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.delimiter)
                .from_writer(temp.as_file_mut());

            writer
                .write_record(table.headers())
                .map_err(|e| Self::map_csv(e, &self.path))?;
            for row in table.rows() {
                writer
                    .write_record(row)
                    .map_err(|e| Self::map_csv(e, &self.path))?;
            }
            writer.flush().map_err(|e| Self::map_io(e, &self.path))?;
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| Self::map_io(e, &self.path))?;

        Ok(temp)
    }

    fn map_io(err: io::Error, path: &Path) -> StorageError {
        match err.kind() {
            io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to write {}: {}", path.display(), err)),
        }
    }

    fn map_csv(err: csv::Error, path: &Path) -> StorageError {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::map_io(e, path),
            kind => StorageError::io(format!("Failed to write {}: {:?}", path.display(), kind)),
        }
    }
}

impl TableSink for CsvTableSink {
    fn write(&self, table: &RankedTable) -> Result<(), StorageError> {
        // Dropping the temp file on any error path deletes it.
        let temp = self.write_temp(table)?;
        temp.persist(&self.path)
            .map_err(|e| Self::map_io(e.error, &self.path))?;

        debug!(
            path = %self.path.display(),
            rows = table.row_count(),
            "Wrote ranked table"
        );

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AlternativeScore, RawTable, ScoreFormat, TopsisResult};
    use std::fs;
    use tempfile::tempdir;

    fn ranked() -> RankedTable {
        let table = RawTable::from_strs(&["Id", "C1", "C2"], &[&["a, b", "1", "2"], &["c", "3", "4"]])
            .unwrap();
        let result = TopsisResult {
            alternatives: vec![
                AlternativeScore {
                    score: 0.0,
                    rank: 2,
                    separation_best: 1.0,
                    separation_worst: 0.0,
                },
                AlternativeScore {
                    score: 1.0,
                    rank: 1,
                    separation_best: 0.0,
                    separation_worst: 1.0,
                },
            ],
            ideal_best: vec![],
            ideal_worst: vec![],
        };
        RankedTable::from_result(&table, &result, ScoreFormat::RoundTrip)
    }

    #[test]
    fn write_creates_file_with_appended_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");

        CsvTableSink::new(&path).write(&ranked()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Id,C1,C2,Topsis Score,Rank\n\"a, b\",1,2,0.0,2\nc,3,4,1.0,1\n"
        );
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");

        CsvTableSink::new(&path).write(&ranked()).unwrap();

        assert_eq!(entries(dir.path()), vec!["result.csv"]);
    }

    #[test]
    fn write_keeps_unrelated_sibling_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let sibling = dir.path().join("result.csv.tmp");
        fs::write(&sibling, "keep me").unwrap();

        CsvTableSink::new(&path).write(&ranked()).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert_eq!(entries(dir.path()), vec!["result.csv", "result.csv.tmp"]);
    }

    #[test]
    fn failed_rename_removes_written_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inside.txt"), "occupied").unwrap();

        let result = CsvTableSink::new(&path).write(&ranked());

        assert!(result.is_err());
        assert!(path.is_dir());
        assert_eq!(entries(dir.path()), vec!["result.csv"]);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        fs::write(&path, "stale").unwrap();

        CsvTableSink::new(&path).write(&ranked()).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with("Id,C1,C2"));
    }

    #[test]
    fn write_honours_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");

        CsvTableSink::new(&path)
            .with_delimiter(b';')
            .write(&ranked())
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Id;C1;C2;Topsis Score;Rank\n"));
        assert!(content.contains("a, b;1;2;0.0;2"));
    }

    #[test]
    fn write_into_missing_directory_fails_cleanly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("result.csv");

        let result = CsvTableSink::new(&path).write(&ranked());

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn output_mode_matches_a_plainly_created_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let plain = dir.path().join("plain.csv");
        fs::write(&plain, "x").unwrap();

        CsvTableSink::new(&path).write(&ranked()).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
    }

    #[test]
    fn bare_file_name_uses_current_directory() {
        let sink = CsvTableSink::new("result.csv");
        assert_eq!(sink.directory(), Path::new("."));

        let nested = CsvTableSink::new("/data/out/result.csv");
        assert_eq!(nested.directory(), Path::new("/data/out"));
    }
}
