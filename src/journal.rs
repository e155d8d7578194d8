//! Append-only transition journal.
//!
//! One timestamped line per detected transition. The destination is
//! opened once at startup and held for the process lifetime; it is never
//! truncated or rotated.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::transition::Transition;

/// Timestamp layout for journal lines.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Errors that can occur in the journal.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The destination could not be opened at startup. Fatal: monitoring
    /// must not start with a broken logging target.
    #[error("failed to open log file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending a line failed.
    #[error("failed to append to log file: {0}")]
    Write(#[from] std::io::Error),
}

/// Append-only destination for transition records.
pub struct TransitionJournal {
    file: File,
    echo: bool,
}

impl TransitionJournal {
    /// Open the journal in append mode, creating the file if absent.
    ///
    /// # Errors
    /// Returns `JournalError::Open` if the destination cannot be opened.
    pub fn open(path: impl AsRef<Path>, echo: bool) -> Result<Self, JournalError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| JournalError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { file, echo })
    }

    /// Append one timestamped line for the transition.
    ///
    /// When echo is enabled, the bare message (no timestamp prefix) is
    /// also printed to stdout.
    pub fn record(&mut self, transition: Transition) -> Result<(), JournalError> {
        let ts = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(self.file, "{} {}", ts, transition.message())?;
        self.file.flush()?;

        if self.echo {
            println!("{}", transition.message());
        }
        Ok(())
    }
}

impl std::fmt::Debug for TransitionJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionJournal")
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connection_log.txt");

        let _journal = TransitionJournal::open(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_record_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connection_log.txt");

        let mut journal = TransitionJournal::open(&path, false).unwrap();
        journal.record(Transition::Restored).unwrap();
        journal.record(Transition::Lost).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Internet connection restored"));
        assert!(lines[1].ends_with("Internet connection lost"));
    }

    #[test]
    fn test_record_lines_are_timestamp_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connection_log.txt");

        let mut journal = TransitionJournal::open(&path, false).unwrap();
        journal.record(Transition::Lost).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content.lines().next().unwrap();
        let prefix = &line[..19];
        assert!(NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_reopen_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connection_log.txt");

        let mut journal = TransitionJournal::open(&path, false).unwrap();
        journal.record(Transition::Restored).unwrap();
        drop(journal);

        let mut journal = TransitionJournal::open(&path, false).unwrap();
        journal.record(Transition::Lost).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_open_fails_on_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("connection_log.txt");

        let result = TransitionJournal::open(&path, false);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
