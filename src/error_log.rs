//! Audit log of rejected input.
//!
//! Every recoverable error (a bad catalog line, a rejected record argument, a
//! duplicate ISBN, a title search with no results) becomes an [`ErrorEntry`]
//! handed to an [`ErrorSink`]. The production sink, [`ErrorLog`], appends one
//! line per entry to `errors.log` next to the catalog:
//!
//! ```text
//! [2024-05-01 14:03:27] INVALID INPUT: "Dune:Herbert:123:3" - InvalidISBN: ISBN must be exactly 13 digits, got: '123'
//! ```
//!
//! The file is opened and closed for each entry. Writing is best-effort: a
//! failure is returned to the caller, which warns and carries on.

use crate::error::{CatalogError, ErrorKind};
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Timestamp layout used in log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// Local time the failure was logged.
    pub timestamp: NaiveDateTime,
    /// The text that caused the failure: a catalog line or an argument.
    pub offending_text: String,
    /// Kind of the failure.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ErrorEntry {
    /// Build an entry stamped with the current local time.
    #[must_use]
    pub fn now(offending_text: &str, error: &CatalogError) -> Self {
        Self::at(Local::now().naive_local(), offending_text, error)
    }

    /// Build an entry with an explicit timestamp.
    #[must_use]
    pub fn at(timestamp: NaiveDateTime, offending_text: &str, error: &CatalogError) -> Self {
        ErrorEntry {
            timestamp,
            offending_text: offending_text.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] INVALID INPUT: \"{}\" - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.offending_text,
            self.kind,
            self.message
        )
    }
}

/// Destination for logged failures.
pub trait ErrorSink: fmt::Debug {
    /// Record one entry.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry could not be stored. Callers treat
    /// this as a warning.
    fn log(&mut self, entry: &ErrorEntry) -> io::Result<()>;
}

/// Append-only error log file.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Log to the given file. Nothing is created until the first entry.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ErrorLog { path: path.into() }
    }

    /// Log to `file_name` in the directory holding `catalog`.
    ///
    /// A catalog path with no directory component logs to the current
    /// directory.
    pub fn beside(catalog: &Path, file_name: &str) -> Self {
        let dir = match catalog.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::new(dir.join(file_name))
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorSink for ErrorLog {
    fn log(&mut self, entry: &ErrorEntry) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{entry}")?;
        debug!(path = %self.path.display(), kind = %entry.kind, "appended error log entry");
        Ok(())
    }
}

/// In-memory sink, useful for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Entries in the order they were logged.
    pub entries: Vec<ErrorEntry>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorSink for MemorySink {
    fn log(&mut self, entry: &ErrorEntry) -> io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(14, 3, 27)
            .unwrap()
    }

    #[test]
    fn test_entry_line_format() {
        let err = CatalogError::InvalidIsbn("ISBN must be exactly 13 digits, got: '123'".into());
        let entry = ErrorEntry::at(fixed_time(), "Dune:Herbert:123:3", &err);
        assert_eq!(
            entry.to_string(),
            "[2024-05-01 14:03:27] INVALID INPUT: \"Dune:Herbert:123:3\" - InvalidISBN: \
             ISBN must be exactly 13 digits, got: '123'"
        );
    }

    #[test]
    fn test_error_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = ErrorLog::new(dir.path().join("errors.log"));
        let err = CatalogError::MalformedEntry("Title is empty".into());

        log.log(&ErrorEntry::at(fixed_time(), "first", &err)).unwrap();
        log.log(&ErrorEntry::at(fixed_time(), "second", &err)).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"first\" - MalformedEntry: Title is empty"));
        assert!(lines[1].contains("\"second\""));
    }

    #[test]
    fn test_beside_uses_catalog_directory() {
        let log = ErrorLog::beside(Path::new("data/books.txt"), "errors.log");
        assert_eq!(log.path(), Path::new("data/errors.log"));

        let log = ErrorLog::beside(Path::new("books.txt"), "errors.log");
        assert_eq!(log.path(), Path::new("./errors.log"));
    }

    #[test]
    fn test_unwritable_log_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let mut log = ErrorLog::new(dir.path());
        let err = CatalogError::MalformedEntry("x".into());
        assert!(log.log(&ErrorEntry::now("x", &err)).is_err());
    }
}
