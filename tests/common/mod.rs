//! Common test helpers and utilities shared across test suite.

use booktrack::{ErrorEntry, ErrorSink, RunSummary, Tracker, TrackerConfig};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Error sink whose entries stay readable after the tracker takes ownership.
#[derive(Debug, Clone, Default)]
pub struct SharedSink(pub Arc<Mutex<Vec<ErrorEntry>>>);

impl SharedSink {
    /// Snapshot of the entries logged so far.
    pub fn entries(&self) -> Vec<ErrorEntry> {
        self.0.lock().unwrap().clone()
    }
}

impl ErrorSink for SharedSink {
    fn log(&mut self, entry: &ErrorEntry) -> io::Result<()> {
        self.0.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Error sink that always fails.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingSink;

impl ErrorSink for FailingSink {
    fn log(&mut self, _entry: &ErrorEntry) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "log is read-only"))
    }
}

/// A temporary directory holding `books.txt` with the given contents.
pub fn catalog_with(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Run the tracker with file logging, returning the summary and stdout text.
pub fn run_args(args: &[&str]) -> (RunSummary, String) {
    let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    let mut out = Vec::new();
    let summary = Tracker::new(TrackerConfig::default())
        .run(&args, &mut out)
        .unwrap();
    (summary, String::from_utf8(out).unwrap())
}

/// Run the tracker against `catalog` with an in-memory sink.
#[allow(dead_code)]
pub fn run_with_sink(catalog: &Path, operation: &str) -> (RunSummary, String, SharedSink) {
    let sink = SharedSink::default();
    let args = vec![catalog.display().to_string(), operation.to_string()];
    let mut out = Vec::new();
    let summary = Tracker::new(TrackerConfig::default())
        .with_sink(Box::new(sink.clone()))
        .run(&args, &mut out)
        .unwrap();
    (summary, String::from_utf8(out).unwrap(), sink)
}

/// Lines of the error log beside `catalog`, or none if it was never written.
#[allow(dead_code)]
pub fn error_log_lines(catalog: &Path) -> Vec<String> {
    let log = catalog.parent().unwrap().join("errors.log");
    std::fs::read_to_string(log)
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
