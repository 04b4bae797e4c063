//! One run of the book tracker: load, dispatch, report.
//!
//! [`Tracker::run`] takes the two positional arguments (catalog path and
//! operation) and writes everything the user sees to the given output:
//!
//! 1. Validate the arguments. Too few arguments or a catalog path without
//!    `.txt` are fatal.
//! 2. Open the catalog, creating it if absent. Invalid lines are logged and
//!    counted, then dropped.
//! 3. Classify the operation argument and run exactly one of: ISBN search,
//!    record insert, title search.
//! 4. Print the summary counters. This happens on every path, including
//!    fatal ones.
//!
//! Fatal errors stop the run before any catalog work and are never written to
//! the error log. Recoverable errors are logged and counted, and the run
//! continues.
//!
//! # Examples
//!
//! ```no_run
//! use booktrack::{Tracker, TrackerConfig};
//!
//! let args = vec!["data/books.txt".to_string(), "dune".to_string()];
//! let mut tracker = Tracker::new(TrackerConfig::default());
//! let summary = tracker.run(&args, &mut std::io::stdout())?;
//! println!("{} search results", summary.stats.search_results);
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::catalog::Catalog;
use crate::config::{TrackerConfig, CATALOG_EXTENSION};
use crate::error::{CatalogError, ErrorKind, Result};
use crate::error_log::{ErrorEntry, ErrorLog, ErrorSink};
use crate::operation::{classify, Operation};
use crate::query::IsbnLookup;
use crate::reader::parse_line;
use crate::report::{self, RunStats};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// What a finished run reports back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Counters as printed in the summary.
    pub stats: RunStats,
    /// The fatal error that stopped the run early, if any.
    pub fatal: Option<ErrorKind>,
}

/// Mutable state threaded through one run.
struct RunContext<'a, W: Write> {
    out: &'a mut W,
    stats: RunStats,
    sink: Option<&'a mut dyn ErrorSink>,
}

impl<W: Write> RunContext<'_, W> {
    /// Count a recoverable error and append it to the error log.
    fn record_error(&mut self, offending_text: &str, error: &CatalogError) -> Result<()> {
        self.stats.errors += 1;

        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        if let Err(e) = sink.log(&ErrorEntry::now(offending_text, error)) {
            warn!(error = %e, "could not write to error log");
            writeln!(self.out, "Warning: could not write to error log: {e}")?;
        }
        Ok(())
    }
}

/// Runs one catalog operation per call.
#[derive(Debug, Default)]
pub struct Tracker {
    config: TrackerConfig,
    sink: Option<Box<dyn ErrorSink>>,
}

impl Tracker {
    /// Create a tracker that logs errors to a file, as configured.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Tracker { config, sink: None }
    }

    /// Send logged errors to `sink` instead of the error-log file.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run one operation.
    ///
    /// `args` are the positional arguments: catalog path, then operation.
    /// Anything after the second argument is ignored. The summary is always
    /// written to `out`, and the returned [`RunSummary`] carries the same
    /// counters.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails. Catalog problems are
    /// reported in the output and counted, never returned.
    pub fn run<W: Write>(&mut self, args: &[String], out: &mut W) -> io::Result<RunSummary> {
        let mut file_log = if self.sink.is_some() {
            None
        } else {
            self.file_log_for(args)
        };

        let (stats, fatal) = {
            let sink: Option<&mut dyn ErrorSink> = match (&mut self.sink, &mut file_log) {
                (Some(sink), _) => Some(&mut **sink as &mut dyn ErrorSink),
                (None, Some(log)) => Some(log as &mut dyn ErrorSink),
                (None, None) => None,
            };
            let mut ctx = RunContext {
                out: &mut *out,
                stats: RunStats::default(),
                sink,
            };

            let fatal = match Self::execute(args, &mut ctx) {
                Ok(()) => None,
                Err(error) => {
                    ctx.stats.errors += 1;
                    match &error {
                        CatalogError::Io(e) => writeln!(ctx.out, "File I/O error: {e}")?,
                        _ => writeln!(ctx.out, "Error: {error}")?,
                    }
                    info!(kind = %error.kind(), %error, "run stopped early");
                    Some(error.kind())
                },
            };
            (ctx.stats, fatal)
        };

        stats.write_summary(out)?;
        Ok(RunSummary { stats, fatal })
    }

    /// The error log for a run, once the catalog path is known to be usable.
    fn file_log_for(&self, args: &[String]) -> Option<ErrorLog> {
        let catalog = args.first().filter(|path| path.ends_with(CATALOG_EXTENSION))?;
        if args.len() < 2 {
            return None;
        }
        Some(match &self.config.error_log_path {
            Some(path) => ErrorLog::new(path),
            None => ErrorLog::beside(Path::new(catalog), &self.config.error_log_name),
        })
    }

    fn execute<W: Write>(args: &[String], ctx: &mut RunContext<'_, W>) -> Result<()> {
        let [catalog_path, operation, ..] = args else {
            return Err(CatalogError::InsufficientArguments(
                "Need at least 2 arguments: <catalogFile.txt> <operation>".to_string(),
            ));
        };

        if !catalog_path.ends_with(CATALOG_EXTENSION) {
            return Err(CatalogError::InvalidFileName(format!(
                "Catalog file must end with .txt, got: {catalog_path}"
            )));
        }

        let loaded = Catalog::open(catalog_path)?;
        let mut catalog = loaded.catalog;
        ctx.stats.valid_records = catalog.len();
        for rejected in &loaded.rejected {
            ctx.record_error(&rejected.text, &rejected.error)?;
        }

        let operation = classify(operation);
        debug!(operation = operation.name(), argument = operation.argument(), "dispatching");

        match &operation {
            Operation::IsbnSearch(isbn) => Self::isbn_search(&catalog, isbn, ctx),
            Operation::NewRecord(record) => Self::add_book(&mut catalog, record, ctx),
            Operation::TitleSearch(keyword) => Self::title_search(&catalog, keyword, ctx),
        }
    }

    fn title_search<W: Write>(
        catalog: &Catalog,
        keyword: &str,
        ctx: &mut RunContext<'_, W>,
    ) -> Result<()> {
        let matches = catalog.search_title(keyword);

        if matches.is_empty() {
            writeln!(ctx.out, "No books found matching title keyword: {keyword}")?;
            let error =
                CatalogError::MalformedEntry(format!("No results for title keyword: {keyword}"));
            return ctx.record_error(keyword, &error);
        }

        report::write_table(&mut *ctx.out, matches.iter().copied())?;
        ctx.stats.search_results += matches.len();
        info!(keyword, results = matches.len(), "title search");
        Ok(())
    }

    fn isbn_search<W: Write>(
        catalog: &Catalog,
        isbn: &str,
        ctx: &mut RunContext<'_, W>,
    ) -> Result<()> {
        match catalog.find_isbn(isbn) {
            Ok(IsbnLookup::Found(book)) => {
                report::write_table(&mut *ctx.out, [book])?;
                ctx.stats.search_results += 1;
            },
            Ok(IsbnLookup::NotFound) => {
                writeln!(ctx.out, "No book found with ISBN: {isbn}")?;
            },
            Err(error) => {
                writeln!(ctx.out, "Error: {error}")?;
                ctx.record_error(isbn, &error)?;
            },
        }
        Ok(())
    }

    fn add_book<W: Write>(
        catalog: &mut Catalog,
        record: &str,
        ctx: &mut RunContext<'_, W>,
    ) -> Result<()> {
        let book = match parse_line(record) {
            Ok(book) => book,
            Err(error) => {
                writeln!(ctx.out, "Error adding book: {error}")?;
                return ctx.record_error(record, &error);
            },
        };

        catalog.add(book.clone())?;
        info!(isbn = book.isbn(), total = catalog.len(), "added book");

        writeln!(ctx.out, "Book added successfully:")?;
        report::write_table(&mut *ctx.out, [&book])?;
        ctx.stats.books_added += 1;
        Ok(())
    }
}
