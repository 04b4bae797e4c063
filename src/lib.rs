#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # booktrack: Library Book Tracker
//!
//! A small library and command-line tool for a colon-delimited book catalog.
//! Each line of the catalog file is one record, `Title:Author:ISBN:Copies`.
//! A run loads and validates the whole file, then performs one operation
//! chosen from the shape of its argument.
//!
//! ## Quick Start
//!
//! ### Parsing and Writing Records
//!
//! ```
//! use booktrack::{parse_line, CatalogWriter};
//!
//! let book = parse_line("Dune : Herbert : 1234567890123 : 3")?;
//! assert_eq!(book.author(), "Herbert");
//!
//! let mut buffer = Vec::new();
//! CatalogWriter::new(&mut buffer).write_book(&book)?;
//! assert_eq!(buffer, b"Dune:Herbert:1234567890123:3\n");
//! # Ok::<(), booktrack::CatalogError>(())
//! ```
//!
//! ### Running an Operation
//!
//! ```no_run
//! use booktrack::{Tracker, TrackerConfig};
//!
//! let args = vec!["books.txt".to_string(), "Hobbit:Tolkien:1111111111111:5".to_string()];
//! let summary = Tracker::new(TrackerConfig::default()).run(&args, &mut std::io::stdout())?;
//! assert_eq!(summary.stats.books_added, 1);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`] — The [`Book`] value and its line form
//! - [`validation`] — Per-field checks
//! - [`reader`] — Parsing lines and reading catalog text
//! - [`writer`] — Writing catalog text
//! - [`operation`] — Classifying the operation argument
//! - [`catalog`] — The file-backed store
//! - [`query`] — Title and ISBN search
//! - [`error_log`] — The `errors.log` audit sink
//! - [`report`] — Counters, tables, and the farewell line
//! - [`tracker`] — One end-to-end run
//! - [`error`] — Error types and result type

pub mod catalog;
pub mod config;
pub mod error;
pub mod error_log;
pub mod operation;
pub mod query;
pub mod reader;
pub mod record;
pub mod report;
pub mod tracker;
pub mod validation;
pub mod writer;

pub use catalog::{Catalog, Loaded, Rejected};
pub use config::TrackerConfig;
pub use error::{CatalogError, ErrorKind, Result};
pub use error_log::{ErrorEntry, ErrorLog, ErrorSink, MemorySink};
pub use operation::{classify, Operation};
pub use query::IsbnLookup;
pub use reader::{parse_line, CatalogReader, LineEntry};
pub use record::Book;
pub use report::RunStats;
pub use tracker::{RunSummary, Tracker};
pub use validation::BookValidator;
pub use writer::CatalogWriter;
