//! Reading book records from colon-delimited text.
//!
//! This module provides [`parse_line`] for decoding a single
//! `Title:Author:ISBN:Copies` line, and [`CatalogReader`] for walking the
//! records of any source that implements [`std::io::BufRead`].
//!
//! # Examples
//!
//! Parsing one line:
//!
//! ```
//! use booktrack::parse_line;
//!
//! let book = parse_line(" Dune : Herbert :1234567890123: 3")?;
//! assert_eq!(book.title(), "Dune");
//! assert_eq!(book.copies(), 3);
//! # Ok::<(), booktrack::CatalogError>(())
//! ```
//!
//! Reading from a buffer:
//!
//! ```
//! use booktrack::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "Dune:Herbert:1234567890123:3\n\nbroken line\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//!
//! while let Some(entry) = reader.read_entry()? {
//!     match entry.outcome {
//!         Ok(book) => println!("{}", book.title()),
//!         Err(e) => eprintln!("line {}: {}", entry.line_number, e),
//!     }
//! }
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use crate::error::{CatalogError, Result};
use crate::record::{Book, FIELD_SEPARATOR};
use crate::validation::BookValidator;
use std::io::BufRead;

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 4;

/// Parse one record line into a validated [`Book`].
///
/// The line is split on `:` keeping empty trailing fields, so `"a:b:c:"` has
/// four fields, the last one empty. Each field is trimmed with
/// [`BookValidator::trim_field`] before validation.
/// Checks run in order: field count, title, author, ISBN, copies.
///
/// # Errors
///
/// - [`CatalogError::MalformedEntry`] for a field count other than four, an
///   empty title or author, or a copies value that is not a positive integer
/// - [`CatalogError::InvalidIsbn`] for an ISBN that is not exactly 13 digits
pub fn parse_line(line: &str) -> Result<Book> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::MalformedEntry(format!(
            "Expected 4 fields (Title:Author:ISBN:Copies), got {}",
            parts.len()
        )));
    }

    let title = BookValidator::trim_field(parts[0]);
    let author = BookValidator::trim_field(parts[1]);
    let isbn = BookValidator::trim_field(parts[2]);
    let copies = BookValidator::trim_field(parts[3]);

    BookValidator::validate_title(title)?;
    BookValidator::validate_author(author)?;
    BookValidator::validate_isbn(isbn)?;
    let copies = BookValidator::parse_copies(copies)?;

    Book::new(title, author, isbn, copies)
}

/// One non-blank line read from a catalog source.
#[derive(Debug)]
pub struct LineEntry {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The raw line, without its terminator.
    pub text: String,
    /// The parsed book, or the validation error for this line.
    pub outcome: Result<Book>,
}

/// Reader for colon-delimited catalog text.
///
/// `CatalogReader` yields one [`LineEntry`] per non-blank line. Lines that
/// are empty or hold only spaces and control characters are skipped silently. A line that fails
/// validation does not stop the reader; its error is carried in
/// [`LineEntry::outcome`].
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    lines_read: usize,
    blank_lines: usize,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new catalog reader.
    pub fn new(reader: R) -> Self {
        CatalogReader {
            reader,
            lines_read: 0,
            blank_lines: 0,
        }
    }

    /// Read the next non-blank line.
    ///
    /// Returns `Ok(None)` at end of input. Both `\n` and `\r\n` terminators
    /// are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the underlying source fails, including
    /// when it is not valid UTF-8.
    pub fn read_entry(&mut self) -> Result<Option<LineEntry>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }

            if BookValidator::trim_field(&line).is_empty() {
                self.blank_lines += 1;
                continue;
            }

            let outcome = parse_line(&line);
            return Ok(Some(LineEntry {
                line_number: self.lines_read,
                text: line,
                outcome,
            }));
        }
    }

    /// Total lines consumed so far, blank ones included.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Blank or whitespace-only lines skipped so far.
    #[must_use]
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }
}

impl<R: BufRead> Iterator for CatalogReader<R> {
    type Item = Result<LineEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_entry().transpose()
    }
}
