//! Run counters and user-facing output.
//!
//! [`RunStats`] is threaded through a run by mutable reference and printed as
//! the closing summary. The table helpers render book rows in fixed-width
//! columns: Title 30, Author 20, ISBN 15 (left-aligned) and Copies 5
//! (right-aligned). Values longer than their column are not truncated.

use crate::record::Book;
use std::io::{self, Write};

/// Width of the dashed rule under the table header.
pub const RULE_WIDTH: usize = 72;

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Catalog lines that parsed into a book.
    pub valid_records: usize,
    /// Rows printed by a search.
    pub search_results: usize,
    /// Records inserted.
    pub books_added: usize,
    /// Errors of any kind, fatal or recoverable.
    pub errors: usize,
}

impl RunStats {
    /// Write the four-line summary, preceded by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Valid records processed : {}", self.valid_records)?;
        writeln!(out, "Search results          : {}", self.search_results)?;
        writeln!(out, "Books added             : {}", self.books_added)?;
        writeln!(out, "Errors encountered      : {}", self.errors)
    }
}

/// Write the column header and rule.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<30} {:<20} {:<15} {:>5}",
        "Title", "Author", "ISBN", "Copies"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Write one book as a table row.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_row<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(
        out,
        "{:<30} {:<20} {:<15} {:>5}",
        book.title(),
        book.author(),
        book.isbn(),
        book.copies()
    )
}

/// Write the header followed by one row per book.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table<'a, W, I>(out: &mut W, books: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Book>,
{
    write_header(out)?;
    for book in books {
        write_row(out, book)?;
    }
    Ok(())
}

/// Prints a closing line when dropped.
///
/// Create one at the top of `main` so the line is printed on every exit
/// path, after everything else the run writes.
///
/// # Examples
///
/// ```
/// use booktrack::report::Farewell;
///
/// let mut out = Vec::new();
/// {
///     let _farewell = Farewell::new(&mut out, "Goodbye.");
/// }
/// assert_eq!(out, b"Goodbye.\n");
/// ```
#[derive(Debug)]
pub struct Farewell<W: Write> {
    out: W,
    message: String,
}

impl<W: Write> Farewell<W> {
    /// Arm the guard.
    pub fn new(out: W, message: impl Into<String>) -> Self {
        Farewell {
            out,
            message: message.into(),
        }
    }
}

impl<W: Write> Drop for Farewell<W> {
    fn drop(&mut self) {
        // Nothing useful can be done with a write failure during drop.
        let _ = writeln!(self.out, "{}", self.message);
        let _ = self.out.flush();
    }
}
