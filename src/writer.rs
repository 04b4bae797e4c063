//! Writing book records as colon-delimited text.
//!
//! This module provides [`CatalogWriter`] for serializing [`Book`] values, one
//! per line, to any destination implementing [`std::io::Write`].
//!
//! # Examples
//!
//! ```
//! use booktrack::{Book, CatalogWriter};
//!
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = CatalogWriter::new(&mut buffer);
//!     writer.write_book(&Book::new("Dune", "Herbert", "1234567890123", 3)?)?;
//!     writer.finish()?;
//! }
//! assert_eq!(buffer, b"Dune:Herbert:1234567890123:3\n");
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use crate::error::Result;
use crate::record::Book;
use std::io::Write;

/// Writer for colon-delimited catalog text.
///
/// Each book is written as its line form followed by `\n`.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    books_written: usize,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer.
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            books_written: 0,
        }
    }

    /// Write a single book.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    pub fn write_book(&mut self, book: &Book) -> Result<()> {
        writeln!(self.writer, "{book}")?;
        self.books_written += 1;
        Ok(())
    }

    /// Write every book from an iterator, in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first write error.
    pub fn write_all<'a, I>(&mut self, books: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        for book in books {
            self.write_book(book)?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of books written so far.
    #[must_use]
    pub fn books_written(&self) -> usize {
        self.books_written
    }
}
