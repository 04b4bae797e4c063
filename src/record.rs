//! The book record.
//!
//! A [`Book`] is an immutable value holding the four fields of one catalog
//! line. Books are only constructed through validation, either with
//! [`Book::new`] or by parsing a line with [`crate::reader::parse_line`], so
//! every `Book` in memory satisfies the field rules in
//! [`crate::validation::BookValidator`].
//!
//! # Examples
//!
//! ```
//! use booktrack::Book;
//!
//! let book = Book::new("Dune", "Herbert", "1234567890123", 3)?;
//! assert_eq!(book.to_line(), "Dune:Herbert:1234567890123:3");
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use crate::error::{CatalogError, Result};
use crate::validation::BookValidator;
use std::fmt;

/// Field separator in the line form.
pub const FIELD_SEPARATOR: char = ':';

/// A single book entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    copies: u32,
}

impl Book {
    /// Create a validated book.
    ///
    /// Fields are taken as given; callers parsing raw text should trim first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEntry`] for an empty title or author or
    /// a zero copies count, and [`CatalogError::InvalidIsbn`] for an ISBN that is
    /// not exactly 13 digits.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        copies: u32,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();
        let isbn = isbn.into();

        BookValidator::validate_title(&title)?;
        BookValidator::validate_author(&author)?;
        BookValidator::validate_isbn(&isbn)?;
        if copies == 0 {
            return Err(CatalogError::MalformedEntry(
                "Copies must be > 0, got: 0".to_string(),
            ));
        }

        Ok(Book {
            title,
            author,
            isbn,
            copies,
        })
    }

    /// The book title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The 13-digit ISBN.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Number of copies held.
    #[must_use]
    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// Lowercased title, the catalog's sort key.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Serialize to the `title:author:isbn:copies` line form (no terminator).
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.title,
            self.author,
            self.isbn,
            self.copies,
            sep = FIELD_SEPARATOR
        )
    }
}
