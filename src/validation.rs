//! Field-level validation for catalog records.
//!
//! [`BookValidator`] holds the individual checks applied to each field of a
//! `Title:Author:ISBN:Copies` record. The checks run on text already passed
//! through [`BookValidator::trim_field`].

use crate::error::{CatalogError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode decimal digits.
    static ref ISBN_PATTERN: Regex = Regex::new(r"^[0-9]{13}$").expect("valid ISBN pattern");
}

/// Validator for the fields of a book record.
#[derive(Debug)]
pub struct BookValidator;

impl BookValidator {
    /// Check whether `text` is exactly 13 ASCII decimal digits.
    ///
    /// No separators, no surrounding whitespace, no checksum verification.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::BookValidator;
    ///
    /// assert!(BookValidator::is_isbn("9780306406157"));
    /// assert!(!BookValidator::is_isbn("978-0306406157"));
    /// assert!(!BookValidator::is_isbn("978030640615"));
    /// ```
    #[must_use]
    pub fn is_isbn(text: &str) -> bool {
        ISBN_PATTERN.is_match(text)
    }

    /// Strip leading and trailing ASCII control characters and spaces.
    ///
    /// Only characters at or below U+0020 count; Unicode whitespace such as
    /// a no-break space is kept as field content.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::BookValidator;
    ///
    /// assert_eq!(BookValidator::trim_field("\t Dune \r"), "Dune");
    /// assert_eq!(BookValidator::trim_field("3\u{a0}"), "3\u{a0}");
    /// ```
    #[must_use]
    pub fn trim_field(text: &str) -> &str {
        text.trim_matches(|c: char| c <= ' ')
    }

    /// Validate a title.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEntry`] if the title is empty.
    pub fn validate_title(title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(CatalogError::MalformedEntry("Title is empty".to_string()));
        }
        Ok(())
    }

    /// Validate an author.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEntry`] if the author is empty.
    pub fn validate_author(author: &str) -> Result<()> {
        if author.is_empty() {
            return Err(CatalogError::MalformedEntry("Author is empty".to_string()));
        }
        Ok(())
    }

    /// Validate an ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidIsbn`] unless the ISBN is exactly 13 digits.
    pub fn validate_isbn(isbn: &str) -> Result<()> {
        if !Self::is_isbn(isbn) {
            return Err(CatalogError::InvalidIsbn(format!(
                "ISBN must be exactly 13 digits, got: '{isbn}'"
            )));
        }
        Ok(())
    }

    /// Parse and validate a copies count.
    ///
    /// The text must be a base-10 integer in the signed 32-bit range (an
    /// optional leading sign is accepted) and strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::BookValidator;
    ///
    /// assert_eq!(BookValidator::parse_copies("3").unwrap(), 3);
    /// assert!(BookValidator::parse_copies("0").is_err());
    /// assert!(BookValidator::parse_copies("three").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEntry`] with distinct messages for a
    /// non-integer value and for a value that is not greater than zero.
    pub fn parse_copies(copies: &str) -> Result<u32> {
        let parsed: i32 = copies.parse().map_err(|_| {
            CatalogError::MalformedEntry(format!("Copies is not an integer: '{copies}'"))
        })?;

        if parsed <= 0 {
            return Err(CatalogError::MalformedEntry(format!(
                "Copies must be > 0, got: {parsed}"
            )));
        }

        // Positive i32 always fits.
        Ok(parsed.unsigned_abs())
    }
}
