//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog operations,
//! the [`ErrorKind`] enumeration used when reporting them, and the
//! [`Result`] convenience type.

use std::fmt;
use thiserror::Error;

/// Error type for all catalog operations.
///
/// Each variant carries the human-readable message shown to the user and
/// written to the error log. Use [`CatalogError::kind`] to get the variant's
/// [`ErrorKind`] without matching on the payload.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record has the wrong number of fields, an empty title or author,
    /// or an invalid copies value.
    #[error("{0}")]
    MalformedEntry(String),

    /// The ISBN field is not exactly 13 decimal digits.
    #[error("{0}")]
    InvalidIsbn(String),

    /// More than one catalog record shares the requested ISBN.
    #[error("{0}")]
    DuplicateIsbn(String),

    /// The catalog path does not end in `.txt`.
    #[error("{0}")]
    InvalidFileName(String),

    /// Fewer than two command-line arguments were supplied.
    #[error("{0}")]
    InsufficientArguments(String),

    /// IO error from the catalog file.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MalformedEntry(_) => ErrorKind::MalformedEntry,
            CatalogError::InvalidIsbn(_) => ErrorKind::InvalidIsbn,
            CatalogError::DuplicateIsbn(_) => ErrorKind::DuplicateIsbn,
            CatalogError::InvalidFileName(_) => ErrorKind::InvalidFileName,
            CatalogError::InsufficientArguments(_) => ErrorKind::InsufficientArguments,
            CatalogError::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error aborts the run before any catalog work happens.
    ///
    /// Record-level problems (malformed entries, bad or duplicate ISBNs) are
    /// recoverable: they are logged and counted, and the run continues.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InsufficientArguments | ErrorKind::InvalidFileName | ErrorKind::Io
        )
    }
}

/// The kind of a [`CatalogError`].
///
/// The `Display` form is the name written into the error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CatalogError::MalformedEntry`].
    MalformedEntry,
    /// See [`CatalogError::InvalidIsbn`].
    InvalidIsbn,
    /// See [`CatalogError::DuplicateIsbn`].
    DuplicateIsbn,
    /// See [`CatalogError::InvalidFileName`].
    InvalidFileName,
    /// See [`CatalogError::InsufficientArguments`].
    InsufficientArguments,
    /// See [`CatalogError::Io`].
    Io,
}

impl ErrorKind {
    /// Name of the kind as it appears in the error log.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedEntry => "MalformedEntry",
            ErrorKind::InvalidIsbn => "InvalidISBN",
            ErrorKind::DuplicateIsbn => "DuplicateISBN",
            ErrorKind::InvalidFileName => "InvalidFileName",
            ErrorKind::InsufficientArguments => "InsufficientArguments",
            ErrorKind::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = CatalogError::MalformedEntry("Title is empty".to_string());
        assert_eq!(err.to_string(), "Title is empty");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(
            CatalogError::InvalidIsbn(String::new()).kind().to_string(),
            "InvalidISBN"
        );
        assert_eq!(
            CatalogError::DuplicateIsbn(String::new()).kind().to_string(),
            "DuplicateISBN"
        );
        assert_eq!(ErrorKind::MalformedEntry.as_str(), "MalformedEntry");
    }

    #[test]
    fn test_fatal_classification() {
        assert!(CatalogError::InsufficientArguments(String::new()).is_fatal());
        assert!(CatalogError::InvalidFileName(String::new()).is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(CatalogError::from(io).is_fatal());
        assert!(!CatalogError::MalformedEntry(String::new()).is_fatal());
        assert!(!CatalogError::InvalidIsbn(String::new()).is_fatal());
        assert!(!CatalogError::DuplicateIsbn(String::new()).is_fatal());
    }
}
