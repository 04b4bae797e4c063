//! Classification of the operation argument.
//!
//! The second command-line argument selects what a run does, purely from its
//! shape. Checks are order-sensitive:
//!
//! 1. exactly 13 ASCII digits → [`Operation::IsbnSearch`]
//! 2. exactly three `:` characters anywhere → [`Operation::NewRecord`]
//! 3. anything else → [`Operation::TitleSearch`]
//!
//! A record argument with the wrong number of colons is therefore treated as
//! a title keyword, not rejected as a malformed record.
//!
//! # Examples
//!
//! ```
//! use booktrack::{classify, Operation};
//!
//! assert_eq!(classify("1234567890123"), Operation::IsbnSearch("1234567890123".into()));
//! assert_eq!(classify("T:A:1234567890123:2"), Operation::NewRecord("T:A:1234567890123:2".into()));
//! assert_eq!(classify("dune"), Operation::TitleSearch("dune".into()));
//! ```

use crate::validation::BookValidator;

/// What a run does, as inferred from the operation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Exact-match lookup of a 13-digit ISBN.
    IsbnSearch(String),
    /// Insert a `Title:Author:ISBN:Copies` record.
    NewRecord(String),
    /// Case-insensitive substring search over titles.
    TitleSearch(String),
}

impl Operation {
    /// The raw argument this operation was classified from.
    #[must_use]
    pub fn argument(&self) -> &str {
        match self {
            Operation::IsbnSearch(arg) | Operation::NewRecord(arg) | Operation::TitleSearch(arg) => {
                arg
            },
        }
    }

    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::IsbnSearch(_) => "isbn-search",
            Operation::NewRecord(_) => "new-record",
            Operation::TitleSearch(_) => "title-search",
        }
    }
}

/// Number of `:` characters that marks a new-record argument.
pub const NEW_RECORD_SEPARATORS: usize = 3;

/// Classify an operation argument.
#[must_use]
pub fn classify(arg: &str) -> Operation {
    if is_isbn(arg) {
        Operation::IsbnSearch(arg.to_string())
    } else if is_new_record(arg) {
        Operation::NewRecord(arg.to_string())
    } else {
        Operation::TitleSearch(arg.to_string())
    }
}

/// True if the argument is exactly 13 ASCII digits.
#[must_use]
pub fn is_isbn(arg: &str) -> bool {
    BookValidator::is_isbn(arg)
}

/// True if the argument contains exactly three `:` characters.
///
/// Field contents are not inspected.
#[must_use]
pub fn is_new_record(arg: &str) -> bool {
    memchr::memchr_iter(b':', arg.as_bytes()).count() == NEW_RECORD_SEPARATORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_checked_first() {
        assert_eq!(
            classify("9999999999999"),
            Operation::IsbnSearch("9999999999999".to_string())
        );
    }

    #[test]
    fn test_new_record_counts_colons_only() {
        // Invalid contents still classify as a new record.
        assert_eq!(classify(":::").name(), "new-record");
        assert_eq!(classify("a:b:notanisbn:zero").name(), "new-record");
    }

    #[test]
    fn test_wrong_colon_count_falls_through_to_title_search() {
        assert_eq!(
            classify("Dune:Herbert:1234567890123"),
            Operation::TitleSearch("Dune:Herbert:1234567890123".to_string())
        );
        assert_eq!(classify("a:b:c:d:e").name(), "title-search");
    }

    #[test]
    fn test_near_isbn_is_title_search() {
        assert_eq!(classify("123456789012").name(), "title-search");
        assert_eq!(classify("12345678901234").name(), "title-search");
        assert_eq!(classify("").name(), "title-search");
    }

    #[test]
    fn test_argument_round_trips() {
        let op = classify("The Hobbit");
        assert_eq!(op.argument(), "The Hobbit");
    }
}
