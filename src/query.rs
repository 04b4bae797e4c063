//! Search over an in-memory list of books.
//!
//! Both searches are linear scans that return matches in the order the books
//! are held.
//!
//! - [`title_matches`] — case-insensitive substring match on the title
//! - [`find_by_isbn`] — exact ISBN match, failing when the ISBN is not unique

use crate::error::{CatalogError, Result};
use crate::record::Book;

/// Outcome of a successful ISBN lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnLookup<'a> {
    /// No book has the ISBN.
    NotFound,
    /// Exactly one book has the ISBN.
    Found(&'a Book),
}

/// Books whose title contains `keyword`, ignoring case.
///
/// An empty keyword matches every book.
///
/// # Examples
///
/// ```
/// use booktrack::{query::title_matches, Book};
///
/// let books = vec![
///     Book::new("Dune", "Herbert", "1234567890123", 3)?,
///     Book::new("Dune Messiah", "Herbert", "1234567890124", 1)?,
///     Book::new("Hobbit", "Tolkien", "1111111111111", 5)?,
/// ];
/// assert_eq!(title_matches(&books, "DUNE").len(), 2);
/// # Ok::<(), booktrack::CatalogError>(())
/// ```
#[must_use]
pub fn title_matches<'a>(books: &'a [Book], keyword: &str) -> Vec<&'a Book> {
    let needle = keyword.to_lowercase();
    books
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&needle))
        .collect()
}

/// All books whose ISBN equals `isbn` exactly.
#[must_use]
pub fn isbn_matches<'a>(books: &'a [Book], isbn: &str) -> Vec<&'a Book> {
    books.iter().filter(|book| book.isbn() == isbn).collect()
}

/// Look up the single book with `isbn`.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateIsbn`] if more than one book has the ISBN.
pub fn find_by_isbn<'a>(books: &'a [Book], isbn: &str) -> Result<IsbnLookup<'a>> {
    match isbn_matches(books, isbn).as_slice() {
        [] => Ok(IsbnLookup::NotFound),
        [book] => Ok(IsbnLookup::Found(*book)),
        _ => Err(CatalogError::DuplicateIsbn(format!(
            "More than one book found with ISBN: {isbn}"
        ))),
    }
}
