//! The file-backed catalog store.
//!
//! A [`Catalog`] is the ordered list of books read from one catalog file.
//! After loading, the order is the file's line order. Every
//! [`Catalog::add`] re-sorts the whole list by lowercase title and rewrites
//! the file from scratch, so the list and the file stay identical.
//!
//! # Examples
//!
//! ```no_run
//! use booktrack::{parse_line, Catalog};
//!
//! let mut loaded = Catalog::open("data/books.txt")?;
//! for rejected in &loaded.rejected {
//!     eprintln!("line {}: {}", rejected.line_number, rejected.error);
//! }
//!
//! loaded.catalog.add(parse_line("Hobbit:Tolkien:1111111111111:5")?)?;
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use crate::error::{CatalogError, Result};
use crate::query::{self, IsbnLookup};
use crate::reader::CatalogReader;
use crate::record::Book;
use crate::writer::CatalogWriter;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A catalog line that failed validation during load.
#[derive(Debug)]
pub struct Rejected {
    /// 1-based line number in the catalog file.
    pub line_number: usize,
    /// The raw line.
    pub text: String,
    /// Why it was rejected.
    pub error: CatalogError,
}

/// Result of loading a catalog file.
#[derive(Debug)]
pub struct Loaded {
    /// The books that passed validation, in file order.
    pub catalog: Catalog,
    /// The lines that did not, in file order.
    pub rejected: Vec<Rejected>,
}

/// In-memory catalog backed by a text file.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from books already in memory.
    ///
    /// Nothing is read or written until [`Catalog::add`] or [`Catalog::save`].
    pub fn from_books(path: impl Into<PathBuf>, books: Vec<Book>) -> Self {
        Catalog {
            path: path.into(),
            books,
        }
    }

    /// Open a catalog file, creating it and any missing parent directories
    /// if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file or its directories cannot be
    /// created or read. Invalid lines are not errors; they are returned in
    /// [`Loaded::rejected`].
    pub fn open(path: impl AsRef<Path>) -> Result<Loaded> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            info!(path = %path.display(), "creating empty catalog file");
            File::create(path)?;
        }

        let file = File::open(path)?;
        Self::load(path, BufReader::new(file))
    }

    /// Load a catalog from any buffered source, associating it with `path`
    /// for later rewrites.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if reading fails.
    pub fn load<R: BufRead>(path: impl Into<PathBuf>, source: R) -> Result<Loaded> {
        let path = path.into();
        let mut reader = CatalogReader::new(source);
        let mut books = Vec::new();
        let mut rejected = Vec::new();

        while let Some(entry) = reader.read_entry()? {
            match entry.outcome {
                Ok(book) => books.push(book),
                Err(error) => {
                    debug!(line = entry.line_number, %error, "rejected catalog line");
                    rejected.push(Rejected {
                        line_number: entry.line_number,
                        text: entry.text,
                        error,
                    });
                },
            }
        }

        info!(
            path = %path.display(),
            lines = reader.lines_read(),
            blank = reader.blank_lines(),
            valid = books.len(),
            rejected = rejected.len(),
            "loaded catalog"
        );

        Ok(Loaded {
            catalog: Catalog { path, books },
            rejected,
        })
    }

    /// Add a book, re-sort by lowercase title, and rewrite the file.
    ///
    /// The sort is stable: books with equal lowercase titles keep their
    /// relative order, with the new book after existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be rewritten. The book
    /// stays in the in-memory list in that case.
    pub fn add(&mut self, book: Book) -> Result<()> {
        self.books.push(book);
        self.books.sort_by_cached_key(Book::sort_key);
        self.save()
    }

    /// Rewrite the backing file with one line per book in current order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = CatalogWriter::new(BufWriter::new(file));
        writer.write_all(&self.books)?;
        writer.finish()?;
        debug!(path = %self.path.display(), books = writer.books_written(), "rewrote catalog file");
        Ok(())
    }

    /// Books matching a title keyword, case-insensitively, in store order.
    #[must_use]
    pub fn search_title(&self, keyword: &str) -> Vec<&Book> {
        query::title_matches(&self.books, keyword)
    }

    /// The single book with `isbn`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateIsbn`] if the ISBN is not unique.
    pub fn find_isbn(&self, isbn: &str) -> Result<IsbnLookup<'_>> {
        query::find_by_isbn(&self.books, isbn)
    }

    /// Books in store order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_line;
    use std::io::Cursor;

    #[test]
    fn test_load_separates_rejected_lines() {
        let data = "Dune:Herbert:1234567890123:3\n\nBad:Line\nHobbit:Tolkien:1111111111111:0\n";
        let loaded = Catalog::load("unused.txt", Cursor::new(data)).unwrap();

        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.rejected.len(), 2);
        assert_eq!(loaded.rejected[0].line_number, 3);
        assert_eq!(loaded.rejected[0].text, "Bad:Line");
        assert_eq!(
            loaded.rejected[1].error.to_string(),
            "Copies must be > 0, got: 0"
        );
    }

    #[test]
    fn test_load_keeps_file_order() {
        let data = "zebra:A:1111111111111:1\nApple:B:2222222222222:1\n";
        let loaded = Catalog::load("unused.txt", Cursor::new(data)).unwrap();
        let titles: Vec<&str> = loaded.catalog.books().iter().map(Book::title).collect();
        assert_eq!(titles, vec!["zebra", "Apple"]);
    }

    #[test]
    fn test_open_creates_missing_file_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("books.txt");

        let loaded = Catalog::open(&path).unwrap();
        assert!(loaded.catalog.is_empty());
        assert!(loaded.rejected.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_add_sorts_case_insensitively_and_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.txt");
        fs::write(
            &path,
            "zebra:A:1111111111111:1\nApple:B:2222222222222:1\n\nbroken\n",
        )
        .unwrap();

        let mut catalog = Catalog::open(&path).unwrap().catalog;
        catalog
            .add(parse_line("mango:C:3333333333333:2").unwrap())
            .unwrap();

        let titles: Vec<&str> = catalog.books().iter().map(Book::title).collect();
        assert_eq!(titles, vec!["Apple", "mango", "zebra"]);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Apple:B:2222222222222:1\nmango:C:3333333333333:2\nzebra:A:1111111111111:1\n"
        );
    }

    #[test]
    fn test_add_is_stable_for_equal_titles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.txt");
        let mut catalog = Catalog::from_books(
            &path,
            vec![parse_line("DUNE:First:1111111111111:1").unwrap()],
        );
        catalog
            .add(parse_line("dune:Second:2222222222222:1").unwrap())
            .unwrap();

        let authors: Vec<&str> = catalog.books().iter().map(Book::author).collect();
        assert_eq!(authors, vec!["First", "Second"]);
    }

    #[test]
    fn test_search_delegates() {
        let catalog = Catalog::from_books(
            "unused.txt",
            vec![parse_line("Dune:Herbert:1234567890123:3").unwrap()],
        );
        assert_eq!(catalog.search_title("UN").len(), 1);
        assert!(matches!(
            catalog.find_isbn("1234567890123").unwrap(),
            IsbnLookup::Found(_)
        ));
    }
}
