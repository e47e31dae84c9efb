//! Loading of the author and book datasets.
//!
//! Datasets are plain JSON arrays, read once and then treated as immutable:
//!
//! ```json
//! [{ "name": "Neil Gaiman", "books": [46, 47] }]
//! [{ "id": 46, "title": "Good Omens", "color": "black", "authors": [{ "name": "Neil Gaiman" }] }]
//! ```
//!
//! Records aren't validated beyond what deserialization needs: unknown fields
//! are ignored, and ids or names that don't resolve are left for the queries
//! to skip. A loaded [`Dataset`] is a [`Catalog`], so every query can be run
//! straight off it.
//!
//! ```
//! use shelf_dataset::{Catalog, Dataset};
//!
//! let dataset = Dataset::from_json(
//!     r#"[{"name": "Ann", "books": [1]}]"#,
//!     r#"[{"id": 1, "title": "Joint Venture", "color": "red", "authors": [{"name": "Ann"}]}]"#,
//! )
//! .unwrap();
//! assert_eq!(dataset.most_prolific_author(), "Ann");
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use shelf_config::DataConfig;
use shelf_query::models::{Author, Book};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::instrument;

pub use shelf_query::{Catalog, models};

/// An immutable pair of author and book collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    authors: Vec<Author>,
    books: Vec<Book>,
}
impl Dataset {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self { authors, books }
    }

    /// Parses both datasets from JSON strings.
    ///
    /// # Errors
    /// [`ErrorKind::Parse`] naming whichever dataset is malformed (authors are
    /// checked first).
    #[instrument(skip_all, fields(authors_size = authors.len(), books_size = books.len()))]
    pub fn from_json(authors: &str, books: &str) -> Result<Self> {
        let authors = serde_json::from_str(authors).or_raise(|| ErrorKind::Parse("authors"))?;
        let books = serde_json::from_str(books).or_raise(|| ErrorKind::Parse("books"))?;
        Ok(Self::loaded(authors, books))
    }

    /// Parses both datasets from readers. Readers are buffered internally.
    #[instrument(skip_all)]
    pub fn from_readers(authors: impl Read, books: impl Read) -> Result<Self> {
        let authors = serde_json::from_reader(BufReader::new(authors)).or_raise(|| ErrorKind::Parse("authors"))?;
        let books = serde_json::from_reader(BufReader::new(books)).or_raise(|| ErrorKind::Parse("books"))?;
        Ok(Self::loaded(authors, books))
    }

    /// Reads and parses both dataset files.
    ///
    /// # Errors
    /// - [`ErrorKind::Read`] if either file can't be read.
    /// - [`ErrorKind::Parse`] if either file isn't a valid dataset.
    #[instrument(skip_all, fields(authors = %authors.as_ref().display(), books = %books.as_ref().display()))]
    pub fn open(authors: impl AsRef<Path>, books: impl AsRef<Path>) -> Result<Self> {
        let (authors, books) = (authors.as_ref(), books.as_ref());
        let authors = std::fs::read_to_string(authors).or_raise(|| ErrorKind::Read(authors.to_path_buf()))?;
        let books = std::fs::read_to_string(books).or_raise(|| ErrorKind::Read(books.to_path_buf()))?;
        Self::from_json(&authors, &books)
    }

    /// Reads both dataset files from the locations in `config`.
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        Self::open(config.authors_path(), config.books_path())
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    fn loaded(authors: Vec<Author>, books: Vec<Book>) -> Self {
        tracing::debug!(authors = authors.len(), books = books.len(), "Dataset loaded");
        Self::new(authors, books)
    }
}
impl Catalog for Dataset {
    fn authors(&self) -> &[Author] {
        &self.authors
    }
    fn books(&self) -> &[Book] {
        &self.books
    }
}
