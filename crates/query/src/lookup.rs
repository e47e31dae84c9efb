//! Single-record lookups.

use crate::models::{Author, Book};
use tracing::instrument;

/// Returns the first book whose id equals `id`, or `None`.
#[instrument(level = "trace", skip(books), fields(total_books = books.len()))]
pub fn book_by_id(id: u64, books: &[Book]) -> Option<&Book> {
    let book = books.iter().find(|book| book.id == id);
    if book.is_none() {
        tracing::trace!("No book with matching id");
    }
    book
}

/// Returns the first author whose name matches `name` case-insensitively, or
/// `None`.
///
/// Only case is folded; surrounding whitespace and punctuation must match
/// exactly. When several authors share a name (ignoring case), the first one
/// in `authors` wins.
#[instrument(level = "trace", skip(authors), fields(total_authors = authors.len()))]
pub fn author_by_name<'a>(name: &str, authors: &'a [Author]) -> Option<&'a Author> {
    let author = authors.iter().find(|author| author.matches_name(name));
    if author.is_none() {
        tracing::trace!("No author with matching name");
    }
    author
}
