//! Group-by and aggregation queries.

use crate::models::{Author, Book, BookCount};
use indexmap::IndexMap;
use tracing::instrument;

/// One [`BookCount`] per author, in the same order as `authors`.
///
/// The count is the raw length of each author's id list: duplicate ids are
/// counted twice and ids are not checked against any book collection.
#[instrument(level = "trace", skip_all, fields(total_authors = authors.len()))]
pub fn book_counts_by_author(authors: &[Author]) -> Vec<BookCount> {
    authors.iter().map(|author| BookCount::new(&author.name, author.book_count())).collect()
}

/// Groups book titles by their exact (case-sensitive) color.
///
/// Colors are keyed in the order they are first seen, and within each group
/// titles keep the order in which their books appear in `books`.
#[instrument(level = "trace", skip_all, fields(total_books = books.len()))]
pub fn books_by_color(books: &[Book]) -> IndexMap<&str, Vec<&str>> {
    let mut colors: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for book in books {
        colors.entry(book.color.as_str()).or_default().push(book.title.as_str());
    }
    tracing::trace!(groups = colors.len(), "Grouped books by color");
    colors
}

/// Name of the author with the most listed book ids.
///
/// Scans in order and only replaces the current leader on a strictly greater
/// count, starting from a baseline of zero. Ties therefore go to the earliest
/// author, and an empty slice (or one where nobody has any books) yields `""`.
#[instrument(level = "trace", skip_all, fields(total_authors = authors.len()))]
pub fn most_prolific_author(authors: &[Author]) -> &str {
    let mut most = 0;
    let mut name = "";
    for author in authors {
        if author.book_count() > most {
            most = author.book_count();
            name = author.name.as_str();
        }
    }
    name
}

/// Meant to name the author who co-authored the most books.
///
/// It does not: this ranks authors by their total listed book count, exactly
/// like [`most_prolific_author`], and always returns the same answer. The
/// behaviour is kept as-is until someone decides what "friendliest" should
/// measure (shared books? distinct collaborators?).
#[instrument(level = "trace", skip_all, fields(total_authors = authors.len()))]
pub fn friendliest_author(authors: &[Author]) -> &str {
    most_prolific_author(authors)
}
