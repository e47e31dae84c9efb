use crate::models::{Author, Book, BookCount};
use indexmap::IndexMap;

/// Read-only access to an author collection and a book collection.
///
/// This is the seam for injecting a data source into code that runs queries:
/// implementors only supply the two slices, and every query is available as a
/// provided method that forwards them to the matching free function in this
/// crate. Results borrow from the catalog.
///
/// # Examples
///
/// ```
/// use shelf_query::Catalog;
/// use shelf_query::models::{Author, Book};
///
/// let authors = vec![Author::new("Ann", [1, 2]), Author::new("Bob", [1])];
/// let books = vec![
///     Book::new(1, "Joint Venture", "red", ["Ann", "Bob"]),
///     Book::new(2, "Solo Effort", "blue", ["Ann"]),
/// ];
/// let catalog = (authors.as_slice(), books.as_slice());
///
/// assert_eq!(catalog.most_prolific_author(), "Ann");
/// assert_eq!(catalog.related_books(1), vec!["Joint Venture", "Joint Venture", "Solo Effort"]);
/// ```
pub trait Catalog {
    fn authors(&self) -> &[Author];
    fn books(&self) -> &[Book];

    /// See [`crate::book_by_id`].
    fn book_by_id(&self, id: u64) -> Option<&Book> {
        crate::book_by_id(id, self.books())
    }
    /// See [`crate::author_by_name`].
    fn author_by_name(&self, name: &str) -> Option<&Author> {
        crate::author_by_name(name, self.authors())
    }
    /// See [`crate::book_counts_by_author`].
    fn book_counts_by_author(&self) -> Vec<BookCount> {
        crate::book_counts_by_author(self.authors())
    }
    /// See [`crate::books_by_color`].
    fn books_by_color(&self) -> IndexMap<&str, Vec<&str>> {
        crate::books_by_color(self.books())
    }
    /// See [`crate::titles_by_author_name`].
    fn titles_by_author_name(&self, name: &str) -> Vec<&str> {
        crate::titles_by_author_name(name, self.authors(), self.books())
    }
    /// See [`crate::most_prolific_author`].
    fn most_prolific_author(&self) -> &str {
        crate::most_prolific_author(self.authors())
    }
    /// See [`crate::related_books`].
    fn related_books(&self, id: u64) -> Vec<&str> {
        crate::related_books(id, self.authors(), self.books())
    }
    /// See [`crate::unique_related_books`].
    fn unique_related_books(&self, id: u64) -> Vec<&str> {
        crate::unique_related_books(id, self.authors(), self.books())
    }
    /// See [`crate::friendliest_author`].
    fn friendliest_author(&self) -> &str {
        crate::friendliest_author(self.authors())
    }
}

impl Catalog for (&[Author], &[Book]) {
    fn authors(&self) -> &[Author] {
        self.0
    }
    fn books(&self) -> &[Book] {
        self.1
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn authors(&self) -> &[Author] {
        (**self).authors()
    }
    fn books(&self) -> &[Book] {
        (**self).books()
    }
}
