//! Title resolution across the author/book relationship.
//!
//! Authors list book ids and books list author names, and neither side is
//! checked against the other. Ids and names that don't resolve are skipped.

use crate::models::{Author, Book};
use tracing::instrument;

/// Titles of every book listed under the author called `name`
/// (case-insensitive), in the order the author lists them.
///
/// If several authors match, the **last** match in `authors` decides which id
/// list is used. An id with no matching book is skipped, and an id shared by
/// several books yields each of their titles in `books` order.
#[instrument(level = "trace", skip(authors, books), fields(total_authors = authors.len(), total_books = books.len()))]
pub fn titles_by_author_name<'b>(name: &str, authors: &[Author], books: &'b [Book]) -> Vec<&'b str> {
    let Some(author) = authors.iter().rev().find(|author| author.matches_name(name)) else {
        tracing::trace!("No author with matching name");
        return Vec::new();
    };
    author
        .books
        .iter()
        .flat_map(|id| books.iter().filter(move |book| book.id == *id))
        .map(|book| book.title.as_str())
        .collect()
}

/// Titles of every book written by any author of the book `id`, sorted
/// ascending.
///
/// Each author credited on the book contributes their full
/// [`titles_by_author_name`] list, so a book with two credited authors shows
/// up twice. Duplicates are kept on purpose; see [`unique_related_books`].
/// Every book carrying `id` is consulted, not just the first.
///
/// Titles are compared as `str`, i.e. by Unicode scalar value. That matches
/// UTF-16 code-unit order (as used by JavaScript's default `sort()`) except
/// for titles containing characters outside the Basic Multilingual Plane,
/// which can sort differently relative to characters in U+E000..=U+FFFF.
#[instrument(level = "trace", skip(authors, books), fields(total_authors = authors.len(), total_books = books.len()))]
pub fn related_books<'b>(id: u64, authors: &[Author], books: &'b [Book]) -> Vec<&'b str> {
    let mut titles: Vec<&str> = books
        .iter()
        .filter(|book| book.id == id)
        .flat_map(|book| book.author_names())
        .flat_map(|name| titles_by_author_name(name, authors, books))
        .collect();
    titles.sort_unstable();
    tracing::debug!(related = titles.len(), "Resolved related books");
    titles
}

/// Same as [`related_books`], with repeated titles removed.
#[instrument(level = "trace", skip(authors, books), fields(total_authors = authors.len(), total_books = books.len()))]
pub fn unique_related_books<'b>(id: u64, authors: &[Author], books: &'b [Book]) -> Vec<&'b str> {
    let mut titles = related_books(id, authors, books);
    titles.dedup();
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn authors() -> Vec<Author> {
        vec![
            Author::new("Neil Gaiman", [46, 47, 48]),
            Author::new("Terry Pratchett", [46, 49, 50]),
            Author::new("Lauren Beukes", [37, 38]),
            Author::new("Ghost Writer", [404]),
        ]
    }

    #[fixture]
    fn books() -> Vec<Book> {
        vec![
            Book::new(37, "The Shining Girls", "black", ["Lauren Beukes"]),
            Book::new(38, "Zoo City", "green", ["Lauren Beukes"]),
            Book::new(46, "Good Omens", "black", ["Terry Pratchett", "Neil Gaiman"]),
            Book::new(47, "Neverwhere", "blue", ["Neil Gaiman"]),
            Book::new(48, "Coraline", "black", ["Neil Gaiman"]),
            Book::new(49, "The Color of Magic", "orange", ["Terry Pratchett"]),
            Book::new(50, "The Hogfather", "white", ["Terry Pratchett"]),
            Book::new(51, "Unclaimed", "grey", ["Nobody We Know"]),
        ]
    }

    #[rstest]
    #[case("Lauren Beukes", vec!["The Shining Girls", "Zoo City"])]
    #[case("lauren beukes", vec!["The Shining Girls", "Zoo City"])]
    #[case("Neil Gaiman", vec!["Good Omens", "Neverwhere", "Coraline"])]
    #[case("Ghost Writer", vec![])]
    #[case("Nobody We Know", vec![])]
    #[case("", vec![])]
    fn test_titles_by_author_name(
        authors: Vec<Author>,
        books: Vec<Book>,
        #[case] name: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(titles_by_author_name(name, &authors, &books), expected);
    }

    #[test]
    fn test_titles_by_author_name_skips_missing_ids() {
        let authors = vec![Author::new("Ann", [1, 2, 3])];
        let books = vec![Book::new(1, "One", "red", ["Ann"]), Book::new(3, "Three", "red", ["Ann"])];
        assert_eq!(titles_by_author_name("Ann", &authors, &books), vec!["One", "Three"]);
    }

    #[test]
    fn test_titles_by_author_name_follows_author_order() {
        let authors = vec![Author::new("Ann", [3, 1])];
        let books = vec![Book::new(1, "One", "red", ["Ann"]), Book::new(3, "Three", "red", ["Ann"])];
        assert_eq!(titles_by_author_name("Ann", &authors, &books), vec!["Three", "One"]);
    }

    #[test]
    fn test_titles_by_author_name_last_match_wins() {
        let authors = vec![Author::new("Ann", [1]), Author::new("ANN", [2])];
        let books = vec![Book::new(1, "One", "red", ["Ann"]), Book::new(2, "Two", "red", ["ANN"])];
        assert_eq!(titles_by_author_name("ann", &authors, &books), vec!["Two"]);
    }

    #[test]
    fn test_titles_by_author_name_repeats_shared_ids() {
        let authors = vec![Author::new("Ann", [1])];
        let books = vec![Book::new(1, "One", "red", ["Ann"]), Book::new(1, "Uno", "red", ["Ann"])];
        assert_eq!(titles_by_author_name("Ann", &authors, &books), vec!["One", "Uno"]);
    }

    #[rstest]
    #[case("NEIL GAIMAN", true)]
    #[case("neil gaiman", true)]
    #[case("Neil Gaiman ", false)]
    #[case("Néil Gaiman", false)]
    fn test_name_matching_agrees_with_author_lookup(
        authors: Vec<Author>,
        books: Vec<Book>,
        #[case] name: &str,
        #[case] found: bool,
    ) {
        let author = crate::author_by_name(name, &authors);
        assert_eq!(author.is_some(), found);
        assert_eq!(author.is_some_and(|author| author.matches_name(name)), found);
        let titles = titles_by_author_name(name, &authors, &books);
        assert_eq!(!titles.is_empty(), found);
    }

    #[test]
    fn test_related_books_orders_by_scalar_value() {
        // U+1F600 sorts after U+FB01 here; UTF-16 code units would put it first.
        let authors = vec![Author::new("A", [1, 2])];
        let books = vec![Book::new(1, "\u{1F600}", "red", ["A"]), Book::new(2, "\u{FB01}", "red", ["A"])];
        assert_eq!(related_books(1, &authors, &books), vec!["\u{FB01}", "\u{1F600}"]);
    }

    #[rstest]
    fn test_related_books_single_author(authors: Vec<Author>, books: Vec<Book>) {
        assert_eq!(related_books(37, &authors, &books), vec!["The Shining Girls", "Zoo City"]);
    }

    #[rstest]
    fn test_related_books_multiple_authors_keeps_duplicates(authors: Vec<Author>, books: Vec<Book>) {
        assert_eq!(
            related_books(46, &authors, &books),
            vec!["Coraline", "Good Omens", "Good Omens", "Neverwhere", "The Color of Magic", "The Hogfather"]
        );
    }

    #[test]
    fn test_related_books_sorts_concatenation() {
        let authors = vec![Author::new("A", [1, 2]), Author::new("B", [3])];
        let books = vec![
            Book::new(1, "Z", "red", ["A"]),
            Book::new(2, "A", "red", ["A"]),
            Book::new(3, "M", "red", ["B"]),
            Book::new(4, "Joint", "red", ["A", "B"]),
        ];
        // Book 4 isn't on either author's list, so it doesn't show up itself.
        assert_eq!(related_books(4, &authors, &books), vec!["A", "M", "Z"]);
    }

    #[rstest]
    #[case(404)]
    #[case(51)]
    fn test_related_books_unresolved(authors: Vec<Author>, books: Vec<Book>, #[case] id: u64) {
        assert!(related_books(id, &authors, &books).is_empty());
    }

    #[rstest]
    fn test_unique_related_books(authors: Vec<Author>, books: Vec<Book>) {
        let titles = unique_related_books(46, &authors, &books);
        assert_eq!(titles, vec!["Coraline", "Good Omens", "Neverwhere", "The Color of Magic", "The Hogfather"]);
        assert!(titles.is_sorted());
    }

    #[rstest]
    fn test_related_books_is_repeatable(authors: Vec<Author>, books: Vec<Book>) {
        assert_eq!(related_books(46, &authors, &books), related_books(46, &authors, &books));
    }
}
