//! Pure queries over an author collection and a book collection.
//!
//! Every query takes the collections it needs as explicit arguments, never
//! mutates them, and never fails: a miss is reported as `None`, an empty
//! [`Vec`], or an empty name. Results borrow from the inputs wherever they can.
//!
//! # Relationships
//! Authors and books reference each other loosely:
//! - an [`Author`](models::Author) lists book **ids**, and
//! - a [`Book`](models::Book) lists author **names**.
//!
//! Neither side is checked against the other, so queries tolerate dangling
//! ids and names by skipping them. Author names are matched
//! case-insensitively everywhere.
//!
//! # Example
//!
//! ```
//! use shelf_query::models::{Author, Book};
//!
//! let authors = vec![Author::new("Ann", [1, 2]), Author::new("Bob", [1])];
//! let books = vec![
//!     Book::new(1, "Joint Venture", "red", ["Ann", "Bob"]),
//!     Book::new(2, "Solo Effort", "red", ["Ann"]),
//! ];
//!
//! assert_eq!(shelf_query::most_prolific_author(&authors), "Ann");
//! assert_eq!(shelf_query::titles_by_author_name("ann", &authors, &books), vec!["Joint Venture", "Solo Effort"]);
//! assert_eq!(shelf_query::books_by_color(&books)["red"].len(), 2);
//! ```
//!
//! For code that would rather be handed a data source than two slices, see
//! [`Catalog`].

mod aggregate;
mod catalog;
mod lookup;
pub mod models;
mod titles;

pub use crate::aggregate::{book_counts_by_author, books_by_color, friendliest_author, most_prolific_author};
pub use crate::catalog::Catalog;
pub use crate::lookup::{author_by_name, book_by_id};
pub use crate::titles::{related_books, titles_by_author_name, unique_related_books};
