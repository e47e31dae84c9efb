mod author;
mod book;
mod count;

pub use self::author::{Author, AuthorRef};
pub use self::book::Book;
pub use self::count::BookCount;
