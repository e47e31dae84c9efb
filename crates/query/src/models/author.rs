/// A person credited with one or more books.
///
/// The `name` is the human-readable key for an author and is always compared
/// case-insensitively (see [`Author::matches_name`]). Nothing guarantees that
/// every id in `books` resolves to a [`Book`](super::Book); queries simply skip
/// the ones that don't.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    /// Display name, also used as the lookup key
    pub name: String,
    /// Ids of the books credited to this author, in catalogue order
    #[cfg_attr(feature = "serde", serde(default))]
    pub books: Vec<u64>,
}
impl Author {
    pub fn new(name: impl Into<String>, books: impl IntoIterator<Item = u64>) -> Self {
        Self { name: name.into(), books: books.into_iter().collect() }
    }

    /// Number of book ids listed for this author. Not deduplicated, and not
    /// checked against any book collection.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Case-insensitive comparison of this author's name against `name`.
    pub fn matches_name(&self, name: impl AsRef<str>) -> bool {
        name_key(&self.name) == name_key(name.as_ref())
    }
}

/// The minimal reference to an author embedded in a [`Book`](super::Book).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorRef {
    /// Author name as written on the book
    pub name: String,
}
impl AuthorRef {
    /// Case-insensitive comparison of the referenced name against `name`.
    pub fn matches_name(&self, name: impl AsRef<str>) -> bool {
        name_key(&self.name) == name_key(name.as_ref())
    }
}
impl From<String> for AuthorRef {
    fn from(name: String) -> Self {
        Self { name }
    }
}
impl From<&str> for AuthorRef {
    fn from(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}
impl AsRef<str> for AuthorRef {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Comparison key for author names.
///
/// Plain Unicode lower-casing: no trimming, no locale rules, so the same two
/// names compare the same way on every platform.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}
