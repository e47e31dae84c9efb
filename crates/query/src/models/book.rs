use super::AuthorRef;

/// A single book in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    /// Unique book id
    pub id: u64,
    /// Book title
    pub title: String,
    /// Category label (free-form, compared case-sensitively)
    pub color: String,
    /// Credited authors, in the order they appear on the cover
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Vec<AuthorRef>,
}
impl Book {
    pub fn new<A: Into<AuthorRef>>(
        id: u64,
        title: impl Into<String>,
        color: impl Into<String>,
        authors: impl IntoIterator<Item = A>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }

    /// Names of the credited authors, in order.
    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().map(|author| author.name.as_str())
    }
}
