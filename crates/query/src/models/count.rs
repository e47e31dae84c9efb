/// An author's name paired with the number of book ids listed for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookCount {
    pub author: String,
    pub book_count: usize,
}
impl BookCount {
    pub fn new(author: impl Into<String>, book_count: usize) -> Self {
        Self { author: author.into(), book_count }
    }
}
