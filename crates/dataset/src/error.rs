//! Dataset Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction. Loading is the only fallible part of the workspace; the
//! queries themselves never fail.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A dataset error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A dataset file is missing or unreadable.
    #[display("unable to read dataset: {}", _0.display())]
    Read(#[error(not(source))] PathBuf),
    /// A dataset isn't a JSON array of the expected records.
    #[display("malformed {_0} dataset")]
    Parse(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A file can appear (or become readable) later; malformed JSON won't fix itself.
        matches!(self, Self::Read(_))
    }
}
