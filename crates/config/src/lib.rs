//! Layered configuration for locating shelf datasets.
//!
//! Sources are merged in order, later sources overriding earlier ones:
//!
//! 1. Built-in defaults (`authors.json` and `books.json` in the working directory).
//! 2. The platform configuration file, `shelf.toml` inside the project config
//!    directory reported by [`directories::ProjectDirs`], if it exists.
//! 3. An explicitly requested file (TOML, JSON or YAML, chosen by extension).
//! 4. Environment variables prefixed with `SHELF_`, using `__` to separate
//!    nested keys (`SHELF_DATA__ROOT=/srv/shelf`).
//!
//! ```toml
//! [data]
//! root = "/srv/shelf"
//! authors = "authors.json"
//! books = "books.json"
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SHELF_";
/// File name looked up inside the platform configuration directory.
pub const CONFIG_FILE_NAME: &str = "shelf.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
}

/// Where the author and book datasets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory that relative dataset paths are resolved against. When unset,
    /// relative paths are left relative to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Authors dataset (JSON array of authors)
    pub authors: PathBuf,
    /// Books dataset (JSON array of books)
    pub books: PathBuf,
}
impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: None,
            authors: PathBuf::from("authors.json"),
            books: PathBuf::from("books.json"),
        }
    }
}
impl DataConfig {
    pub fn new(authors: impl Into<PathBuf>, books: impl Into<PathBuf>) -> Self {
        Self { root: None, authors: authors.into(), books: books.into() }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Path of the authors dataset, joined onto `root` when relative.
    pub fn authors_path(&self) -> PathBuf {
        self.resolve(&self.authors)
    }

    /// Path of the books dataset, joined onto `root` when relative.
    pub fn books_path(&self) -> PathBuf {
        self.resolve(&self.books)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Config {
    /// Loads configuration from every source, optionally including an explicit
    /// file. See the [crate documentation](crate) for the merge order.
    ///
    /// # Errors
    /// - [`ErrorKind::NotFound`] if `file` is given but doesn't exist.
    /// - [`ErrorKind::UnsupportedFormat`] if `file` isn't TOML, JSON or YAML.
    /// - [`ErrorKind::Invalid`] if the merged values don't fit [`Config`].
    #[instrument(skip_all, fields(file = ?file))]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(file)?)
    }

    /// Builds the layered [`Figment`] without extracting it, for callers that
    /// want to add their own providers on top.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        layered(platform_config_file(), file)
    }

    /// Extracts a [`Config`] from an arbitrary [`Figment`].
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Invalid)?;
        tracing::debug!(
            authors = %config.data.authors_path().display(),
            books = %config.data.books_path().display(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// `shelf.toml` in the platform configuration directory, if the platform has one.
fn platform_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shelf").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn layered(platform: Option<PathBuf>, file: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(platform) = platform.filter(|p| p.is_file()) {
        tracing::trace!(path = %platform.display(), "Merging platform configuration file");
        figment = figment.merge(Toml::file(platform));
    }
    if let Some(file) = file {
        if !file.is_file() {
            exn::bail!(ErrorKind::NotFound(file.to_path_buf()));
        }
        tracing::trace!(path = %file.display(), "Merging configuration file");
        let extension = file.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
        figment = match extension.as_deref() {
            Some("toml") => figment.merge(Toml::file(file)),
            Some("json") => figment.merge(Json::file(file)),
            Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(file.to_path_buf())),
        };
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}
