//! Database configuration and builder.

use std::path::PathBuf;

use crate::database::Database;
use crate::error::Result;

/// Configuration options for opening a database.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the database file. Ignored for in-memory databases.
    pub path: PathBuf,
    /// Whether the database lives in memory only.
    pub in_memory: bool,
    /// Storage cache size in bytes. `None` uses the backend default.
    pub cache_size: Option<usize>,
}

impl Config {
    /// Create a configuration for a file-backed database.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            in_memory: false,
            cache_size: None,
        }
    }

    /// Create a configuration for an in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            in_memory: true,
            cache_size: None,
        }
    }
}

/// Builder for opening a [`Database`] with custom configuration.
///
/// # Examples
///
/// ```ignore
/// use trellisdb::DatabaseBuilder;
///
/// let db = DatabaseBuilder::new()
///     .path("catalog.trellis")
///     .cache_size(64 * 1024 * 1024)
///     .open()?;
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseBuilder {
    config: Config,
}

impl DatabaseBuilder {
    /// Start building a file-backed database configuration.
    ///
    /// A path must be set with [`path`](Self::path) before calling
    /// [`open`](Self::open).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::new(PathBuf::new()),
        }
    }

    /// Start building an in-memory database configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            config: Config::in_memory(),
        }
    }

    /// Set the database file path.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self.config.in_memory = false;
        self
    }

    /// Set the storage cache size in bytes.
    #[must_use]
    pub const fn cache_size(mut self, bytes: usize) -> Self {
        self.config.cache_size = Some(bytes);
        self
    }

    /// Open the database with this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be opened.
    pub fn open(self) -> Result<Database> {
        Database::open_with_config(self.config)
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("catalog.trellis");
        assert!(!config.in_memory);
        assert_eq!(config.cache_size, None);

        let config = Config::in_memory();
        assert!(config.in_memory);
    }

    #[test]
    fn test_builder_path_clears_in_memory() {
        let builder = DatabaseBuilder::in_memory().path("catalog.trellis");
        assert!(!builder.config.in_memory);
        assert_eq!(builder.config.path, PathBuf::from("catalog.trellis"));
    }

    #[test]
    fn test_builder_cache_size() {
        let builder = DatabaseBuilder::in_memory().cache_size(8 * 1024 * 1024);
        assert_eq!(builder.config.cache_size, Some(8 * 1024 * 1024));
    }
}
