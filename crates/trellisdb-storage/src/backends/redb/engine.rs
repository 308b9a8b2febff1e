//! Redb storage engine implementation.

use std::path::Path;

use redb::Database;

use crate::engine::{StorageEngine, StorageError};

use super::transaction::RedbTransaction;

/// Configuration options for the Redb storage engine.
#[derive(Debug, Clone, Default)]
pub struct RedbConfig {
    /// Cache size in bytes. `None` uses the redb default.
    pub cache_size: Option<usize>,
}

impl RedbConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { cache_size: None }
    }

    /// Set the cache size in bytes.
    #[must_use]
    pub const fn with_cache_size(mut self, bytes: usize) -> Self {
        self.cache_size = Some(bytes);
        self
    }
}

/// A storage engine backed by [redb](https://github.com/cberner/redb).
///
/// Redb is an embedded, ACID, copy-on-write B-tree database. Write
/// transactions are serialized; read transactions see a consistent
/// snapshot and never block writers.
pub struct RedbEngine {
    db: Database,
}

impl RedbEngine {
    /// Open or create a database file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the file cannot be created or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_with_config(path, &RedbConfig::new())
    }

    /// Open or create a database file with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the file cannot be created or opened.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: &RedbConfig,
    ) -> Result<Self, StorageError> {
        let mut builder = Database::builder();
        if let Some(cache_size) = config.cache_size {
            builder.set_cache_size(cache_size);
        }
        let db = builder
            .create(path)
            .map_err(|e| StorageError::Open(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    ///
    /// Data is not persisted; this is primarily useful for tests.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the backend cannot be created.
    pub fn in_memory() -> Result<Self, StorageError> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| StorageError::Open(e.to_string()))?;
        Ok(Self { db })
    }

    /// Access the underlying redb database.
    #[must_use]
    pub const fn inner(&self) -> &Database {
        &self.db
    }
}

impl StorageEngine for RedbEngine {
    type Transaction<'a>
        = RedbTransaction
    where
        Self: 'a;

    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError> {
        self.db
            .begin_read()
            .map(RedbTransaction::new_read)
            .map_err(|e| StorageError::Transaction(e.to_string()))
    }

    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError> {
        self.db
            .begin_write()
            .map(RedbTransaction::new_write)
            .map_err(|e| StorageError::Transaction(e.to_string()))
    }
}
