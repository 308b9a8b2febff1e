//! Main database interface.
//!
//! This module provides the [`Database`] struct, which is the primary entry
//! point for working with a `TrellisDB` catalog.
//!
//! # Examples
//!
//! Open a database and create a hybrid collection:
//!
//! ```ignore
//! use serde_json::json;
//! use trellisdb::{CollectionRequest, Database, DataType};
//!
//! // Open or create a database
//! let db = Database::open("catalog.trellis")?;
//!
//! // Describe the collection's fields
//! let request = CollectionRequest::new("documents")
//!     .with_field("id", DataType::Int64, json!({}), json!({}))
//!     .with_field(
//!         "embedding",
//!         DataType::FloatVector,
//!         json!({ "name": "embedding_idx" }),
//!         json!({ "dimension": 128, "metric_type": "L2", "index_type": "IVF_FLAT" }),
//!     );
//!
//! db.create_hybrid_collection(request)?;
//!
//! // Read it back
//! let (schema, fields) = db.describe_hybrid_collection("documents")?;
//! assert_eq!(schema.dimension, 128);
//! assert_eq!(fields.len(), 2);
//! ```

use std::path::Path;

use tracing::debug;

use trellisdb_storage::backends::redb::{RedbConfig, RedbEngine};

use crate::catalog::CollectionCatalog;
use crate::collection::{self, CollectionRequest, CollectionSchema, FieldsSchema};
use crate::config::{Config, DatabaseBuilder};
use crate::engine::{EngineError, MetaEngine};
use crate::error::Result;

/// The main `TrellisDB` database handle.
///
/// `Database` is the entry point for creating and inspecting hybrid
/// collections. It owns the collection catalog and performs each operation
/// as one storage transaction.
///
/// # Thread Safety
///
/// `Database` is `Send + Sync` and can be shared across threads. The storage
/// engine serializes write transactions, so two threads racing to create the
/// same collection resolve to one winner and one name conflict.
///
/// # Examples
///
/// ```ignore
/// use trellisdb::Database;
///
/// // Simple open with default options
/// let db = Database::open("catalog.trellis")?;
///
/// // Or use the builder for more options
/// use trellisdb::DatabaseBuilder;
///
/// let db = DatabaseBuilder::new()
///     .path("catalog.trellis")
///     .cache_size(64 * 1024 * 1024)
///     .open()?;
/// ```
pub struct Database {
    /// The collection catalog over the storage engine.
    catalog: CollectionCatalog<RedbEngine>,
    /// The configuration used to open this database.
    config: Config,
}

impl Database {
    /// Open or create a database at the given path.
    ///
    /// This is a convenience method that uses default configuration options.
    /// For more control, use [`DatabaseBuilder`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use trellisdb::Database;
    ///
    /// let db = Database::open("catalog.trellis")?;
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        DatabaseBuilder::new().path(path.as_ref()).open()
    }

    /// Open or create an in-memory database.
    ///
    /// In-memory databases are useful for testing and temporary data.
    /// All data is lost when the database is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn in_memory() -> Result<Self> {
        DatabaseBuilder::in_memory().open()
    }

    /// Open a database with the given configuration.
    ///
    /// This is typically called through [`DatabaseBuilder::open()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_with_config(config: Config) -> Result<Self> {
        let engine = if config.in_memory {
            RedbEngine::in_memory().map_err(EngineError::from)?
        } else {
            let mut redb_config = RedbConfig::new();
            if let Some(cache_size) = config.cache_size {
                redb_config = redb_config.with_cache_size(cache_size);
            }
            RedbEngine::open_with_config(&config.path, &redb_config)
                .map_err(EngineError::from)?
        };

        Ok(Self {
            catalog: CollectionCatalog::new(engine),
            config,
        })
    }

    /// Returns a builder for creating a database with custom configuration.
    #[must_use]
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Get the configuration used to open this database.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create a hybrid collection from a request.
    ///
    /// The request's collection name is validated, one field schema is built
    /// per declared field, and the collection's vector attributes are derived
    /// from the vector-typed fields before the catalog is written once,
    /// atomically. See [`CollectionRequest`] for how requests are assembled.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for a bad or already-taken collection name,
    ///   or a duplicate field declaration
    /// - [`Error::MissingFieldConfig`] when a declared field has no entry in
    ///   one of the parameter maps
    /// - [`Error::MalformedParameter`] when a parameter document or one of
    ///   its values cannot be interpreted
    /// - [`Error::Engine`] when the catalog write fails for any other reason
    ///
    /// [`Error::InvalidInput`]: crate::Error::InvalidInput
    /// [`Error::MissingFieldConfig`]: crate::Error::MissingFieldConfig
    /// [`Error::MalformedParameter`]: crate::Error::MalformedParameter
    /// [`Error::Engine`]: crate::Error::Engine
    pub fn create_hybrid_collection(&self, request: CollectionRequest) -> Result<()> {
        collection::create_hybrid_collection(&self.catalog, &request)?;
        debug!("created hybrid collection '{}'", request.collection_name());
        Ok(())
    }

    /// Fetch a collection's schema together with its field schemas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) wrapping
    /// [`EngineError::CollectionNotFound`] if no collection with that name
    /// exists.
    pub fn describe_hybrid_collection(
        &self,
        name: &str,
    ) -> Result<(CollectionSchema, FieldsSchema)> {
        Ok(self.catalog.describe_hybrid_collection(name)?)
    }

    /// Whether a collection with this name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn has_hybrid_collection(&self, name: &str) -> Result<bool> {
        Ok(self.catalog.has_hybrid_collection(name)?)
    }

    /// Remove a collection and its field schemas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) wrapping
    /// [`EngineError::CollectionNotFound`] if no collection with that name
    /// exists.
    pub fn drop_hybrid_collection(&self, name: &str) -> Result<()> {
        self.catalog.drop_hybrid_collection(name)?;
        debug!("dropped hybrid collection '{name}'");
        Ok(())
    }

    /// Names of all collections, in ascending name order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn list_hybrid_collections(&self) -> Result<Vec<String>> {
        Ok(self.catalog.list_hybrid_collections()?)
    }
}
