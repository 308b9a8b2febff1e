//! The metadata engine contract.
//!
//! A [`MetaEngine`] owns the persistent collection catalog. The creation
//! pipeline talks to it through this trait only, so engines can be swapped
//! (or faked in tests) without touching the pipeline.

use thiserror::Error;

use trellisdb_storage::StorageError;

use crate::collection::{CollectionSchema, FieldsSchema};

/// Errors reported by a metadata engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A collection with the same name already exists.
    #[error("collection already exists: {0}")]
    AlreadyExists(String),

    /// No collection with that name exists.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// The underlying storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A catalog row could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The catalog holds inconsistent rows for a collection.
    #[error("corrupted catalog entry: {0}")]
    Corrupted(String),
}

/// A metadata engine that persists hybrid collection catalogs.
///
/// The engine owns name uniqueness: creation must fail with
/// [`EngineError::AlreadyExists`] when the name is taken, atomically with
/// the write itself, so two racing creates can never both succeed.
pub trait MetaEngine: Send + Sync {
    /// Persist a new collection and its fields atomically.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyExists`] if the name is taken, or a
    /// storage/serialization error if the write fails.
    fn create_hybrid_collection(
        &self,
        collection: &CollectionSchema,
        fields: &FieldsSchema,
    ) -> Result<(), EngineError>;

    /// Fetch a collection's schema together with its fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CollectionNotFound`] if the name is unknown.
    fn describe_hybrid_collection(
        &self,
        name: &str,
    ) -> Result<(CollectionSchema, FieldsSchema), EngineError>;

    /// Whether a collection with this name exists.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the catalog cannot be read.
    fn has_hybrid_collection(&self, name: &str) -> Result<bool, EngineError>;

    /// Remove a collection and its fields atomically.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CollectionNotFound`] if the name is unknown.
    fn drop_hybrid_collection(&self, name: &str) -> Result<(), EngineError>;

    /// Names of all collections, in ascending name order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the catalog cannot be read.
    fn list_hybrid_collections(&self) -> Result<Vec<String>, EngineError>;
}
