//! `TrellisDB` - An Embedded Hybrid-Collection Catalog
//!
//! TrellisDB stores schemas for hybrid collections: collections whose fields
//! mix scalar types with one or more vector types. Callers declare fields
//! with loosely-typed parameter documents; the catalog reconciles them into
//! one consistent collection record, derives the collection-wide vector
//! attributes (dimension, distance metric, index engine), and persists
//! everything in a single atomic write.
//!
//! # Features
//!
//! - **Hybrid schemas**: scalar and vector fields side by side in one
//!   collection
//! - **Vector attribute derivation**: dimension, metric, and index engine
//!   resolved from the vector fields' parameter documents
//! - **Atomic creation**: the collection row and its field rows commit in
//!   one storage transaction, so name conflicts have exactly one winner
//! - **Typed failures**: caller mistakes, missing field configuration,
//!   malformed parameters, and engine failures are distinct error variants
//!
//! # Quick Start
//!
//! ```ignore
//! use serde_json::json;
//! use trellisdb::{CollectionRequest, Database, DataType};
//!
//! // Open or create a database file
//! let db = Database::open("catalog.trellis")?;
//!
//! // Declare fields in order; the last vector field determines the
//! // collection's vector attributes
//! let request = CollectionRequest::new("documents")
//!     .with_field("id", DataType::Int64, json!({}), json!({}))
//!     .with_field("title", DataType::String, json!({}), json!({}))
//!     .with_field(
//!         "embedding",
//!         DataType::FloatVector,
//!         json!({ "name": "embedding_idx" }),
//!         json!({ "dimension": 128, "metric_type": "L2", "index_type": "IVF_FLAT" }),
//!     );
//!
//! db.create_hybrid_collection(request)?;
//!
//! // Inspect the catalog
//! assert!(db.has_hybrid_collection("documents")?);
//! let (schema, fields) = db.describe_hybrid_collection("documents")?;
//! assert_eq!(schema.dimension, 128);
//! assert_eq!(fields.len(), 3);
//! ```
//!
//! # Configuration
//!
//! Use [`DatabaseBuilder`] for advanced configuration:
//!
//! ```ignore
//! use trellisdb::DatabaseBuilder;
//!
//! let db = DatabaseBuilder::new()
//!     .path("catalog.trellis")
//!     .cache_size(64 * 1024 * 1024)  // 64MB cache
//!     .open()?;
//! ```
//!
//! # Modules
//!
//! - [`collection`] - Collection types and the creation pipeline
//! - [`catalog`] - The catalog over transactional storage
//! - [`engine`] - The metadata engine contract
//! - [`config`] - Database configuration and builder
//! - [`database`] - Main database interface
//! - [`error`] - Error types

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

// Re-export storage types
pub use trellisdb_storage::{StorageEngine, StorageError, Transaction};

// Modules
pub mod catalog;
pub mod collection;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;

// Public API re-exports
pub use catalog::CollectionCatalog;
pub use collection::{
    CollectionName, CollectionNameError, CollectionRequest, CollectionSchema, DataType,
    EngineType, FieldSchema, FieldSpec, FieldsSchema, MetricType,
};
pub use config::{Config, DatabaseBuilder};
pub use database::Database;
pub use engine::{EngineError, MetaEngine};
pub use error::{Error, Result};
