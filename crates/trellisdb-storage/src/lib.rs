//! `TrellisDB` Storage
//!
//! This crate provides the storage engine abstraction and backend
//! implementations for `TrellisDB`.
//!
//! # Overview
//!
//! The storage layer provides a transactional key-value interface that
//! backends implement. This allows `TrellisDB` to support multiple storage
//! engines while providing consistent ACID semantics.
//!
//! # Core Traits
//!
//! - [`StorageEngine`] - The main entry point for storage operations
//! - [`Transaction`] - ACID transaction support with read/write operations
//! - [`Cursor`] - Ordered forward iteration over key-value pairs
//!
//! # Error Handling
//!
//! All storage operations return [`StorageResult<T>`], which is an alias for
//! `Result<T, StorageError>`. The [`StorageError`] enum covers the failure
//! modes from opening a database through individual reads and writes.
//!
//! # Example
//!
//! ```ignore
//! use trellisdb_storage::{StorageEngine, Transaction};
//! use trellisdb_storage::backends::RedbEngine;
//!
//! // Open or create a database
//! let engine = RedbEngine::open("catalog.redb")?;
//!
//! // Write some data
//! let mut tx = engine.begin_write()?;
//! tx.put("collections", b"users", b"...")?;
//! tx.commit()?;
//!
//! // Read it back
//! let tx = engine.begin_read()?;
//! let value = tx.get("collections", b"users")?;
//! assert!(value.is_some());
//! ```
//!
//! # Modules
//!
//! - [`engine`] - Storage engine traits and abstractions
//! - [`backends`] - Concrete storage backend implementations

pub mod backends;
pub mod engine;

pub use engine::{
    Cursor, CursorResult, KeyValue, StorageEngine, StorageError, StorageResult, Transaction,
};
