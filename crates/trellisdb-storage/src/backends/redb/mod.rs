//! Redb storage backend.
//!
//! This module provides a storage backend implementation using Redb,
//! a pure-Rust embedded database. Redb provides ACID transactions,
//! excellent performance, and works well on all platforms.
//!
//! # Example
//!
//! ```ignore
//! use trellisdb_storage::backends::RedbEngine;
//! use trellisdb_storage::{StorageEngine, Transaction};
//!
//! // Open a database (creates if it doesn't exist)
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
//! ```
//!
//! # In-Memory Databases
//!
//! For testing, you can create an in-memory database that doesn't persist:
//!
//! ```ignore
//! let engine = RedbEngine::in_memory()?;
//! ```
//!
//! # Configuration
//!
//! Use `RedbConfig` to customize the database behavior:
//!
//! ```ignore
//! use trellisdb_storage::backends::redb::{RedbConfig, RedbEngine};
//!
//! let config = RedbConfig::new()
//!     .with_cache_size(100 * 1024 * 1024); // 100 MB cache
//!
//! let engine = RedbEngine::open_with_config("catalog.redb", &config)?;
//! ```

mod engine;
pub mod tables;
mod transaction;

pub use engine::{RedbConfig, RedbEngine};
pub use transaction::{RedbCursor, RedbTransaction};
