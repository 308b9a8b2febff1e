//! Integration tests for `TrellisDB`.
//!
//! These suites exercise the database end to end through the public API,
//! against the real redb-backed catalog.

pub mod catalog;
pub mod collection;
pub mod persistence;
