//! Hybrid collection types and the creation pipeline.
//!
//! A hybrid collection mixes scalar-typed fields with vector-typed fields.
//! Scalar fields only carry their own schema; the vector fields additionally
//! determine the collection-wide vector attributes (dimension, distance
//! metric, index engine).
//!
//! # Overview
//!
//! Callers describe a collection as an ordered list of [`FieldSpec`]
//! declarations plus two per-field parameter maps, bundled in a
//! [`CollectionRequest`]. The creation pipeline validates the name, builds
//! one [`FieldSchema`] per declaration, derives the vector attributes from
//! the vector-typed fields, and hands the assembled [`CollectionSchema`]
//! and [`FieldsSchema`] to the metadata engine in a single call.
//!
//! Field order is semantic: when several vector fields are declared, the
//! last one wins the collection-wide attributes.

mod create;
mod name;
mod request;
mod schema;
mod types;

pub(crate) use create::create_hybrid_collection;

pub use name::{CollectionName, CollectionNameError};
pub use request::{CollectionRequest, FieldSpec};
pub use schema::{CollectionSchema, FieldSchema, FieldsSchema};
pub use types::{DataType, EngineType, MetricType};
