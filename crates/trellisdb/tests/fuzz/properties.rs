//! Property-based tests for creation pipeline invariants.
//!
//! These tests verify that certain properties always hold regardless of
//! the declared fields or collection names.

use proptest::prelude::*;
use serde_json::json;

use trellisdb::{CollectionRequest, Database, DataType, Error};

/// Strategy for generating scalar field types.
fn scalar_type() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Bool),
        Just(DataType::Int8),
        Just(DataType::Int16),
        Just(DataType::Int32),
        Just(DataType::Int64),
        Just(DataType::Float),
        Just(DataType::Double),
        Just(DataType::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Complete requests build exactly one field schema per declaration,
    /// preserving name, type, and order.
    #[test]
    fn prop_one_field_schema_per_declaration(
        types in proptest::collection::vec(scalar_type(), 0..12),
    ) {
        let db = Database::in_memory().expect("failed to create db");

        let mut request = CollectionRequest::new("generated");
        for (i, data_type) in types.iter().enumerate() {
            request = request.with_field(format!("field_{i}"), *data_type, json!({}), json!({}));
        }
        db.create_hybrid_collection(request).expect("create failed");

        let (schema, fields) = db
            .describe_hybrid_collection("generated")
            .expect("describe failed");
        // Scalar-only declarations never produce vector attributes.
        prop_assert_eq!(schema.dimension, 0);
        prop_assert!(schema.metric_type.is_none());
        prop_assert!(schema.engine_type.is_none());

        prop_assert_eq!(fields.len(), types.len());
        for (i, (field, data_type)) in fields.iter().zip(&types).enumerate() {
            prop_assert_eq!(&field.field_name, &format!("field_{i}"));
            prop_assert_eq!(field.data_type_code, data_type.code());
            prop_assert!(field.index_name.is_none());
        }
    }

    /// With any number of vector fields, the last declared dimension wins.
    #[test]
    fn prop_last_declared_dimension_wins(
        dims in proptest::collection::vec(1u16..=4096, 1..6),
    ) {
        let db = Database::in_memory().expect("failed to create db");

        let mut request = CollectionRequest::new("vectors");
        for (i, dim) in dims.iter().enumerate() {
            request = request.with_field(
                format!("vec_{i}"),
                DataType::FloatVector,
                json!({}),
                json!({ "dimension": dim }),
            );
        }
        db.create_hybrid_collection(request).expect("create failed");

        let (schema, _) = db
            .describe_hybrid_collection("vectors")
            .expect("describe failed");
        prop_assert_eq!(schema.dimension, *dims.last().expect("dims is non-empty"));
    }

    /// Every name the validator accepts round-trips through the catalog.
    #[test]
    fn prop_valid_names_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_]{0,32}") {
        let db = Database::in_memory().expect("failed to create db");

        db.create_hybrid_collection(CollectionRequest::new(name.clone()))
            .expect("create failed");

        prop_assert!(db.has_hybrid_collection(&name).expect("has failed"));
        prop_assert_eq!(db.list_hybrid_collections().expect("list failed"), vec![name]);
    }

    /// Names with a character outside the allowed set are rejected before
    /// anything reaches the catalog.
    #[test]
    fn prop_invalid_names_leave_catalog_empty(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,8}[ ./-][a-zA-Z0-9_]{0,8}",
    ) {
        let db = Database::in_memory().expect("failed to create db");

        let err = db
            .create_hybrid_collection(CollectionRequest::new(name))
            .expect_err("create must fail");
        prop_assert!(matches!(err, Error::InvalidInput(_)));
        prop_assert!(db.list_hybrid_collections().expect("list failed").is_empty());
    }
}
