//! End-to-end tests for hybrid collection creation.
//!
//! These tests drive the full creation pipeline through [`Database`]:
//! name validation, per-field schema assembly, vector attribute derivation,
//! and the atomic catalog write. Failure cases additionally verify the
//! catalog was left untouched.

use serde_json::json;
use trellisdb::{
    CollectionRequest, Database, DataType, EngineType, Error, MetricType,
};

fn documents_request() -> CollectionRequest {
    CollectionRequest::new("documents")
        .with_field("id", DataType::Int64, json!({}), json!({}))
        .with_field("title", DataType::String, json!({}), json!({}))
        .with_field(
            "embedding",
            DataType::FloatVector,
            json!({ "name": "embedding_idx", "nlist": 4096 }),
            json!({ "dimension": 128, "metric_type": "L2", "index_type": "IVF_FLAT" }),
        )
}

// ============================================================================
// Creation Pipeline
// ============================================================================

#[test]
fn test_create_and_describe_hybrid_collection() {
    let db = Database::in_memory().expect("failed to create db");

    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");

    let (schema, fields) = db
        .describe_hybrid_collection("documents")
        .expect("failed to describe collection");
    assert_eq!(schema.collection_id, "documents");
    assert_eq!(schema.dimension, 128);
    assert_eq!(schema.metric_type, Some(MetricType::L2.code()));
    assert_eq!(schema.engine_type, Some(EngineType::IvfFlat.code()));
    assert_eq!(schema.index_file_size, None);

    let names: Vec<_> = fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(names, vec!["id", "title", "embedding"]);

    let embedding = &fields.fields()[2];
    assert_eq!(embedding.collection_id, "documents");
    assert_eq!(embedding.data_type_code, DataType::FloatVector.code());
    assert_eq!(embedding.index_name.as_deref(), Some("embedding_idx"));
    assert!(embedding.index_param.contains("nlist"));
    assert!(embedding.field_params.contains("dimension"));

    let id = &fields.fields()[0];
    assert_eq!(id.data_type_code, DataType::Int64.code());
    assert_eq!(id.index_name, None);
}

#[test]
fn test_scalar_only_collection() {
    let db = Database::in_memory().expect("failed to create db");

    let request = CollectionRequest::new("plain")
        .with_field("id", DataType::Int64, json!({}), json!({}))
        .with_field("label", DataType::String, json!({}), json!({}));
    db.create_hybrid_collection(request)
        .expect("failed to create collection");

    let (schema, fields) = db
        .describe_hybrid_collection("plain")
        .expect("failed to describe collection");
    assert_eq!(schema.dimension, 0);
    assert_eq!(schema.metric_type, None);
    assert_eq!(schema.engine_type, None);
    assert_eq!(fields.len(), 2);
}

#[test]
fn test_last_declared_vector_field_wins() {
    let db = Database::in_memory().expect("failed to create db");

    let request = CollectionRequest::new("multi_vector")
        .with_field(
            "first",
            DataType::FloatVector,
            json!({}),
            json!({ "dimension": 128, "metric_type": "L2" }),
        )
        .with_field(
            "second",
            DataType::BinaryVector,
            json!({}),
            json!({ "dimension": 256, "metric_type": "HAMMING", "index_type": "FLAT" }),
        );
    db.create_hybrid_collection(request)
        .expect("failed to create collection");

    let (schema, _) = db
        .describe_hybrid_collection("multi_vector")
        .expect("failed to describe collection");
    assert_eq!(schema.dimension, 256);
    assert_eq!(schema.metric_type, Some(MetricType::Hamming.code()));
    assert_eq!(schema.engine_type, Some(EngineType::Flat.code()));
}

#[test]
fn test_segment_size_is_persisted() {
    let db = Database::in_memory().expect("failed to create db");

    let request = documents_request().with_extra_params(json!({ "segment_size": 2048 }));
    db.create_hybrid_collection(request)
        .expect("failed to create collection");

    let (schema, _) = db
        .describe_hybrid_collection("documents")
        .expect("failed to describe collection");
    assert_eq!(schema.index_file_size, Some(2048));
}

// ============================================================================
// Rejected Requests
// ============================================================================

#[test]
fn test_duplicate_name_is_invalid_input() {
    let db = Database::in_memory().expect("failed to create db");

    db.create_hybrid_collection(documents_request())
        .expect("first create failed");
    let err = db
        .create_hybrid_collection(documents_request())
        .expect_err("second create must fail");

    // The conflict surfaces through the same channel as a malformed name,
    // still carrying the engine's message.
    match &err {
        Error::InvalidInput(msg) => assert!(msg.contains("documents")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(err.is_user_error());
}

#[test]
fn test_invalid_name_never_touches_the_catalog() {
    let db = Database::in_memory().expect("failed to create db");

    let err = db
        .create_hybrid_collection(CollectionRequest::new("1st_collection"))
        .expect_err("create must fail");
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(db
        .list_hybrid_collections()
        .expect("failed to list")
        .is_empty());
}

#[test]
fn test_missing_field_config_never_touches_the_catalog() {
    let db = Database::in_memory().expect("failed to create db");

    let request = CollectionRequest::new("partial")
        .with_declared_field("id", DataType::Int64)
        .with_index_params("id", json!({}));
    let err = db
        .create_hybrid_collection(request)
        .expect_err("create must fail");
    assert!(matches!(
        err,
        Error::MissingFieldConfig { ref field, map: "field_params" } if field == "id"
    ));
    assert!(!db
        .has_hybrid_collection("partial")
        .expect("failed to check"));
}

#[test]
fn test_unknown_metric_never_touches_the_catalog() {
    let db = Database::in_memory().expect("failed to create db");

    let request = CollectionRequest::new("bogus_metric").with_field(
        "embedding",
        DataType::FloatVector,
        json!({}),
        json!({ "dimension": 128, "metric_type": "BOGUS" }),
    );
    let err = db
        .create_hybrid_collection(request)
        .expect_err("create must fail");
    assert!(matches!(err, Error::MalformedParameter(_)));
    assert!(!db
        .has_hybrid_collection("bogus_metric")
        .expect("failed to check"));
}

#[test]
fn test_failed_create_leaves_earlier_collections_intact() {
    let db = Database::in_memory().expect("failed to create db");

    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");
    db.create_hybrid_collection(CollectionRequest::new("bad name"))
        .expect_err("create must fail");

    assert_eq!(
        db.list_hybrid_collections().expect("failed to list"),
        vec!["documents"]
    );
}
