//! Catalog persistence across database reopens.

use serde_json::json;
use trellisdb::{CollectionRequest, Database, DatabaseBuilder, DataType, Error};

fn documents_request() -> CollectionRequest {
    CollectionRequest::new("documents")
        .with_field("id", DataType::Int64, json!({}), json!({}))
        .with_field(
            "embedding",
            DataType::FloatVector,
            json!({ "name": "embedding_idx" }),
            json!({ "dimension": 128, "metric_type": "L2", "index_type": "IVF_FLAT" }),
        )
        .with_extra_params(json!({ "segment_size": 1024 }))
}

#[test]
fn test_schema_survives_reopen() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("catalog.trellis");

    let db = Database::open(&path).expect("failed to open db");
    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");
    let before = db
        .describe_hybrid_collection("documents")
        .expect("failed to describe collection");
    drop(db);

    let db = Database::open(&path).expect("failed to reopen db");
    let after = db
        .describe_hybrid_collection("documents")
        .expect("failed to describe after reopen");
    assert_eq!(before, after);
    assert_eq!(
        db.list_hybrid_collections().expect("failed to list"),
        vec!["documents"]
    );
}

#[test]
fn test_drop_survives_reopen() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("catalog.trellis");

    let db = Database::open(&path).expect("failed to open db");
    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");
    db.drop_hybrid_collection("documents").expect("failed to drop");
    drop(db);

    let db = Database::open(&path).expect("failed to reopen db");
    assert!(!db
        .has_hybrid_collection("documents")
        .expect("failed to check"));
}

#[test]
fn test_name_conflict_detected_across_reopen() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("catalog.trellis");

    let db = Database::open(&path).expect("failed to open db");
    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");
    drop(db);

    let db = Database::open(&path).expect("failed to reopen db");
    let err = db
        .create_hybrid_collection(documents_request())
        .expect_err("create must fail");
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_builder_opens_file_backed_database() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("catalog.trellis");

    let db = DatabaseBuilder::new()
        .path(&path)
        .cache_size(8 * 1024 * 1024)
        .open()
        .expect("failed to open db");
    assert!(!db.config().in_memory);
    assert_eq!(db.config().cache_size, Some(8 * 1024 * 1024));

    db.create_hybrid_collection(documents_request())
        .expect("failed to create collection");
    assert!(db
        .has_hybrid_collection("documents")
        .expect("failed to check"));
}
