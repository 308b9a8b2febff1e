//! Catalog operation tests: describe, has, drop, and list.

use serde_json::json;
use trellisdb::{CollectionRequest, Database, DataType, EngineError, Error};

fn create_named(db: &Database, name: &str) {
    let request = CollectionRequest::new(name).with_field(
        "id",
        DataType::Int64,
        json!({}),
        json!({}),
    );
    db.create_hybrid_collection(request)
        .expect("failed to create collection");
}

#[test]
fn test_has_hybrid_collection() {
    let db = Database::in_memory().expect("failed to create db");

    assert!(!db.has_hybrid_collection("docs").expect("failed to check"));
    create_named(&db, "docs");
    assert!(db.has_hybrid_collection("docs").expect("failed to check"));
}

#[test]
fn test_list_is_name_ordered() {
    let db = Database::in_memory().expect("failed to create db");

    for name in ["zebra", "alpha", "mango"] {
        create_named(&db, name);
    }

    let names = db.list_hybrid_collections().expect("failed to list");
    assert_eq!(names, vec!["alpha", "mango", "zebra"]);
}

#[test]
fn test_list_empty_database() {
    let db = Database::in_memory().expect("failed to create db");
    assert!(db
        .list_hybrid_collections()
        .expect("failed to list")
        .is_empty());
}

#[test]
fn test_drop_removes_collection() {
    let db = Database::in_memory().expect("failed to create db");

    create_named(&db, "docs");
    db.drop_hybrid_collection("docs").expect("failed to drop");

    assert!(!db.has_hybrid_collection("docs").expect("failed to check"));
    let err = db
        .describe_hybrid_collection("docs")
        .expect_err("describe must fail");
    assert!(matches!(
        err,
        Error::Engine(EngineError::CollectionNotFound(_))
    ));
}

#[test]
fn test_drop_unknown_collection() {
    let db = Database::in_memory().expect("failed to create db");

    let err = db
        .drop_hybrid_collection("ghost")
        .expect_err("drop must fail");
    // Unlike the creation conflict, a missing name stays an engine error.
    assert!(matches!(
        &err,
        Error::Engine(EngineError::CollectionNotFound(name)) if name == "ghost"
    ));
    assert!(!err.is_user_error());
}

#[test]
fn test_recreate_after_drop() {
    let db = Database::in_memory().expect("failed to create db");

    create_named(&db, "docs");
    db.drop_hybrid_collection("docs").expect("failed to drop");
    create_named(&db, "docs");

    assert!(db.has_hybrid_collection("docs").expect("failed to check"));
}

#[test]
fn test_drop_only_touches_the_named_collection() {
    let db = Database::in_memory().expect("failed to create db");

    create_named(&db, "keep_me");
    create_named(&db, "drop_me");
    db.drop_hybrid_collection("drop_me").expect("failed to drop");

    assert_eq!(
        db.list_hybrid_collections().expect("failed to list"),
        vec!["keep_me"]
    );
    db.describe_hybrid_collection("keep_me")
        .expect("surviving collection must still describe");
}
