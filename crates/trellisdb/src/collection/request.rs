//! Collection creation requests.

use std::collections::HashMap;

use serde_json::Value;

use super::types::DataType;

/// A declared field: name plus data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, unique within the request.
    pub name: String,
    /// The field's data type.
    pub data_type: DataType,
}

impl FieldSpec {
    /// Create a field declaration.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Everything needed to create one collection.
///
/// A request bundles the collection name, the ordered field declarations,
/// and the two per-field parameter maps. Field order is semantic: when
/// several vector fields are declared, the last one determines the
/// collection's vector attributes.
///
/// # Example
///
/// ```ignore
/// use serde_json::json;
/// use trellisdb::{CollectionRequest, DataType};
///
/// let request = CollectionRequest::new("documents")
///     .with_field("title", DataType::String, json!({}), json!({}))
///     .with_field(
///         "embedding",
///         DataType::FloatVector,
///         json!({ "name": "embedding_idx" }),
///         json!({ "dimension": 128, "metric_type": "L2", "index_type": "IVF_FLAT" }),
///     )
///     .with_extra_params(json!({ "segment_size": 1024 }));
///
/// db.create_hybrid_collection(request)?;
/// ```
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    collection_name: String,
    fields: Vec<FieldSpec>,
    field_index_params: HashMap<String, Value>,
    field_params: HashMap<String, Value>,
    extra_params: Value,
}

impl CollectionRequest {
    /// Start a request for the given collection name.
    #[must_use]
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            fields: Vec::new(),
            field_index_params: HashMap::new(),
            field_params: HashMap::new(),
            extra_params: Value::Null,
        }
    }

    /// Declare a field together with both of its parameter documents.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        data_type: DataType,
        index_params: Value,
        params: Value,
    ) -> Self {
        let name = name.into();
        self.field_index_params.insert(name.clone(), index_params);
        self.field_params.insert(name.clone(), params);
        self.fields.push(FieldSpec::new(name, data_type));
        self
    }

    /// Declare a field without touching the parameter maps.
    ///
    /// The creation pipeline requires an entry for every declared field in
    /// both maps, so a field declared this way needs
    /// [`with_index_params`](Self::with_index_params) and
    /// [`with_field_params`](Self::with_field_params) to follow.
    #[must_use]
    pub fn with_declared_field(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.fields.push(FieldSpec::new(name, data_type));
        self
    }

    /// Set the index-parameter document for a field.
    #[must_use]
    pub fn with_index_params(mut self, field: impl Into<String>, params: Value) -> Self {
        self.field_index_params.insert(field.into(), params);
        self
    }

    /// Set the free-form parameter document for a field.
    #[must_use]
    pub fn with_field_params(mut self, field: impl Into<String>, params: Value) -> Self {
        self.field_params.insert(field.into(), params);
        self
    }

    /// Set the request-level extra parameters (e.g. `segment_size`).
    #[must_use]
    pub fn with_extra_params(mut self, params: Value) -> Self {
        self.extra_params = params;
        self
    }

    /// The requested collection name, not yet validated.
    #[must_use]
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Per-field index-parameter documents.
    #[must_use]
    pub fn field_index_params(&self) -> &HashMap<String, Value> {
        &self.field_index_params
    }

    /// Per-field free-form parameter documents.
    #[must_use]
    pub fn field_params(&self) -> &HashMap<String, Value> {
        &self.field_params
    }

    /// Request-level extra parameters.
    #[must_use]
    pub fn extra_params(&self) -> &Value {
        &self.extra_params
    }
}
