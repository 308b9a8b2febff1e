//! The hybrid collection creation pipeline.
//!
//! Creation runs as one synchronous pass: validate the name, build one
//! field schema per declaration while deriving the collection's vector
//! attributes, then hand the assembled schemas to the metadata engine in
//! a single call. Every failure returns before the engine is touched;
//! only a name conflict reported by the engine itself is folded back into
//! a caller error.

use std::collections::HashSet;

use serde_json::Value;

use crate::engine::{EngineError, MetaEngine};
use crate::error::{Error, Result};

use super::name::CollectionName;
use super::request::CollectionRequest;
use super::schema::{CollectionSchema, FieldSchema, FieldsSchema};
use super::types::{EngineType, MetricType};

/// Run the creation pipeline against a metadata engine.
pub(crate) fn create_hybrid_collection<M: MetaEngine + ?Sized>(
    engine: &M,
    request: &CollectionRequest,
) -> Result<()> {
    let name = CollectionName::new(request.collection_name())
        .map_err(|e| Error::InvalidInput(e.to_string()))?;

    let mut seen = HashSet::new();
    for field in request.fields() {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::invalid_input(format!(
                "duplicate field declaration: {}",
                field.name
            )));
        }
    }

    let mut fields_schema = FieldsSchema::new();
    let mut dimension: u16 = 0;
    let mut last_vector_doc: Option<Value> = None;

    for field in request.fields() {
        let index_params = request
            .field_index_params()
            .get(&field.name)
            .ok_or_else(|| Error::MissingFieldConfig {
                field: field.name.clone(),
                map: "field_index_params",
            })?;
        let field_params = request
            .field_params()
            .get(&field.name)
            .ok_or_else(|| Error::MissingFieldConfig {
                field: field.name.clone(),
                map: "field_params",
            })?;

        let index_name = match index_params.get("name") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(Error::malformed(format!(
                    "index name for field '{}' must be a string, got {other}",
                    field.name
                )))
            }
        };

        let index_param =
            serde_json::to_string(index_params).map_err(|e| Error::unexpected(e.to_string()))?;
        let params_serialized =
            serde_json::to_string(field_params).map_err(|e| Error::unexpected(e.to_string()))?;

        fields_schema.push(FieldSchema {
            collection_id: name.as_str().to_string(),
            field_name: field.name.clone(),
            data_type_code: field.data_type.code(),
            index_name,
            index_param,
            field_params: params_serialized,
        });

        if field.data_type.is_vector() {
            let doc = parse_vector_params(&field.name, field_params)?;
            // The running dimension is only overwritten when the document
            // actually carries one, but metric and index engine always
            // resolve from the last vector document.
            if let Some(value) = doc.get("dimension") {
                dimension = parse_dimension(&field.name, value)?;
            }
            last_vector_doc = Some(doc);
        }
    }

    let mut metric_type = None;
    let mut engine_type = None;
    if let Some(doc) = &last_vector_doc {
        if let Some(value) = doc.get("metric_type") {
            metric_type = Some(metric_from_value(value)?.code());
        }
        if let Some(value) = doc.get("index_type") {
            engine_type = Some(engine_from_value(value)?.code());
        }
    }

    let index_file_size = match request.extra_params().get("segment_size") {
        None => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            Error::malformed(format!("segment_size must be an integer, got {value}"))
        })?),
    };

    let collection = CollectionSchema {
        collection_id: name.into_string(),
        dimension,
        index_file_size,
        metric_type,
        engine_type,
    };

    engine
        .create_hybrid_collection(&collection, &fields_schema)
        .map_err(map_engine_error)
}

/// Vector parameter documents may arrive double-encoded: a JSON string
/// whose contents are the real document.
fn parse_vector_params(field: &str, params: &Value) -> Result<Value> {
    match params {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| {
            Error::malformed(format!(
                "vector parameters for field '{field}' are not valid JSON: {e}"
            ))
        }),
        other => Ok(other.clone()),
    }
}

fn parse_dimension(field: &str, value: &Value) -> Result<u16> {
    value
        .as_u64()
        .and_then(|dim| u16::try_from(dim).ok())
        .ok_or_else(|| {
            Error::malformed(format!(
                "dimension for field '{field}' must be an integer between 0 and {}, got {value}",
                u16::MAX
            ))
        })
}

fn metric_from_value(value: &Value) -> Result<MetricType> {
    match value {
        Value::String(s) => s.parse(),
        other => Err(Error::malformed(format!(
            "metric_type must be a string, got {other}"
        ))),
    }
}

fn engine_from_value(value: &Value) -> Result<EngineType> {
    match value {
        Value::String(s) => s.parse(),
        other => Err(Error::malformed(format!(
            "index_type must be a string, got {other}"
        ))),
    }
}

/// Creation treats a name conflict as a caller mistake; every other engine
/// outcome passes through unchanged.
fn map_engine_error(err: EngineError) -> Error {
    match err {
        EngineError::AlreadyExists(_) => Error::InvalidInput(err.to_string()),
        other => Error::Engine(other),
    }
}
