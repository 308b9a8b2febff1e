//! Persisted collection and field schema records.
//!
//! These are the rows the catalog stores: one `CollectionSchema` per
//! collection plus its `FieldsSchema`. Parameter documents are kept in
//! their serialized form so rows stay plain serde records.

use serde::{Deserialize, Serialize};

/// Schema of a single field, as persisted in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The collection this field belongs to.
    pub collection_id: String,
    /// The field's name, unique within the collection.
    pub field_name: String,
    /// Numeric data type code (see `DataType::code`).
    pub data_type_code: i32,
    /// Name of the field's index, from the index document's `name` key.
    pub index_name: Option<String>,
    /// The field's full index document, serialized.
    pub index_param: String,
    /// The field's free-form parameter document, serialized.
    pub field_params: String,
}

/// Ordered set of field schemas for one collection.
///
/// Order equals the caller's declaration order and is preserved through
/// the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsSchema {
    fields: Vec<FieldSchema>,
}

impl FieldsSchema {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field schema, keeping declaration order.
    pub fn push(&mut self, field: FieldSchema) {
        self.fields.push(field);
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSchema> {
        self.fields.iter()
    }

    /// The fields as a slice, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }
}

impl<'a> IntoIterator for &'a FieldsSchema {
    type Item = &'a FieldSchema;
    type IntoIter = std::slice::Iter<'a, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Collection-level schema, as persisted in the catalog.
///
/// The vector attributes (`dimension`, `metric_type`, `engine_type`) are
/// derived from the vector-typed fields at creation time; scalar-only
/// collections keep dimension 0 and no codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    /// The collection's identifier (its validated name).
    pub collection_id: String,
    /// Dimension of the collection's vectors; 0 when no field is vector-typed.
    pub dimension: u16,
    /// Target segment size, from the request's `segment_size` extra parameter.
    pub index_file_size: Option<i64>,
    /// Numeric metric code, when the vector parameters named one.
    pub metric_type: Option<i32>,
    /// Numeric index engine code, when the vector parameters named one.
    pub engine_type: Option<i32>,
}
