//! Collection catalog over transactional key-value storage.

use serde::de::DeserializeOwned;
use serde::Serialize;

use trellisdb_storage::{Cursor, StorageEngine, Transaction};

use crate::collection::{CollectionSchema, FieldsSchema};
use crate::engine::{EngineError, MetaEngine};

/// Logical table holding one collection schema row per collection.
const COLLECTIONS_TABLE: &str = "collections";

/// Logical table holding one fields-schema row per collection.
const FIELDS_TABLE: &str = "collection_fields";

/// A [`MetaEngine`] over any transactional storage engine.
///
/// Rows are bincode-encoded and keyed by collection name, so listing is a
/// forward scan in name order and every mutation is a single write
/// transaction. The storage engine serializes write transactions, which is
/// what makes the exists-then-insert check on creation race-free.
pub struct CollectionCatalog<E: StorageEngine> {
    engine: E,
}

impl<E: StorageEngine> CollectionCatalog<E> {
    /// Wrap a storage engine.
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }
}

fn encode_row<T: Serialize>(value: &T) -> Result<Vec<u8>, EngineError> {
    bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| EngineError::Serialization(e.to_string()))
}

fn decode_row<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, EngineError> {
    let (value, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map_err(|e| EngineError::Serialization(e.to_string()))?;
    Ok(value)
}

impl<E: StorageEngine> MetaEngine for CollectionCatalog<E> {
    fn create_hybrid_collection(
        &self,
        collection: &CollectionSchema,
        fields: &FieldsSchema,
    ) -> Result<(), EngineError> {
        let key = collection.collection_id.as_bytes();

        let mut tx = self.engine.begin_write()?;
        if tx.get(COLLECTIONS_TABLE, key)?.is_some() {
            return Err(EngineError::AlreadyExists(collection.collection_id.clone()));
        }
        tx.put(COLLECTIONS_TABLE, key, &encode_row(collection)?)?;
        tx.put(FIELDS_TABLE, key, &encode_row(fields)?)?;
        tx.commit()?;
        Ok(())
    }

    fn describe_hybrid_collection(
        &self,
        name: &str,
    ) -> Result<(CollectionSchema, FieldsSchema), EngineError> {
        let tx = self.engine.begin_read()?;

        let Some(bytes) = tx.get(COLLECTIONS_TABLE, name.as_bytes())? else {
            return Err(EngineError::CollectionNotFound(name.to_string()));
        };
        let collection: CollectionSchema = decode_row(&bytes)?;

        // Creation writes both rows in one transaction, so a lone
        // collection row means the catalog was damaged.
        let Some(bytes) = tx.get(FIELDS_TABLE, name.as_bytes())? else {
            return Err(EngineError::Corrupted(format!(
                "collection '{name}' has no fields row"
            )));
        };
        let fields: FieldsSchema = decode_row(&bytes)?;

        Ok((collection, fields))
    }

    fn has_hybrid_collection(&self, name: &str) -> Result<bool, EngineError> {
        let tx = self.engine.begin_read()?;
        Ok(tx.get(COLLECTIONS_TABLE, name.as_bytes())?.is_some())
    }

    fn drop_hybrid_collection(&self, name: &str) -> Result<(), EngineError> {
        let mut tx = self.engine.begin_write()?;
        if !tx.delete(COLLECTIONS_TABLE, name.as_bytes())? {
            return Err(EngineError::CollectionNotFound(name.to_string()));
        }
        tx.delete(FIELDS_TABLE, name.as_bytes())?;
        tx.commit()?;
        Ok(())
    }

    fn list_hybrid_collections(&self) -> Result<Vec<String>, EngineError> {
        let tx = self.engine.begin_read()?;
        let mut cursor = tx.cursor(COLLECTIONS_TABLE)?;

        let mut names = Vec::new();
        while let Some((key, _)) = cursor.next()? {
            match String::from_utf8(key) {
                Ok(name) => names.push(name),
                Err(_) => {
                    return Err(EngineError::Corrupted(
                        "collection key is not valid UTF-8".to_string(),
                    ))
                }
            }
        }
        Ok(names)
    }
}
