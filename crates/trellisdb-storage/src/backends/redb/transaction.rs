//! Redb transaction and cursor implementations.
//!
//! Transactions map the logical-table interface onto the single physical
//! redb table via the key encoding in [`super::tables`]. Cursors stream
//! entries in batches so large tables never have to be materialized at
//! once.

use std::ops::Bound;

use redb::{ReadTransaction, ReadableTable, TableError, WriteTransaction};

use crate::engine::{Cursor, CursorResult, KeyValue, StorageError, Transaction};

use super::tables::{decode_key, encode_key, table_end_key, table_start_key, DATA_TABLE};

/// Number of entries a cursor fetches per batch.
const DEFAULT_BATCH_SIZE: usize = 1000;

/// A transaction over the redb backend.
///
/// Read and write transactions are folded into one enum so both can serve
/// as the engine's associated transaction type. Write operations through a
/// read transaction fail with [`StorageError::ReadOnly`].
#[allow(clippy::large_enum_variant)]
pub enum RedbTransaction {
    /// A read-only snapshot transaction.
    Read(ReadTransaction),
    /// An exclusive read-write transaction.
    Write(WriteTransaction),
}

impl RedbTransaction {
    pub(crate) const fn new_read(tx: ReadTransaction) -> Self {
        Self::Read(tx)
    }

    pub(crate) const fn new_write(tx: WriteTransaction) -> Self {
        Self::Write(tx)
    }

    /// Fetch up to `limit` entries of a logical table, starting from `start`
    /// (encoded physical bound) and never crossing the table's end key.
    fn fetch_batch(
        &self,
        table: &str,
        start: Bound<&[u8]>,
        limit: usize,
    ) -> Result<Vec<KeyValue>, StorageError> {
        let end = table_end_key(table);
        match self {
            Self::Read(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => scan_table(&t, start, &end, limit),
                Err(TableError::TableDoesNotExist(_)) => Ok(Vec::new()),
                Err(e) => Err(StorageError::Internal(e.to_string())),
            },
            Self::Write(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => scan_table(&t, start, &end, limit),
                Err(e) => Err(StorageError::Internal(e.to_string())),
            },
        }
    }
}

/// Read one value through any readable view of the physical table.
fn read_value<T>(table: &T, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    table
        .get(key)
        .map(|guard| guard.map(|g| g.value().to_vec()))
        .map_err(|e| StorageError::Internal(e.to_string()))
}

/// Collect up to `limit` logical entries from a physical key range,
/// stripping the table prefix from each key.
fn scan_table<T>(
    table: &T,
    start: Bound<&[u8]>,
    end: &[u8],
    limit: usize,
) -> Result<Vec<KeyValue>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let mut entries = Vec::with_capacity(limit.min(1024));
    // The bound-pair form needs an explicit key type for redb to infer KR.
    let range = table
        .range::<&[u8]>((start, Bound::Excluded(end)))
        .map_err(|e| StorageError::Internal(e.to_string()))?;
    for item in range {
        if entries.len() == limit {
            break;
        }
        let (key, value) = item.map_err(|e| StorageError::Internal(e.to_string()))?;
        if let Some((_, user_key)) = decode_key(key.value()) {
            entries.push((user_key.to_vec(), value.value().to_vec()));
        }
    }
    Ok(entries)
}

impl Transaction for RedbTransaction {
    type Cursor<'a>
        = RedbCursor<'a>
    where
        Self: 'a;

    fn get(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let encoded = encode_key(table, key);
        match self {
            Self::Read(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => read_value(&t, &encoded),
                // A table that was never written to is just empty.
                Err(TableError::TableDoesNotExist(_)) => Ok(None),
                Err(e) => Err(StorageError::Internal(e.to_string())),
            },
            Self::Write(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => read_value(&t, &encoded),
                Err(e) => Err(StorageError::Internal(e.to_string())),
            },
        }
    }

    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        let encoded = encode_key(table, key);
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx
                    .open_table(DATA_TABLE)
                    .map_err(|e| StorageError::Internal(e.to_string()))?;
                t.insert(encoded.as_slice(), value)
                    .map_err(|e| StorageError::Internal(e.to_string()))?;
                Ok(())
            }
        }
    }

    fn delete(&mut self, table: &str, key: &[u8]) -> Result<bool, StorageError> {
        let encoded = encode_key(table, key);
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx
                    .open_table(DATA_TABLE)
                    .map_err(|e| StorageError::Internal(e.to_string()))?;
                let removed = t
                    .remove(encoded.as_slice())
                    .map_err(|e| StorageError::Internal(e.to_string()))?;
                Ok(removed.is_some())
            }
        }
    }

    fn cursor(&self, table: &str) -> Result<Self::Cursor<'_>, StorageError> {
        Ok(RedbCursor::new(self, table))
    }

    fn commit(self) -> Result<(), StorageError> {
        match self {
            // Read transactions have nothing to commit.
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx
                .commit()
                .map_err(|e| StorageError::Transaction(e.to_string())),
        }
    }

    fn rollback(self) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx
                .abort()
                .map_err(|e| StorageError::Transaction(e.to_string())),
        }
    }

    fn is_read_only(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}

/// A batched forward cursor over one logical table.
///
/// Entries are fetched [`DEFAULT_BATCH_SIZE`] at a time; when a batch is
/// exhausted the next one continues after its last key, so the cursor
/// never holds more than one batch in memory.
pub struct RedbCursor<'a> {
    tx: &'a RedbTransaction,
    table: String,
    batch: Vec<KeyValue>,
    /// Index into `batch`; `None` means not yet positioned.
    batch_position: Option<usize>,
    /// Whether the last fetch filled a whole batch (more may follow).
    has_more: bool,
    batch_size: usize,
}

impl<'a> RedbCursor<'a> {
    fn new(tx: &'a RedbTransaction, table: &str) -> Self {
        Self {
            tx,
            table: table.to_string(),
            batch: Vec::new(),
            batch_position: None,
            has_more: true,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    fn load_batch(&mut self, start: Bound<Vec<u8>>) -> Result<(), StorageError> {
        let start_ref = match &start {
            Bound::Included(k) => Bound::Included(k.as_slice()),
            Bound::Excluded(k) => Bound::Excluded(k.as_slice()),
            Bound::Unbounded => Bound::Unbounded,
        };
        self.batch = self.tx.fetch_batch(&self.table, start_ref, self.batch_size)?;
        self.has_more = self.batch.len() == self.batch_size;
        Ok(())
    }

    fn cloned_current(&self) -> Option<KeyValue> {
        self.batch_position
            .and_then(|pos| self.batch.get(pos))
            .cloned()
    }
}

impl Cursor for RedbCursor<'_> {
    fn seek(&mut self, key: &[u8]) -> CursorResult {
        let start = encode_key(&self.table, key);
        self.load_batch(Bound::Included(start))?;
        self.batch_position = Some(0);
        Ok(self.cloned_current())
    }

    fn seek_first(&mut self) -> CursorResult {
        let start = table_start_key(&self.table);
        self.load_batch(Bound::Included(start))?;
        self.batch_position = Some(0);
        Ok(self.cloned_current())
    }

    fn next(&mut self) -> CursorResult {
        let Some(pos) = self.batch_position else {
            return self.seek_first();
        };

        let next_pos = pos + 1;
        if next_pos < self.batch.len() {
            self.batch_position = Some(next_pos);
            return Ok(self.cloned_current());
        }

        if !self.has_more || self.batch.is_empty() {
            // Exhausted; park past the end so `current` returns None.
            self.batch_position = Some(self.batch.len());
            return Ok(None);
        }

        // Continue after the last key of the consumed batch.
        let last_key = encode_key(&self.table, &self.batch[self.batch.len() - 1].0);
        self.load_batch(Bound::Excluded(last_key))?;
        self.batch_position = Some(0);
        Ok(self.cloned_current())
    }

    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.batch_position
            .and_then(|pos| self.batch.get(pos))
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}
