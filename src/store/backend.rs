//! # Record Store Trait

use super::errors::StoreResult;
use crate::record::Record;

/// Backend trait for record storage
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Load every record in storage order
    fn load_all(&self) -> StoreResult<Vec<Record>>;

    /// Fetch one record by id
    fn get(&self, id: &str) -> StoreResult<Option<Record>>;

    /// Insert a record, replacing any record with the same id
    fn put(&self, record: Record) -> StoreResult<()>;

    /// Delete a record by id
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize>;

    /// Check whether the store holds no records
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
