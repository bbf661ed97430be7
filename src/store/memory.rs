//! # In-Memory Record Store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::backend::RecordStore;
use super::errors::{StoreError, StoreResult};
use crate::record::Record;

/// Ephemeral store keeping records in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Record>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("record lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Record>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("record lock poisoned".to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Record>> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    fn put(&self, record: Record) -> StoreResult<()> {
        let mut records = self.write()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            // Replace in place so ordering is stable
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.write()?;
        match records.iter().position(|r| r.id == id) {
            Some(pos) => {
                records.remove(pos);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
