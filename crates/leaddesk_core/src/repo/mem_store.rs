//! Vec-backed in-memory record store.
//!
//! # Responsibility
//! - Hold one entity collection for the process lifetime.
//! - Implement the [`RecordStore`] contract with linear id lookup, which is
//!   appropriate at mock-data scale.
//!
//! # Invariants
//! - Insertion order is preserved; no implicit reordering on update.
//! - Removal is immediate and irreversible; there is no tombstone state.

use crate::repo::{Record, RecordStore, RepoError, RepoResult};

/// In-memory store for one record collection.
#[derive(Debug, Clone, Default)]
pub struct MemStore<T> {
    records: Vec<T>,
}

impl<T: Record> MemStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with seed records, e.g. from fixtures.
    pub fn seeded(records: Vec<T>) -> Self {
        Self { records }
    }

    fn position(&self, id: &str) -> RepoResult<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| RepoError::not_found(T::KIND, id))
    }
}

impl<T: Record> RecordStore<T> for MemStore<T> {
    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn get(&self, id: &str) -> RepoResult<T> {
        let index = self.position(id)?;
        Ok(self.records[index].clone())
    }

    fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    fn replace(&mut self, record: T) -> RepoResult<T> {
        let index = self.position(record.id())?;
        self.records[index] = record.clone();
        Ok(record)
    }

    fn remove(&mut self, id: &str) -> RepoResult<T> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    fn snapshot(&self) -> &[T] {
        &self.records
    }
}
