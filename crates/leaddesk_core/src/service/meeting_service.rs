//! Meeting use-case service.
//!
//! # Responsibility
//! - Own the meeting store and expose CRUD plus calendar range queries.
//!
//! # Invariants
//! - Every successful `update` bumps `updated_at` to now, even when the
//!   patch is empty.
//! - Range queries filter on the meeting start instant, inclusive at both
//!   ends.

use log::debug;

use crate::latency::{Latency, ServiceOp};
use crate::model::meeting::{Meeting, MeetingPatch, NewMeeting};
use crate::model::{now_epoch_ms, EpochMs};
use crate::repo::{MemStore, RecordStore, RepoResult};

/// Sole access point for the meeting collection.
pub struct MeetingService<S: RecordStore<Meeting> = MemStore<Meeting>> {
    store: S,
    latency: Latency,
}

impl MeetingService {
    /// Creates a service over an empty in-memory store with no delay.
    pub fn new() -> Self {
        Self::with_store(MemStore::new(), Latency::None)
    }

    /// Creates a service over a seeded in-memory store.
    pub fn seeded(records: Vec<Meeting>, latency: Latency) -> Self {
        Self::with_store(MemStore::seeded(records), latency)
    }
}

impl Default for MeetingService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore<Meeting>> MeetingService<S> {
    /// Creates a service over an injected store implementation.
    pub fn with_store(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Returns every meeting in insertion order.
    pub fn list(&self) -> Vec<Meeting> {
        self.latency.pause(ServiceOp::List);
        self.store.list()
    }

    /// Returns one meeting by id.
    pub fn get(&self, id: &str) -> RepoResult<Meeting> {
        self.latency.pause(ServiceOp::Get);
        self.store.get(id)
    }

    /// Creates a meeting, stamping id and both audit timestamps.
    pub fn create(&mut self, input: NewMeeting) -> Meeting {
        self.latency.pause(ServiceOp::Create);
        let record = input.into_record();
        debug!(
            "event=meeting_created module=service id={} start={}",
            record.id, record.start
        );
        self.store.insert(record.clone());
        record
    }

    /// Shallow-merges a patch over an existing meeting and bumps
    /// `updated_at`.
    pub fn update(&mut self, id: &str, patch: &MeetingPatch) -> RepoResult<Meeting> {
        self.latency.pause(ServiceOp::Update);
        let mut record = self.store.get(id)?;
        patch.apply(&mut record);
        record.updated_at = now_epoch_ms();
        debug!("event=meeting_updated module=service id={id}");
        self.store.replace(record)
    }

    /// Removes a meeting and returns the removed record.
    pub fn delete(&mut self, id: &str) -> RepoResult<Meeting> {
        self.latency.pause(ServiceOp::Delete);
        let removed = self.store.remove(id)?;
        debug!("event=meeting_deleted module=service id={id}");
        Ok(removed)
    }

    /// Returns meetings whose start falls inside `[start, end]`.
    pub fn get_by_date_range(&self, start: EpochMs, end: EpochMs) -> Vec<Meeting> {
        self.latency.pause(ServiceOp::Query);
        self.store
            .snapshot()
            .iter()
            .filter(|meeting| meeting.start >= start && meeting.start <= end)
            .cloned()
            .collect()
    }
}
