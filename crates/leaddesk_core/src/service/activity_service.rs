//! Activity use-case service.
//!
//! # Responsibility
//! - Own the activity store and expose the newest-first timeline reads.
//!
//! # Invariants
//! - Timeline reads (`list`, `get_by_contact`, `get_by_deal`, `get_recent`)
//!   return records ordered by timestamp descending.
//! - An activity's timestamp is stamped once at creation and can never be
//!   changed; the patch type has no timestamp field.

use std::cmp::Reverse;

use log::debug;

use crate::latency::{Latency, ServiceOp};
use crate::model::activity::{Activity, ActivityPatch, NewActivity};
use crate::repo::{MemStore, RecordStore, RepoResult};

/// Sole access point for the activity collection.
pub struct ActivityService<S: RecordStore<Activity> = MemStore<Activity>> {
    store: S,
    latency: Latency,
}

impl ActivityService {
    /// Creates a service over an empty in-memory store with no delay.
    pub fn new() -> Self {
        Self::with_store(MemStore::new(), Latency::None)
    }

    /// Creates a service over a seeded in-memory store.
    pub fn seeded(records: Vec<Activity>, latency: Latency) -> Self {
        Self::with_store(MemStore::seeded(records), latency)
    }
}

impl Default for ActivityService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore<Activity>> ActivityService<S> {
    /// Creates a service over an injected store implementation.
    pub fn with_store(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Returns every activity, newest first.
    pub fn list(&self) -> Vec<Activity> {
        self.latency.pause(ServiceOp::List);
        newest_first(self.store.list())
    }

    /// Returns one activity by id.
    pub fn get(&self, id: &str) -> RepoResult<Activity> {
        self.latency.pause(ServiceOp::Get);
        self.store.get(id)
    }

    /// Creates an activity, stamping id and the immutable timestamp.
    pub fn create(&mut self, input: NewActivity) -> Activity {
        self.latency.pause(ServiceOp::Create);
        let record = input.into_record();
        debug!(
            "event=activity_created module=service id={} kind={:?}",
            record.id, record.kind
        );
        self.store.insert(record.clone());
        record
    }

    /// Shallow-merges a patch over an existing activity.
    pub fn update(&mut self, id: &str, patch: &ActivityPatch) -> RepoResult<Activity> {
        self.latency.pause(ServiceOp::Update);
        let mut record = self.store.get(id)?;
        patch.apply(&mut record);
        debug!("event=activity_updated module=service id={id}");
        self.store.replace(record)
    }

    /// Removes an activity and returns the removed record.
    pub fn delete(&mut self, id: &str) -> RepoResult<Activity> {
        self.latency.pause(ServiceOp::Delete);
        let removed = self.store.remove(id)?;
        debug!("event=activity_deleted module=service id={id}");
        Ok(removed)
    }

    /// Returns activities linked to the given contact, newest first.
    pub fn get_by_contact(&self, contact_id: &str) -> Vec<Activity> {
        self.latency.pause(ServiceOp::Query);
        newest_first(
            self.store
                .snapshot()
                .iter()
                .filter(|activity| activity.contact_id.as_deref() == Some(contact_id))
                .cloned()
                .collect(),
        )
    }

    /// Returns activities linked to the given deal, newest first.
    pub fn get_by_deal(&self, deal_id: &str) -> Vec<Activity> {
        self.latency.pause(ServiceOp::Query);
        newest_first(
            self.store
                .snapshot()
                .iter()
                .filter(|activity| activity.deal_id.as_deref() == Some(deal_id))
                .cloned()
                .collect(),
        )
    }

    /// Returns at most `limit` activities, newest first.
    pub fn get_recent(&self, limit: usize) -> Vec<Activity> {
        self.latency.pause(ServiceOp::Query);
        let mut sorted = newest_first(self.store.list());
        sorted.truncate(limit);
        sorted
    }
}

fn newest_first(mut records: Vec<Activity>) -> Vec<Activity> {
    // Stable sort: same-timestamp records keep their insertion order.
    records.sort_by_key(|activity| Reverse(activity.timestamp));
    records
}
