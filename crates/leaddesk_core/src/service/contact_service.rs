//! Contact use-case service.
//!
//! # Responsibility
//! - Own the contact store and expose CRUD plus search/tag queries.
//!
//! # Invariants
//! - Field validation is a presentation concern; any patch shape is
//!   accepted and stored verbatim.

use log::debug;

use crate::latency::{Latency, ServiceOp};
use crate::model::contact::{Contact, ContactPatch, NewContact};
use crate::repo::{MemStore, RecordStore, RepoResult};

/// Sole access point for the contact collection.
pub struct ContactService<S: RecordStore<Contact> = MemStore<Contact>> {
    store: S,
    latency: Latency,
}

impl ContactService {
    /// Creates a service over an empty in-memory store with no delay.
    pub fn new() -> Self {
        Self::with_store(MemStore::new(), Latency::None)
    }

    /// Creates a service over a seeded in-memory store.
    pub fn seeded(records: Vec<Contact>, latency: Latency) -> Self {
        Self::with_store(MemStore::seeded(records), latency)
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore<Contact>> ContactService<S> {
    /// Creates a service over an injected store implementation.
    pub fn with_store(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Returns every contact in insertion order.
    pub fn list(&self) -> Vec<Contact> {
        self.latency.pause(ServiceOp::List);
        self.store.list()
    }

    /// Returns one contact by id.
    pub fn get(&self, id: &str) -> RepoResult<Contact> {
        self.latency.pause(ServiceOp::Get);
        self.store.get(id)
    }

    /// Creates a contact, stamping id, creation and last-contact times.
    pub fn create(&mut self, input: NewContact) -> Contact {
        self.latency.pause(ServiceOp::Create);
        let record = input.into_record();
        debug!(
            "event=contact_created module=service id={} company={}",
            record.id, record.company
        );
        self.store.insert(record.clone());
        record
    }

    /// Shallow-merges a patch over an existing contact.
    pub fn update(&mut self, id: &str, patch: &ContactPatch) -> RepoResult<Contact> {
        self.latency.pause(ServiceOp::Update);
        let mut record = self.store.get(id)?;
        patch.apply(&mut record);
        debug!("event=contact_updated module=service id={id}");
        self.store.replace(record)
    }

    /// Removes a contact and returns the removed record.
    pub fn delete(&mut self, id: &str) -> RepoResult<Contact> {
        self.latency.pause(ServiceOp::Delete);
        let removed = self.store.remove(id)?;
        debug!("event=contact_deleted module=service id={id}");
        Ok(removed)
    }

    /// Case-insensitive substring search over name, email and company.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        self.latency.pause(ServiceOp::Query);
        let needle = query.to_lowercase();
        self.store
            .snapshot()
            .iter()
            .filter(|contact| {
                contact.name.to_lowercase().contains(&needle)
                    || contact.email.to_lowercase().contains(&needle)
                    || contact.company.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Returns contacts carrying the exact tag.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Contact> {
        self.latency.pause(ServiceOp::Query);
        self.store
            .snapshot()
            .iter()
            .filter(|contact| contact.tags.iter().any(|candidate| candidate == tag))
            .cloned()
            .collect()
    }
}
