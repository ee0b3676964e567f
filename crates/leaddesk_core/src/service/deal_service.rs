//! Deal use-case service.
//!
//! # Responsibility
//! - Own the deal store and expose CRUD plus stage/contact queries.
//! - Provide the stage-transition entry point the Kanban board commits
//!   through.
//!
//! # Invariants
//! - New deals default to the `lead` stage when none is given.
//! - `contact_id` is stored unchecked; unknown references are resolved by
//!   the query layer.

use log::debug;

use crate::latency::{Latency, ServiceOp};
use crate::model::deal::{Deal, DealPatch, DealStage, NewDeal};
use crate::repo::{MemStore, RecordStore, RepoResult};

/// Sole access point for the deal collection.
pub struct DealService<S: RecordStore<Deal> = MemStore<Deal>> {
    store: S,
    latency: Latency,
}

impl DealService {
    /// Creates a service over an empty in-memory store with no delay.
    pub fn new() -> Self {
        Self::with_store(MemStore::new(), Latency::None)
    }

    /// Creates a service over a seeded in-memory store.
    pub fn seeded(records: Vec<Deal>, latency: Latency) -> Self {
        Self::with_store(MemStore::seeded(records), latency)
    }
}

impl Default for DealService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore<Deal>> DealService<S> {
    /// Creates a service over an injected store implementation.
    pub fn with_store(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Returns every deal in insertion order.
    pub fn list(&self) -> Vec<Deal> {
        self.latency.pause(ServiceOp::List);
        self.store.list()
    }

    /// Returns one deal by id.
    pub fn get(&self, id: &str) -> RepoResult<Deal> {
        self.latency.pause(ServiceOp::Get);
        self.store.get(id)
    }

    /// Creates a deal, stamping id and creation time.
    pub fn create(&mut self, input: NewDeal) -> Deal {
        self.latency.pause(ServiceOp::Create);
        let record = input.into_record();
        debug!(
            "event=deal_created module=service id={} stage={} value={}",
            record.id,
            record.stage.as_str(),
            record.value
        );
        self.store.insert(record.clone());
        record
    }

    /// Shallow-merges a patch over an existing deal.
    pub fn update(&mut self, id: &str, patch: &DealPatch) -> RepoResult<Deal> {
        self.latency.pause(ServiceOp::Update);
        let mut record = self.store.get(id)?;
        patch.apply(&mut record);
        debug!("event=deal_updated module=service id={id}");
        self.store.replace(record)
    }

    /// Removes a deal and returns the removed record.
    pub fn delete(&mut self, id: &str) -> RepoResult<Deal> {
        self.latency.pause(ServiceOp::Delete);
        let removed = self.store.remove(id)?;
        debug!("event=deal_deleted module=service id={id}");
        Ok(removed)
    }

    /// Returns deals currently in the given stage.
    pub fn get_by_stage(&self, stage: DealStage) -> Vec<Deal> {
        self.latency.pause(ServiceOp::Query);
        self.store
            .snapshot()
            .iter()
            .filter(|deal| deal.stage == stage)
            .cloned()
            .collect()
    }

    /// Returns deals linked to the given contact id.
    pub fn get_by_contact(&self, contact_id: &str) -> Vec<Deal> {
        self.latency.pause(ServiceOp::Query);
        self.store
            .snapshot()
            .iter()
            .filter(|deal| deal.contact_id.as_deref() == Some(contact_id))
            .cloned()
            .collect()
    }

    /// Moves a deal to a new pipeline stage.
    ///
    /// Equivalent to an update patching only `stage`; kept as a named entry
    /// point because stage transitions are the board's commit path.
    pub fn update_stage(&mut self, id: &str, stage: DealStage) -> RepoResult<Deal> {
        self.latency.pause(ServiceOp::Update);
        let mut record = self.store.get(id)?;
        let previous = record.stage;
        record.stage = stage;
        debug!(
            "event=deal_stage_changed module=service id={id} from={} to={}",
            previous.as_str(),
            stage.as_str()
        );
        self.store.replace(record)
    }
}
