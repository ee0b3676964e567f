//! Record store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the generic store seam every entity collection sits behind.
//! - Keep collection ownership explicit: each store instance is owned by
//!   exactly one service, never shared module-level state.
//!
//! # Invariants
//! - Reads hand out defensive clones; the backing collection is only
//!   reachable through the store API.
//! - `NotFound` is the only semantic error a store raises.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::{EntityKind, RecordId};

pub mod mem_store;

pub use mem_store::MemStore;

pub type RepoResult<T> = Result<T, RepoError>;

/// Domain error for record access. Pure-memory stores have no transport or
/// conflict failures, so an absent id is the whole taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound { entity: EntityKind, id: RecordId },
}

impl RepoError {
    pub(crate) fn not_found(entity: EntityKind, id: impl Into<RecordId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{} not found: {id}", entity.as_str()),
        }
    }
}

impl Error for RepoError {}

/// Implemented by every domain record the store layer can hold.
pub trait Record: Clone {
    /// Collection this record belongs to; used for error and log labels.
    const KIND: EntityKind;

    /// Stable opaque id of this record.
    fn id(&self) -> &str;
}

/// Generic store contract for one record collection.
///
/// Services are generic over this trait so tests can inject pre-seeded
/// stores and future backends can replace the in-memory one without
/// touching service code.
pub trait RecordStore<T: Record> {
    /// Returns a defensive copy of every record in insertion order.
    fn list(&self) -> Vec<T>;

    /// Returns a copy of the record with the given id.
    fn get(&self, id: &str) -> RepoResult<T>;

    /// Appends a record. The caller guarantees id uniqueness.
    fn insert(&mut self, record: T);

    /// Replaces the stored record with the same id.
    fn replace(&mut self, record: T) -> RepoResult<T>;

    /// Removes and returns the record with the given id.
    fn remove(&mut self, id: &str) -> RepoResult<T>;

    /// Borrow of the live collection for read-only derived views.
    fn snapshot(&self) -> &[T];

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}
