//! Activity domain model.
//!
//! # Responsibility
//! - Define the timeline activity record and its patch shape.
//!
//! # Invariants
//! - `timestamp` is set exactly once at creation; the patch type carries no
//!   timestamp field, so it cannot be altered through `update`.
//! - `contact_id`/`deal_id` are unvalidated references.

use serde::{Deserialize, Serialize};

use crate::model::{new_record_id, now_epoch_ms, EntityKind, EpochMs, RecordId};
use crate::repo::Record;

/// Kind of interaction an activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    Note,
    Task,
}

/// One timeline entry: something that happened around a contact or deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    /// Serialized as `type` to match the seed fixture shape.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    pub contact_id: Option<RecordId>,
    pub deal_id: Option<RecordId>,
    /// Creation instant; immutable for the record's lifetime.
    pub timestamp: EpochMs,
}

impl Record for Activity {
    const KIND: EntityKind = EntityKind::Activity;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for [`crate::service::ActivityService::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
    #[serde(default)]
    pub deal_id: Option<RecordId>,
}

impl NewActivity {
    pub(crate) fn into_record(self) -> Activity {
        Activity {
            id: new_record_id(),
            kind: self.kind,
            description: self.description,
            contact_id: self.contact_id,
            deal_id: self.deal_id,
            timestamp: now_epoch_ms(),
        }
    }
}

/// Shallow-merge patch. No timestamp field: creation time is immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPatch {
    pub kind: Option<ActivityType>,
    pub description: Option<String>,
    pub contact_id: Option<Option<RecordId>>,
    pub deal_id: Option<Option<RecordId>>,
}

impl ActivityPatch {
    /// Applies the patch over an existing record in place.
    pub fn apply(&self, record: &mut Activity) {
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(contact_id) = &self.contact_id {
            record.contact_id = contact_id.clone();
        }
        if let Some(deal_id) = &self.deal_id {
            record.deal_id = deal_id.clone();
        }
    }
}
