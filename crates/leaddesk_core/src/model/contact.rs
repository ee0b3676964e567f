//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record, its lifecycle status and patch shape.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - `tags` is treated as a set by queries; the store does not deduplicate.

use serde::{Deserialize, Serialize};

use crate::model::{new_record_id, now_epoch_ms, EntityKind, EpochMs, RecordId};
use crate::repo::Record;

/// Lifecycle status of a contact in the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Captured but not yet qualified.
    Lead,
    /// Qualified and in active conversation.
    Prospect,
    /// Paying or otherwise engaged customer.
    Active,
    /// Dormant relationship.
    Inactive,
}

/// One person or organization contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Free-form labels; queries treat membership as set semantics.
    pub tags: Vec<String>,
    pub status: ContactStatus,
    pub created_at: EpochMs,
    /// Last time this contact was touched by any interaction.
    pub last_contact: EpochMs,
}

impl Record for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for [`crate::service::ContactService::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: ContactStatus,
}

impl NewContact {
    /// Materializes a full record: fresh id, creation and last-contact
    /// timestamps both stamped to now.
    pub(crate) fn into_record(self) -> Contact {
        let now = now_epoch_ms();
        Contact {
            id: new_record_id(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            tags: self.tags,
            status: self.status,
            created_at: now,
            last_contact: now,
        }
    }
}

/// Shallow-merge patch: present fields overwrite, absent fields are kept.
///
/// `id` and `created_at` are deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ContactStatus>,
    pub last_contact: Option<EpochMs>,
}

impl ContactPatch {
    /// Applies the patch over an existing record in place.
    pub fn apply(&self, record: &mut Contact) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(company) = &self.company {
            record.company = company.clone();
        }
        if let Some(tags) = &self.tags {
            record.tags = tags.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(last_contact) = self.last_contact {
            record.last_contact = last_contact;
        }
    }
}
