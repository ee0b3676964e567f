//! Meeting domain model.
//!
//! # Responsibility
//! - Define the calendar meeting record, its kind/priority enums and patch
//!   shape.
//!
//! # Invariants
//! - `end` must be strictly after `start`; `validate` is the checkpoint for
//!   seed and import paths.
//! - `updated_at` is bumped by the service on every update.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::{new_record_id, now_epoch_ms, EntityKind, EpochMs, RecordId};
use crate::repo::Record;

/// Category of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    Meeting,
    ClientMeeting,
    Presentation,
    FollowUp,
    Conference,
}

/// Scheduling priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingPriority {
    Low,
    Medium,
    High,
}

/// One scheduled calendar meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Attendee email addresses in invitation order.
    pub attendees: Vec<String>,
    pub start: EpochMs,
    /// Must be strictly after `start`.
    pub end: EpochMs,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: MeetingType,
    pub priority: MeetingPriority,
    pub created_at: EpochMs,
    pub updated_at: EpochMs,
}

/// Invalid meeting shape detected by [`Meeting::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingValidationError {
    EmptyTitle,
    EndNotAfterStart { start: EpochMs, end: EpochMs },
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "meeting title must not be empty"),
            Self::EndNotAfterStart { start, end } => {
                write!(f, "meeting end ({end}) must be after start ({start})")
            }
        }
    }
}

impl Error for MeetingValidationError {}

impl Meeting {
    /// Checks model invariants. Used by seed/import paths; CRUD services
    /// accept records uncritically per the service contract.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.title.trim().is_empty() {
            return Err(MeetingValidationError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(MeetingValidationError::EndNotAfterStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Record for Meeting {
    const KIND: EntityKind = EntityKind::Meeting;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for [`crate::service::MeetingService::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub start: EpochMs,
    pub end: EpochMs,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: MeetingType,
    pub priority: MeetingPriority,
}

impl NewMeeting {
    pub(crate) fn into_record(self) -> Meeting {
        let now = now_epoch_ms();
        Meeting {
            id: new_record_id(),
            title: self.title,
            description: self.description,
            attendees: self.attendees,
            start: self.start,
            end: self.end,
            location: self.location,
            kind: self.kind,
            priority: self.priority,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shallow-merge patch; `updated_at` is stamped by the service, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub attendees: Option<Vec<String>>,
    pub start: Option<EpochMs>,
    pub end: Option<EpochMs>,
    pub location: Option<Option<String>>,
    pub kind: Option<MeetingType>,
    pub priority: Option<MeetingPriority>,
}

impl MeetingPatch {
    /// Applies the patch over an existing record in place.
    pub fn apply(&self, record: &mut Meeting) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(attendees) = &self.attendees {
            record.attendees = attendees.clone();
        }
        if let Some(start) = self.start {
            record.start = start;
        }
        if let Some(end) = self.end {
            record.end = end;
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
    }
}
