//! Domain records for the CRM core.
//!
//! # Responsibility
//! - Define the canonical shapes for contacts, deals, activities and
//!   meetings, plus their patch and new-record companions.
//! - Own record identity and timestamp generation.
//!
//! # Invariants
//! - Every record is identified by an opaque, never-reused `RecordId`.
//! - Enum fields carry the full fixed variant set; an out-of-range stage or
//!   status is unrepresentable.

use uuid::Uuid;

pub mod activity;
pub mod contact;
pub mod deal;
pub mod meeting;

/// Opaque stable identifier shared by all record types.
///
/// Kept as a string alias so seed fixtures can carry short human ids while
/// generated records use UUIDs.
pub type RecordId = String;

/// Unix epoch milliseconds, the timestamp convention across the core.
pub type EpochMs = i64;

/// The four record collections the core manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Contact,
    Deal,
    Activity,
    Meeting,
}

impl EntityKind {
    /// Stable lowercase label used in errors and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Deal => "deal",
            Self::Activity => "activity",
            Self::Meeting => "meeting",
        }
    }
}

/// Generates a fresh record id.
///
/// UUIDs replace the original wall-clock-epoch scheme, which could collide
/// under rapid successive creates within one millisecond.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Returns the current wall-clock time in epoch milliseconds.
///
/// Clamps to zero for clocks set before the Unix epoch rather than failing.
pub fn now_epoch_ms() -> EpochMs {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
