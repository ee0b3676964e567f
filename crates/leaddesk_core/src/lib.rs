//! Core domain logic for LeadDesk, a CRM data layer.
//! This crate is the single source of truth for record contracts and
//! pipeline invariants; presentation layers stay thin on top of it.

pub mod board;
pub mod fixtures;
pub mod latency;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use board::{DragSource, KanbanController, StageBoard, StageChange};
pub use fixtures::{seed, FixtureError, SeedData};
pub use latency::{Latency, LatencyProfile, ServiceOp};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityPatch, ActivityType, NewActivity};
pub use model::contact::{Contact, ContactPatch, ContactStatus, NewContact};
pub use model::deal::{Deal, DealPatch, DealStage, NewDeal};
pub use model::meeting::{Meeting, MeetingPatch, MeetingPriority, MeetingType, NewMeeting};
pub use model::{EntityKind, EpochMs, RecordId};
pub use query::{
    filter_activities, filter_contacts, resolve_link, unique_tags, ContactFilter,
    DashboardMetrics, Linked,
};
pub use repo::{MemStore, Record, RecordStore, RepoError, RepoResult};
pub use service::{ActivityService, ContactService, DealService, MeetingService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
