//! Derived views over record snapshots.
//!
//! # Responsibility
//! - Compute filters, aggregates and reference lookups without mutating
//!   any store.
//!
//! # Invariants
//! - Every function here is pure over the slices it receives.
//! - Input order is preserved by all filters.

pub mod filter;
pub mod link;
pub mod metrics;

pub use filter::{filter_activities, filter_contacts, unique_tags, ContactFilter};
pub use link::{resolve_link, Linked};
pub use metrics::DashboardMetrics;
