//! Simulated network latency for service operations.
//!
//! # Responsibility
//! - Stand in for the round-trip delay of a future real backend without
//!   hard-coding sleeps into service logic.
//!
//! # Invariants
//! - `Latency::None` never blocks; tests run with it.
//! - The pause happens before the store is touched, so a caller observes
//!   request-then-result timing like a remote call.

use std::thread;
use std::time::Duration;

/// Operation bucket used to pick the per-call delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOp {
    List,
    Get,
    Create,
    Update,
    Delete,
    /// Derived-view reads: search, tag filter, by-stage, by-contact, range.
    Query,
}

/// Per-operation delay table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub query: Duration,
}

impl LatencyProfile {
    /// Delays matching the original mock backend timings.
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
            query: Duration::from_millis(200),
        }
    }

    fn for_op(&self, op: ServiceOp) -> Duration {
        match op {
            ServiceOp::List => self.list,
            ServiceOp::Get => self.get,
            ServiceOp::Create => self.create,
            ServiceOp::Update => self.update,
            ServiceOp::Delete => self.delete,
            ServiceOp::Query => self.query,
        }
    }
}

/// Pluggable delay strategy a service consults before each operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Latency {
    /// No artificial delay. The default, and what tests use.
    #[default]
    None,
    /// Fixed per-operation delays from a profile.
    Fixed(LatencyProfile),
}

impl Latency {
    /// Shorthand for the original demo timings.
    pub fn simulated() -> Self {
        Self::Fixed(LatencyProfile::simulated())
    }

    /// Blocks the calling thread for the configured delay, if any.
    pub fn pause(&self, op: ServiceOp) {
        match self {
            Self::None => {}
            Self::Fixed(profile) => {
                let delay = profile.for_op(op);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Latency, LatencyProfile, ServiceOp};
    use std::time::{Duration, Instant};

    #[test]
    fn none_does_not_block() {
        let started = Instant::now();
        Latency::None.pause(ServiceOp::Create);
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn fixed_profile_waits_for_the_op_bucket() {
        let mut profile = LatencyProfile::simulated();
        profile.get = Duration::from_millis(20);
        let latency = Latency::Fixed(profile);

        let started = Instant::now();
        latency.pause(ServiceOp::Get);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn simulated_profile_matches_original_timings() {
        let profile = LatencyProfile::simulated();
        assert_eq!(profile.list, Duration::from_millis(300));
        assert_eq!(profile.create, Duration::from_millis(400));
        assert_eq!(profile.update, Duration::from_millis(350));
        assert_eq!(profile.delete, Duration::from_millis(250));
    }
}
