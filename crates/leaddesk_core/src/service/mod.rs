//! Record services: one owner per entity collection.
//!
//! # Responsibility
//! - Expose the CRUD + query surface the presentation layer calls.
//! - Apply simulated latency and structured logging uniformly.
//!
//! # Invariants
//! - A service is the sole mutation path for its store.
//! - `create` never fails; `get`/`update`/`delete` fail only with
//!   `RepoError::NotFound`.

pub mod activity_service;
pub mod contact_service;
pub mod deal_service;
pub mod meeting_service;

pub use activity_service::ActivityService;
pub use contact_service::ContactService;
pub use deal_service::DealService;
pub use meeting_service::MeetingService;
