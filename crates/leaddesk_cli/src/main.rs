//! CLI smoke entry point.
//!
//! # Responsibility
//! - Seed the services from the embedded fixtures and print the dashboard
//!   snapshot, verifying `leaddesk_core` wiring end to end.

use std::process::ExitCode;

use leaddesk_core::{
    ActivityService, ContactService, DashboardMetrics, DealService, Latency, MeetingService,
    StageBoard,
};

fn main() -> ExitCode {
    let seed = match leaddesk_core::seed() {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("failed to load seed fixtures: {err}");
            return ExitCode::FAILURE;
        }
    };

    // The smoke binary keeps the simulated round-trip delays so it behaves
    // like a caller of the future real backend.
    let contacts = ContactService::seeded(seed.contacts, Latency::simulated());
    let deals = DealService::seeded(seed.deals, Latency::simulated());
    let activities = ActivityService::seeded(seed.activities, Latency::simulated());
    let meetings = MeetingService::seeded(seed.meetings, Latency::simulated());

    println!("leaddesk_core version={}", leaddesk_core::core_version());

    let metrics = DashboardMetrics::compute(&contacts.list(), &deals.list());
    println!(
        "contacts={} active_deals={} pipeline_value={:.2} won_deals={}",
        metrics.total_contacts, metrics.active_deals, metrics.pipeline_value, metrics.won_deals
    );

    for (stage, bucket) in StageBoard::group(&deals.list()).columns() {
        println!("{:<12} {}", stage.display_name(), bucket.len());
    }

    println!(
        "activities={} meetings={}",
        activities.list().len(),
        meetings.list().len()
    );

    ExitCode::SUCCESS
}
