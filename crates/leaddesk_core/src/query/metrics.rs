//! Dashboard aggregates.

use crate::model::contact::Contact;
use crate::model::deal::{Deal, DealStage};

/// Snapshot aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_contacts: usize,
    /// Deals still in play: stage is neither won nor lost.
    pub active_deals: usize,
    /// Sum of deal value over active deals.
    pub pipeline_value: f64,
    pub won_deals: usize,
}

impl DashboardMetrics {
    /// Computes all aggregates from current snapshots.
    pub fn compute(contacts: &[Contact], deals: &[Deal]) -> Self {
        let active: Vec<&Deal> = deals.iter().filter(|deal| deal.stage.is_open()).collect();
        Self {
            total_contacts: contacts.len(),
            active_deals: active.len(),
            pipeline_value: active.iter().map(|deal| deal.value).sum(),
            won_deals: deals
                .iter()
                .filter(|deal| deal.stage == DealStage::Won)
                .count(),
        }
    }
}
