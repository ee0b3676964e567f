//! Pipeline board: stage grouping and the Kanban drag controller.
//!
//! # Responsibility
//! - Partition deals into per-stage columns for board rendering.
//! - Track the single in-flight drag source and decide whether a drop
//!   becomes a stage transition.
//!
//! # Invariants
//! - Every deal lands in exactly one column; empty stages still appear.
//! - At most one drag source exists; a second drag-start replaces it
//!   (last drag-start wins).
//! - The drag source is cleared by every drop, whether or not the commit
//!   succeeds.

use crate::model::deal::{Deal, DealStage};
use crate::model::RecordId;
use crate::repo::{RecordStore, RepoResult};
use crate::service::DealService;

/// Deals partitioned into one column per pipeline stage, in stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct StageBoard {
    columns: Vec<(DealStage, Vec<Deal>)>,
}

impl StageBoard {
    /// Buckets the given deals by stage. Stages with no deals are present
    /// as empty columns so the board renders a full pipeline.
    pub fn group(deals: &[Deal]) -> Self {
        let columns = DealStage::ALL
            .iter()
            .map(|&stage| {
                let bucket: Vec<Deal> = deals
                    .iter()
                    .filter(|deal| deal.stage == stage)
                    .cloned()
                    .collect();
                (stage, bucket)
            })
            .collect();
        Self { columns }
    }

    /// Columns in fixed pipeline order.
    pub fn columns(&self) -> &[(DealStage, Vec<Deal>)] {
        &self.columns
    }

    /// The deals bucketed under one stage.
    pub fn column(&self, stage: DealStage) -> &[Deal] {
        // ALL covers every variant, so the lookup cannot miss.
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == stage)
            .map(|(_, bucket)| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of deals on the board.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|(_, bucket)| bucket.len()).sum()
    }
}

/// The deal currently being dragged, captured at drag-start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub deal_id: RecordId,
    /// Stage the deal was in when the drag began.
    pub stage: DealStage,
}

/// Committed outcome of a drop: move `deal_id` to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageChange {
    pub deal_id: RecordId,
    pub target: DealStage,
}

/// Tracks the single in-flight drag between drag-start and drop.
///
/// The drop decision is computed here but committed by the caller through
/// [`DealService::update_stage`], keeping the transition input explicit
/// instead of hiding it in controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanbanController {
    drag_source: Option<DragSource>,
}

impl KanbanController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the deal as the active drag source. A drag-start while
    /// another drag is active replaces it.
    pub fn drag_start(&mut self, deal: &Deal) {
        self.drag_source = Some(DragSource {
            deal_id: deal.id.clone(),
            stage: deal.stage,
        });
    }

    /// The active drag source, if any.
    pub fn drag_source(&self) -> Option<&DragSource> {
        self.drag_source.as_ref()
    }

    /// Concludes the drag over `target` and clears the drag source.
    ///
    /// Returns the stage change to commit, or `None` when no drag was
    /// active or the deal is already in the target stage.
    pub fn complete_drop(&mut self, target: DealStage) -> Option<StageChange> {
        let source = self.drag_source.take()?;
        if source.stage == target {
            return None;
        }
        Some(StageChange {
            deal_id: source.deal_id,
            target,
        })
    }

    /// Drops onto `target` and commits the transition through the deal
    /// service in one step.
    ///
    /// The drag source is cleared in all cases, including a failed commit.
    /// Returns the updated deal, or `Ok(None)` when the drop was a no-op.
    pub fn drop_onto<S: RecordStore<Deal>>(
        &mut self,
        target: DealStage,
        deals: &mut DealService<S>,
    ) -> RepoResult<Option<Deal>> {
        match self.complete_drop(target) {
            Some(change) => deals.update_stage(&change.deal_id, change.target).map(Some),
            None => Ok(None),
        }
    }
}
