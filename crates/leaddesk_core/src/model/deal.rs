//! Deal domain model.
//!
//! # Responsibility
//! - Define the deal record, the fixed pipeline stage set and patch shape.
//!
//! # Invariants
//! - `stage` is always one of the six pipeline stages.
//! - `value` should be non-negative; `validate` is the checkpoint for seed
//!   and import paths (services accept records uncritically).
//! - `contact_id` is an unvalidated reference; resolution happens in the
//!   query layer with an explicit unknown path.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::{new_record_id, now_epoch_ms, EntityKind, EpochMs, RecordId};
use crate::repo::Record;

/// Fixed pipeline states a deal moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    /// All stages in pipeline order; board columns render in this order.
    pub const ALL: [DealStage; 6] = [
        Self::Lead,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Won,
        Self::Lost,
    ];

    /// Stable lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Human-facing column title.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Whether the deal still counts toward the open pipeline.
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Won | Self::Lost)
    }
}

/// One sales opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: RecordId,
    pub title: String,
    /// Monetary value; non-negative by model invariant.
    pub value: f64,
    /// Reference to a contact; may point at nothing (resolved as unknown).
    pub contact_id: Option<RecordId>,
    /// Close probability in percent, 0..=100.
    pub probability: u8,
    pub expected_close: Option<EpochMs>,
    pub stage: DealStage,
    pub created_at: EpochMs,
}

/// Invalid deal shape detected by [`Deal::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum DealValidationError {
    NegativeValue(f64),
    ProbabilityOutOfRange(u8),
}

impl Display for DealValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue(value) => write!(f, "deal value must be >= 0, got {value}"),
            Self::ProbabilityOutOfRange(p) => {
                write!(f, "deal probability must be 0..=100, got {p}")
            }
        }
    }
}

impl Error for DealValidationError {}

impl Deal {
    /// Checks model invariants. Used by seed/import paths; CRUD services
    /// accept records uncritically per the service contract.
    pub fn validate(&self) -> Result<(), DealValidationError> {
        if self.value < 0.0 {
            return Err(DealValidationError::NegativeValue(self.value));
        }
        if self.probability > 100 {
            return Err(DealValidationError::ProbabilityOutOfRange(self.probability));
        }
        Ok(())
    }
}

impl Record for Deal {
    const KIND: EntityKind = EntityKind::Deal;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for [`crate::service::DealService::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
    #[serde(default)]
    pub probability: u8,
    #[serde(default)]
    pub expected_close: Option<EpochMs>,
    /// Defaults to `lead` when unspecified, matching intake behavior.
    #[serde(default)]
    pub stage: Option<DealStage>,
}

impl NewDeal {
    pub(crate) fn into_record(self) -> Deal {
        Deal {
            id: new_record_id(),
            title: self.title,
            value: self.value,
            contact_id: self.contact_id,
            probability: self.probability,
            expected_close: self.expected_close,
            stage: self.stage.unwrap_or(DealStage::Lead),
            created_at: now_epoch_ms(),
        }
    }
}

/// Shallow-merge patch; `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealPatch {
    pub title: Option<String>,
    pub value: Option<f64>,
    pub contact_id: Option<Option<RecordId>>,
    pub probability: Option<u8>,
    pub expected_close: Option<Option<EpochMs>>,
    pub stage: Option<DealStage>,
}

impl DealPatch {
    /// Applies the patch over an existing record in place.
    pub fn apply(&self, record: &mut Deal) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(value) = self.value {
            record.value = value;
        }
        if let Some(contact_id) = &self.contact_id {
            record.contact_id = contact_id.clone();
        }
        if let Some(probability) = self.probability {
            record.probability = probability;
        }
        if let Some(expected_close) = self.expected_close {
            record.expected_close = expected_close;
        }
        if let Some(stage) = self.stage {
            record.stage = stage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Deal, DealStage, DealValidationError};

    fn deal(value: f64, probability: u8) -> Deal {
        Deal {
            id: "d-1".to_string(),
            title: "test".to_string(),
            value,
            contact_id: None,
            probability,
            expected_close: None,
            stage: DealStage::Lead,
            created_at: 0,
        }
    }

    #[test]
    fn validate_rejects_negative_value() {
        let err = deal(-1.0, 50).validate().unwrap_err();
        assert!(matches!(err, DealValidationError::NegativeValue(_)));
    }

    #[test]
    fn validate_rejects_probability_above_hundred() {
        let err = deal(100.0, 101).validate().unwrap_err();
        assert!(matches!(err, DealValidationError::ProbabilityOutOfRange(101)));
    }

    #[test]
    fn open_stages_exclude_won_and_lost() {
        assert!(DealStage::Lead.is_open());
        assert!(DealStage::Negotiation.is_open());
        assert!(!DealStage::Won.is_open());
        assert!(!DealStage::Lost.is_open());
    }
}
