//! Opportunity records and the fixed stage pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::WarplineError;

/// Pipeline stage for an opportunity.
///
/// The pipeline is a fixed ordered set of labels. Any stage may be assigned
/// from any other; transitions are not restricted by a workflow table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    #[serde(rename = "Inbound Request")]
    InboundRequest,
    #[serde(rename = "Clarify Buyer Intent")]
    ClarifyBuyerIntent,
    #[serde(rename = "Samples Sent")]
    SamplesSent,
    #[serde(rename = "Quote Sent")]
    QuoteSent,
    #[serde(rename = "PO Received")]
    PoReceived,
    #[serde(rename = "In Production")]
    InProduction,
    #[serde(rename = "Ready to Ship")]
    ReadyToShip,
    #[serde(rename = "Closed – Delivered")]
    ClosedDelivered,
}

impl Stage {
    /// All stages in declared pipeline order.
    pub const ALL: [Stage; 8] = [
        Stage::InboundRequest,
        Stage::ClarifyBuyerIntent,
        Stage::SamplesSent,
        Stage::QuoteSent,
        Stage::PoReceived,
        Stage::InProduction,
        Stage::ReadyToShip,
        Stage::ClosedDelivered,
    ];

    /// Canonical display label for the stage.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InboundRequest => "Inbound Request",
            Self::ClarifyBuyerIntent => "Clarify Buyer Intent",
            Self::SamplesSent => "Samples Sent",
            Self::QuoteSent => "Quote Sent",
            Self::PoReceived => "PO Received",
            Self::InProduction => "In Production",
            Self::ReadyToShip => "Ready to Ship",
            Self::ClosedDelivered => "Closed – Delivered",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = WarplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| WarplineError::InvalidInput(format!("unknown stage: {s}")))
    }
}

/// Opportunity priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Kind of timeline event recorded against an opportunity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimelineEvent {
    Created,
    #[serde(rename = "Stage Changed")]
    StageChanged,
    #[serde(rename = "Next Step Updated")]
    NextStepUpdated,
    Note,
}

impl fmt::Display for TimelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "Created",
            Self::StageChanged => "Stage Changed",
            Self::NextStepUpdated => "Next Step Updated",
            Self::Note => "Note",
        };
        f.write_str(label)
    }
}

/// One entry in an opportunity's append-only timeline, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub event: TimelineEvent,
    pub description: String,
}

/// One buyer engagement moving through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: String,
    pub name: String,
    pub company: String,
    pub contact: String,
    pub brand: String,
    pub stage: Stage,
    pub priority: Priority,
    pub updated: NaiveDate,
    pub next_step: String,
    pub source: String,
    pub assigned_rep: String,
    /// Append-only, ordered oldest to newest.
    pub timeline: Vec<TimelineEntry>,
    // Display-hint flags consumed by the view layer.
    #[serde(default)]
    pub missing_specs: bool,
    #[serde(default)]
    pub has_samples: bool,
    #[serde(default)]
    pub has_quote: bool,
    #[serde(default)]
    pub has_po: bool,
    #[serde(default)]
    pub has_lab_dips: bool,
}

/// Payload for creating an opportunity.
///
/// The store assigns an id when `id` is `None` and seeds the timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityDraft {
    pub id: Option<String>,
    pub name: String,
    pub company: String,
    pub contact: String,
    pub brand: String,
    pub stage: Option<Stage>,
    pub priority: Option<Priority>,
    pub next_step: String,
    pub source: String,
    pub assigned_rep: String,
    #[serde(default)]
    pub missing_specs: bool,
    #[serde(default)]
    pub has_samples: bool,
    #[serde(default)]
    pub has_quote: bool,
    #[serde(default)]
    pub has_po: bool,
    #[serde(default)]
    pub has_lab_dips: bool,
}

/// Field patch applied by `update_opportunity`.
///
/// `None` leaves the field unchanged. Stage moves go through `move_stage`
/// so that the transition is logged; the patch deliberately has no stage
/// field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub contact: Option<String>,
    pub brand: Option<String>,
    pub priority: Option<Priority>,
    pub next_step: Option<String>,
    pub source: Option<String>,
    pub assigned_rep: Option<String>,
    pub missing_specs: Option<bool>,
    pub has_samples: Option<bool>,
    pub has_quote: Option<bool>,
    pub has_po: Option<bool>,
    pub has_lab_dips: Option<bool>,
}
