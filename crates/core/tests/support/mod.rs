//! Shared test support for core integration tests.

pub mod repositories;

use warpline_domain::{OpportunityDraft, Priority, Stage};

/// Build a draft with the given name; remaining fields get fixture values.
pub fn draft(name: &str) -> OpportunityDraft {
    OpportunityDraft {
        id: None,
        name: name.to_string(),
        company: "Harbor Apparel".to_string(),
        contact: "Mia Torres".to_string(),
        brand: "Harborline".to_string(),
        stage: Some(Stage::InboundRequest),
        priority: Some(Priority::Medium),
        next_step: "Review specs".to_string(),
        source: "Trade Fair".to_string(),
        assigned_rep: "Dana".to_string(),
        missing_specs: false,
        has_samples: false,
        has_quote: false,
        has_po: false,
        has_lab_dips: false,
    }
}

/// Draft at a given stage and priority, for filter scenarios.
pub fn draft_at(name: &str, stage: Stage, priority: Priority) -> OpportunityDraft {
    OpportunityDraft { stage: Some(stage), priority: Some(priority), ..draft(name) }
}
