//! Active filter configuration for the opportunity list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::opportunity::{Priority, Stage};

/// Priority constraint: `All` matches every record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == priority,
        }
    }
}

/// Exact-match constraint on a free-text field: `All` matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldFilter {
    #[default]
    All,
    Equals(String),
}

impl FieldFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Equals(wanted) => wanted == value,
        }
    }
}

/// The single active filter configuration.
///
/// Every field at its default means "no constraint"; predicates AND
/// together. An empty `stages` set matches all stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpportunityFilters {
    /// Case-insensitive substring match against name, company, contact and
    /// brand (OR across those fields). Empty string matches everything.
    pub search: String,
    pub stages: BTreeSet<Stage>,
    pub priority: PriorityFilter,
    pub assigned_rep: FieldFilter,
    pub brand: FieldFilter,
    pub source: FieldFilter,
}

/// Shallow field-by-field merge into [`OpportunityFilters`].
///
/// `None` leaves the corresponding field unchanged, so an empty update is a
/// no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub stages: Option<BTreeSet<Stage>>,
    pub priority: Option<PriorityFilter>,
    pub assigned_rep: Option<FieldFilter>,
    pub brand: Option<FieldFilter>,
    pub source: Option<FieldFilter>,
}

impl OpportunityFilters {
    /// Apply a shallow merge, field by field.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(stages) = update.stages {
            self.stages = stages;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(assigned_rep) = update.assigned_rep {
            self.assigned_rep = assigned_rep;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(source) = update.source {
            self.source = source;
        }
    }
}
