//! Domain types and models

pub mod comparison;
pub mod filters;
pub mod labdip;
pub mod opportunity;
pub mod quotes;

pub use comparison::{ComparisonReport, ExtractedPoDocument, ExtractedPoLine, FieldDiff, LineReport};
pub use filters::{FieldFilter, FilterUpdate, OpportunityFilters, PriorityFilter};
pub use labdip::{LabDip, LabDipStatus};
pub use opportunity::{
    Opportunity, OpportunityDraft, OpportunityPatch, Priority, Stage, TimelineEntry, TimelineEvent,
};
pub use quotes::{PriceTier, QuoteLine, SelectionItem};
