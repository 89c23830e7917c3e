//! # Warpline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The opportunity store and its derived views
//! - Port/adapter interfaces (traits)
//! - Filter predicates, quote math, PO comparison, lab dip tracking
//!
//! ## Architecture Principles
//! - Only depends on `warpline-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod comparison;
pub mod filters;
pub mod labdips;
pub mod opportunities;
pub mod quotes;

// Re-export specific items to avoid ambiguity
pub use comparison::ports::DocumentExtractor;
pub use comparison::ComparisonService;
pub use labdips::LabDipTracker;
pub use opportunities::ports::SnapshotRepository;
pub use opportunities::OpportunityStore;
