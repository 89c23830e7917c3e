//! Opportunity store: single source of truth for the opportunity list and
//! the active filter configuration.

pub mod ports;
pub mod store;

pub use store::OpportunityStore;
