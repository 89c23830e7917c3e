//! PO-vs-quote tolerance checking.

pub mod ports;
pub mod service;

pub use service::{compare, percent_diff, ComparisonService};
