//! Lab dip (color sample) approval tracking.

pub mod tracker;

pub use tracker::LabDipTracker;
