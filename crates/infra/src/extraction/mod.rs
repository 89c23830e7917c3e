//! Document extraction adapters.

pub mod json;

pub use json::JsonDocumentExtractor;
