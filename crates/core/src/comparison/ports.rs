//! Port interfaces for PO review.
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use warpline_domain::{ExtractedPoDocument, Result};

/// Trait for turning a raw purchase-order document into structured fields.
///
/// Stands in for real document extraction (OCR, parsing). Implementations
/// live in the infra layer; core only sees structured output.
pub trait DocumentExtractor: Send + Sync {
    /// Extract structured PO fields from a raw document payload.
    fn extract(&self, raw: &[u8]) -> Result<ExtractedPoDocument>;
}
