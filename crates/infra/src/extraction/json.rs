//! JSON purchase-order extractor.
//!
//! Stand-in implementation of the `DocumentExtractor` port: the "raw
//! document" is a JSON payload carrying the structured PO fields directly.
//! A real extraction backend (OCR, PDF parsing) would slot in behind the
//! same port.

use warpline_core::DocumentExtractor;
use warpline_domain::{ExtractedPoDocument, Result, WarplineError};

/// Parses purchase orders from JSON payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDocumentExtractor;

impl JsonDocumentExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for JsonDocumentExtractor {
    fn extract(&self, raw: &[u8]) -> Result<ExtractedPoDocument> {
        serde_json::from_slice(raw)
            .map_err(|e| WarplineError::InvalidInput(format!("malformed PO document: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_structured_fields() {
        let raw = br#"{
            "po_number": "PO-1042",
            "lines": [
                { "product_name": "Brushed Twill", "quantity": 820, "unit_price": 4.1 }
            ],
            "delivery_weeks": 8
        }"#;

        let po = JsonDocumentExtractor::new().extract(raw).expect("extract succeeds");
        assert_eq!(po.po_number, "PO-1042");
        assert_eq!(po.lines.len(), 1);
        assert_eq!(po.lines[0].quantity, 820);
        assert_eq!(po.delivery_weeks, Some(8));
    }

    #[test]
    fn malformed_payload_is_invalid_input() {
        let err = JsonDocumentExtractor::new().extract(b"not json").expect_err("should fail");
        assert!(matches!(err, WarplineError::InvalidInput(_)));
    }

    #[test]
    fn missing_delivery_weeks_is_allowed() {
        let raw = br#"{ "po_number": "PO-7", "lines": [] }"#;
        let po = JsonDocumentExtractor::new().extract(raw).expect("extract succeeds");
        assert_eq!(po.delivery_weeks, None);
    }
}
