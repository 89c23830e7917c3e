//! PO-vs-quote comparison data.
//!
//! Extracted purchase-order fields come from a `DocumentExtractor`
//! implementation in the infra layer; the comparison itself lives in
//! `warpline-core`.

use serde::{Deserialize, Serialize};

/// One line of an extracted purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedPoLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Structured fields extracted from a raw purchase-order document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedPoDocument {
    pub po_number: String,
    pub lines: Vec<ExtractedPoLine>,
    pub delivery_weeks: Option<u32>,
}

/// One compared field: quote value, PO value and the relative difference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDiff {
    pub quote_value: f64,
    pub po_value: f64,
    /// `|po - quote| / quote * 100`; 0 when the quote value is 0.
    pub percent_diff: f64,
    pub violation: bool,
}

/// Per-line comparison of quantity and unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineReport {
    pub product_name: String,
    pub quantity: FieldDiff,
    pub unit_price: FieldDiff,
}

/// Aggregate comparison outcome gating PO confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    pub tolerance_pct: f64,
    pub lines: Vec<LineReport>,
    pub delivery_weeks: Option<FieldDiff>,
    /// True when line counts differ between the quote and the PO.
    pub line_count_mismatch: bool,
    pub has_violations: bool,
}

impl ComparisonReport {
    /// Confirmation stays disabled while any violation exists.
    pub fn can_confirm(&self) -> bool {
        !self.has_violations
    }
}
