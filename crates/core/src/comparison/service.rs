//! PO review service - core business logic

use std::sync::Arc;

use warpline_domain::{
    ComparisonReport, ExtractedPoDocument, FieldDiff, LineReport, QuoteLine, Result,
};

use super::ports::DocumentExtractor;

/// Relative difference in percent, guarded against a zero denominator.
pub fn percent_diff(quote_value: f64, po_value: f64) -> f64 {
    if quote_value == 0.0 {
        return 0.0;
    }
    (po_value - quote_value).abs() / quote_value * 100.0
}

fn field_diff(quote_value: f64, po_value: f64, tolerance_pct: f64) -> FieldDiff {
    let percent_diff = percent_diff(quote_value, po_value);
    FieldDiff { quote_value, po_value, percent_diff, violation: percent_diff > tolerance_pct }
}

/// Compare an extracted PO against quote lines.
///
/// Lines are paired by position. A line-count mismatch is itself a
/// violation. Delivery weeks are compared only when both sides carry a
/// value.
pub fn compare(
    quote_lines: &[QuoteLine],
    quote_delivery_weeks: Option<u32>,
    po: &ExtractedPoDocument,
    tolerance_pct: f64,
) -> ComparisonReport {
    let line_count_mismatch = quote_lines.len() != po.lines.len();

    let lines: Vec<LineReport> = quote_lines
        .iter()
        .zip(po.lines.iter())
        .map(|(quote, extracted)| LineReport {
            product_name: quote.product_name.clone(),
            quantity: field_diff(
                f64::from(quote.quantity),
                f64::from(extracted.quantity),
                tolerance_pct,
            ),
            unit_price: field_diff(quote.unit_price, extracted.unit_price, tolerance_pct),
        })
        .collect();

    let delivery_weeks = match (quote_delivery_weeks, po.delivery_weeks) {
        (Some(quote), Some(extracted)) => {
            Some(field_diff(f64::from(quote), f64::from(extracted), tolerance_pct))
        }
        _ => None,
    };

    let has_violations = line_count_mismatch
        || lines.iter().any(|line| line.quantity.violation || line.unit_price.violation)
        || delivery_weeks.as_ref().is_some_and(|diff| diff.violation);

    ComparisonReport { tolerance_pct, lines, delivery_weeks, line_count_mismatch, has_violations }
}

/// PO review service: extracts structured fields from a raw document and
/// compares them against the quote.
pub struct ComparisonService {
    extractor: Arc<dyn DocumentExtractor>,
    tolerance_pct: f64,
}

impl ComparisonService {
    /// Create a new review service with the given tolerance threshold.
    pub fn new(extractor: Arc<dyn DocumentExtractor>, tolerance_pct: f64) -> Self {
        Self { extractor, tolerance_pct }
    }

    /// Current tolerance threshold in percent.
    pub fn tolerance_pct(&self) -> f64 {
        self.tolerance_pct
    }

    /// Adjust the tolerance threshold (user-configurable).
    pub fn set_tolerance_pct(&mut self, tolerance_pct: f64) {
        self.tolerance_pct = tolerance_pct;
    }

    /// Extract a raw PO document and compare it against the quote.
    pub fn review(
        &self,
        quote_lines: &[QuoteLine],
        quote_delivery_weeks: Option<u32>,
        raw: &[u8],
    ) -> Result<ComparisonReport> {
        let po = self.extractor.extract(raw)?;
        tracing::debug!(po_number = %po.po_number, lines = po.lines.len(), "extracted PO document");
        Ok(compare(quote_lines, quote_delivery_weeks, &po, self.tolerance_pct))
    }
}

#[cfg(test)]
mod tests {
    use warpline_domain::ExtractedPoLine;

    use super::*;

    fn quote_line(quantity: u32, unit_price: f64) -> QuoteLine {
        QuoteLine {
            id: "line-1".to_string(),
            product_name: "Brushed Twill".to_string(),
            unit: "m".to_string(),
            quantity,
            unit_price,
            delivery_weeks: None,
            tiers: vec![],
        }
    }

    fn po_with_line(quantity: u32, unit_price: f64) -> ExtractedPoDocument {
        ExtractedPoDocument {
            po_number: "PO-1042".to_string(),
            lines: vec![ExtractedPoLine {
                product_name: "Brushed Twill".to_string(),
                quantity,
                unit_price,
            }],
            delivery_weeks: None,
        }
    }

    #[test]
    fn percent_diff_guards_zero_denominator() {
        assert_eq!(percent_diff(0.0, 50.0), 0.0);
    }

    #[test]
    fn quantity_drift_beyond_tolerance_is_a_violation() {
        // 800 -> 820 is a 2.5% drift against a 2% tolerance.
        let report = compare(&[quote_line(800, 4.0)], None, &po_with_line(820, 4.0), 2.0);

        let quantity = &report.lines[0].quantity;
        assert!((quantity.percent_diff - 2.5).abs() < 1e-9);
        assert!(quantity.violation);
        assert!(report.has_violations);
        assert!(!report.can_confirm());
    }

    #[test]
    fn quantity_drift_within_tolerance_passes() {
        // 800 -> 808 is a 1.0% drift against a 2% tolerance.
        let report = compare(&[quote_line(800, 4.0)], None, &po_with_line(808, 4.0), 2.0);

        let quantity = &report.lines[0].quantity;
        assert!((quantity.percent_diff - 1.0).abs() < 1e-9);
        assert!(!quantity.violation);
        assert!(!report.has_violations);
        assert!(report.can_confirm());
    }

    #[test]
    fn line_count_mismatch_is_a_violation() {
        let po = ExtractedPoDocument {
            po_number: "PO-1042".to_string(),
            lines: vec![],
            delivery_weeks: None,
        };
        let report = compare(&[quote_line(800, 4.0)], None, &po, 2.0);

        assert!(report.line_count_mismatch);
        assert!(report.has_violations);
    }

    #[test]
    fn delivery_weeks_compared_only_when_both_present() {
        let mut po = po_with_line(800, 4.0);
        po.delivery_weeks = Some(8);

        let without_quote_delivery = compare(&[quote_line(800, 4.0)], None, &po, 2.0);
        assert!(without_quote_delivery.delivery_weeks.is_none());

        let with_quote_delivery = compare(&[quote_line(800, 4.0)], Some(6), &po, 2.0);
        let diff = with_quote_delivery.delivery_weeks.expect("delivery diff present");
        assert!(diff.violation);
        assert!(with_quote_delivery.has_violations);
    }

    #[test]
    fn service_reviews_through_the_extractor() {
        struct FixedExtractor(ExtractedPoDocument);

        impl DocumentExtractor for FixedExtractor {
            fn extract(&self, _raw: &[u8]) -> Result<ExtractedPoDocument> {
                Ok(self.0.clone())
            }
        }

        let service = ComparisonService::new(Arc::new(FixedExtractor(po_with_line(808, 4.0))), 2.0);
        let report =
            service.review(&[quote_line(800, 4.0)], None, b"raw bytes").expect("review succeeds");

        assert!(report.can_confirm());
    }
}
