//! Totals over selection and quote line items.
//!
//! No tax, discount or currency conversion exists; a document total is the
//! plain sum of its line totals. Tiered prices on a line are advisory only.

use warpline_domain::{QuoteLine, SelectionItem};

/// Sum of `quantity x price` across a selection.
pub fn selection_total(items: &[SelectionItem]) -> f64 {
    items.iter().map(SelectionItem::line_total).sum()
}

/// Sum of `quantity x unit_price` across a quote.
pub fn quote_total(lines: &[QuoteLine]) -> f64 {
    lines.iter().map(QuoteLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use warpline_domain::PriceTier;

    use super::*;

    fn line(quantity: u32, unit_price: f64) -> QuoteLine {
        QuoteLine {
            id: format!("line-{quantity}"),
            product_name: "Slub Jersey".to_string(),
            unit: "m".to_string(),
            quantity,
            unit_price,
            delivery_weeks: Some(6),
            tiers: vec![],
        }
    }

    #[test]
    fn quote_total_sums_line_totals() {
        let lines = vec![line(800, 4.25), line(200, 3.10)];
        let total = quote_total(&lines);
        assert!((total - (800.0 * 4.25 + 200.0 * 3.10)).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_documents_total_zero() {
        assert_eq!(quote_total(&[]), 0.0);
        assert_eq!(selection_total(&[]), 0.0);
    }

    #[test]
    fn tiers_do_not_affect_the_total() {
        let mut with_tiers = line(500, 5.0);
        with_tiers.tiers =
            vec![PriceTier { min_qty: 1000, price: 4.5 }, PriceTier { min_qty: 5000, price: 4.0 }];
        let without_tiers = line(500, 5.0);

        assert_eq!(with_tiers.line_total(), without_tiers.line_total());
    }
}
