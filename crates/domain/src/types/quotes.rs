//! Selection and quote line items.
//!
//! Selections and quotes are parallel, independent record types. Linkage to
//! an opportunity is by informal id string only; nothing here enforces it.

use serde::{Deserialize, Serialize};

/// One volume break in a tiered price list.
///
/// Tiers are advisory display data, ordered by `min_qty`. The effective
/// price is always the editable `price`/`unit_price` field on the line; no
/// automatic tier selection happens anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTier {
    pub min_qty: u32,
    pub price: f64,
}

/// Product line inside a buyer selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionItem {
    pub id: String,
    pub product_name: String,
    /// Unit of sale, e.g. "m" or "yd".
    pub unit: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub needs_lab_dip: bool,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
}

impl SelectionItem {
    /// `quantity x price`.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Product line inside a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    pub id: String,
    pub product_name: String,
    pub unit: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub delivery_weeks: Option<u32>,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
}

impl QuoteLine {
    /// `quantity x unit_price`.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
