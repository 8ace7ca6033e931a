//! Quote and capacity DTOs produced by the pricing engine.
//!
//! Money fields serialise as strings (exact decimal text) on the JSON API;
//! the `_display` helpers round to two decimal places for the templates.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{round_money, QuoteMode};

/// Line quantity: a plain count or a descriptive label such as `2 day(s)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LineQuantity {
    Count(u32),
    Label(String),
}

impl fmt::Display for LineQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineQuantity::Count(n) => write!(f, "{n}"),
            LineQuantity::Label(s) => f.write_str(s),
        }
    }
}

/// One priced line of a quote. Produced fresh on every calculation and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub name: String,
    pub quantity: LineQuantity,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sst: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl QuoteLine {
    pub fn unit_price_display(&self) -> String {
        format!("{:.2}", round_money(self.unit_price, 2))
    }

    /// SST column text; exempt lines show a dash instead of `0.00`.
    pub fn sst_display(&self) -> String {
        if self.sst.is_zero() {
            "-".to_string()
        } else {
            format!("{:.2}", round_money(self.sst, 2))
        }
    }

    pub fn total_display(&self) -> String {
        format!("{:.2}", round_money(self.total, 2))
    }
}

/// An itemised quote: ordered lines plus the derived totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: Decimal,
    pub mode: QuoteMode,
}

impl Quote {
    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn subtotal_display(&self) -> String {
        format!("{:.2}", round_money(self.subtotal, 2))
    }

    pub fn discount_display(&self) -> String {
        format!("{:.2}", round_money(self.discount, 2))
    }

    pub fn grand_total_display(&self) -> String {
        format!("{:.2}", round_money(self.grand_total, 2))
    }
}

/// Advisory capacity figures shown next to the tent and table-set rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacitySummary {
    pub tent_capacity: u32,
    pub table_set_capacity: u32,
    pub remaining_tent_capacity: u32,
    pub remaining_table_set_capacity: u32,
    pub recommended_table_sets: u32,
}
