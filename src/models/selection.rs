//! Rental item selection form state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tent canvas colour options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TentColor {
    #[default]
    White,
    Red,
    Yellow,
}

impl TentColor {
    pub const ALL: [TentColor; 3] = [TentColor::White, TentColor::Red, TentColor::Yellow];

    /// Tolerant parse from a form value; unrecognised values fall back to white.
    pub fn parse(value: &str) -> Self {
        match value {
            "Red" => TentColor::Red,
            "Yellow" => TentColor::Yellow,
            _ => TentColor::White,
        }
    }
}

impl fmt::Display for TentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TentColor::White => "White",
            TentColor::Red => "Red",
            TentColor::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Quantity and colour choice for one tent tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TentSelection {
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub color: TentColor,
}

/// Long table quantity with the optional skirting upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LongTableSelection {
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub with_skirting: bool,
}

/// The complete item selection driving a quote.
///
/// All quantities are non-negative by construction; the form layer floors
/// negative or non-numeric input to zero before it reaches this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSelection {
    #[serde(default)]
    pub tent_10x10: TentSelection,
    #[serde(default)]
    pub tent_20x20: TentSelection,
    #[serde(default)]
    pub tent_20x30: TentSelection,
    #[serde(default)]
    pub table_sets: u32,
    #[serde(default)]
    pub long_table: LongTableSelection,
    #[serde(default)]
    pub extra_chairs: u32,
    #[serde(default)]
    pub cooler_fans: u32,
    #[serde(default)]
    pub parking_lots: u32,
}
