//! Event detail form state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hard cap on the estimated guest count accepted from the form.
pub const MAX_GUESTS: u32 = 9999;

/// Whether the event occupies private grounds or a public (MBI-regulated) area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    #[default]
    Private,
    Public,
}

impl AreaType {
    /// Tolerant parse from a form value; anything unrecognised stays private.
    pub fn parse(value: &str) -> Self {
        match value {
            "public" => AreaType::Public,
            _ => AreaType::Private,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, AreaType::Public)
    }
}

/// Rough delivery region. Affects the transport-fee note shown to the
/// customer, never the computed price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaSelection {
    #[default]
    WithinIpoh,
    WithinPerak,
    OutsidePerak,
}

impl AreaSelection {
    pub fn parse(value: &str) -> Self {
        match value {
            "within-perak" => AreaSelection::WithinPerak,
            "outside-perak" => AreaSelection::OutsidePerak,
            _ => AreaSelection::WithinIpoh,
        }
    }

    /// Label for the transport-fee hint on the calculator page.
    pub fn label(self) -> &'static str {
        match self {
            AreaSelection::WithinIpoh => "Within Ipoh Area",
            AreaSelection::WithinPerak => "Within Perak Area",
            AreaSelection::OutsidePerak => "Outside Perak Area",
        }
    }
}

/// Event parameters captured from the calculator form.
///
/// Dates are `None` when the field is empty or unparseable; the pricing
/// calculators treat an absent date as "no duration, no surcharge".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventParameters {
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub estimated_guests: u32,
    #[serde(default)]
    pub setup_date: Option<NaiveDate>,
    #[serde(default)]
    pub dismantle_date: Option<NaiveDate>,
    #[serde(default)]
    pub area_type: AreaType,
    #[serde(default)]
    pub area_selection: AreaSelection,
}
