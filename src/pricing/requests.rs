//! Request DTOs for the pricing API endpoints.

use serde::Deserialize;

use crate::models::{EventParameters, ItemSelection};

use super::calculators::QuoteMode;

/// Request to compute a full quote from an input snapshot.
///
/// Every section defaults to empty, so a partially filled form still gets a
/// (possibly zero-line) quote back.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteApiRequest {
    #[serde(default)]
    pub event: EventParameters,
    #[serde(default)]
    pub selection: ItemSelection,
    #[serde(default)]
    pub mode: QuoteMode,
}

/// Request for the advisory capacity figures.
#[derive(Debug, Default, Deserialize)]
pub struct CapacityApiRequest {
    #[serde(default)]
    pub estimated_guests: u32,
    #[serde(default)]
    pub selection: ItemSelection,
}
