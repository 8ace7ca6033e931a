//! Form-state record types.
//!
//! These structs are the explicit state container owned by the presentation
//! layer: the store persists them, the routes mutate them, and the pricing
//! calculators read them as plain inputs.

pub mod customer;
pub mod event;
pub mod inquiry;
pub mod selection;

pub use customer::{new_project_id, BookingDetails, CustomerData, TIME_SLOTS};
pub use event::{AreaSelection, AreaType, EventParameters, MAX_GUESTS};
pub use inquiry::QuoteRequest;
pub use selection::{ItemSelection, LongTableSelection, TentColor, TentSelection};

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` form value, treating anything malformed as unset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a quantity field, flooring negative or non-numeric input to zero.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0).min(u32::MAX as i64) as u32
}

/// Parse the guest-count field, clamping into `0..=MAX_GUESTS`.
pub fn parse_guests(raw: &str) -> u32 {
    parse_count(raw).min(MAX_GUESTS)
}
