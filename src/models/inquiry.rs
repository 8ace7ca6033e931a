//! Dessert-catering quote-request form state (the patisserie flow).
//!
//! This flow has no price engine behind it; the request is saved locally and
//! handed off over WhatsApp for a personalised quotation.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventLocation {
    #[default]
    EtreCafeKl,
    EtreCafeIpoh,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DessertCategory {
    Savoury,
    Viennoiserie,
    Tart,
    Gateaux,
}

impl DessertCategory {
    pub fn label(self) -> &'static str {
        match self {
            DessertCategory::Savoury => "Savoury",
            DessertCategory::Viennoiserie => "Viennoiserie",
            DessertCategory::Tart => "Tart",
            DessertCategory::Gateaux => "Gateaux",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DessertSize {
    Normal,
    Mini,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinksOption {
    Coffee,
    Tea,
    Fizzy,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingOption {
    CustomerOwn,
    EtreExisting,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomisationLevel {
    Current,
    Partial,
    Full,
}

/// Event details specific to the catering quote request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryEvent {
    #[serde(default)]
    pub event_name: String,
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
    pub budget_per_person_from: String,
    #[serde(default)]
    pub budget_per_person_to: String,
    #[serde(default)]
    pub event_location: EventLocation,
    #[serde(default)]
    pub other_area_name: String,
    #[serde(default)]
    pub other_venue_type: Option<VenueType>,
}

/// Branding requirements.
///
/// Older saves stored a single `requirement` discriminator here; the store
/// migrates that shape into these boolean flags at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingData {
    #[serde(default)]
    pub include_brand_logo: bool,
    #[serde(default)]
    pub match_brand_colours: bool,
    #[serde(default)]
    pub logo_on_dessert: bool,
    #[serde(default)]
    pub logo_on_packaging: bool,
    #[serde(default)]
    pub logo_on_others: bool,
    #[serde(default)]
    pub logo_on_others_text: String,
    #[serde(default)]
    pub colour_on_dessert: bool,
    #[serde(default)]
    pub colour_on_packaging: bool,
    #[serde(default)]
    pub colour_on_others: bool,
    #[serde(default)]
    pub colour_on_others_text: String,
}

/// Menu selections for the catering quote request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSelectionData {
    #[serde(default)]
    pub customisation_level: Option<CustomisationLevel>,
    #[serde(default)]
    pub customisation_notes: String,
    #[serde(default)]
    pub categories: Vec<DessertCategory>,
    #[serde(default)]
    pub item_quantities: BTreeMap<String, u32>,
    #[serde(default)]
    pub dessert_size: Option<DessertSize>,
    #[serde(default)]
    pub drinks: Vec<DrinksOption>,
    #[serde(default)]
    pub drinks_other_text: String,
    #[serde(default)]
    pub packaging: Option<PackagingOption>,
}

/// The full persisted quote-request document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub event: InquiryEvent,
    #[serde(default)]
    pub branding: BrandingData,
    #[serde(default)]
    pub menu: MenuSelectionData,
    #[serde(default)]
    pub customer: CustomerData,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}
