//! Customer contact details and booking-page state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details captured by the further-inquiry form on the calculator page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Setup/dismantle time slots offered on the booking page.
pub const TIME_SLOTS: [&str; 5] = [
    "8:30am - 10:00am",
    "10:00am - 11:30am",
    "11:30am - 1:00pm",
    "2:00pm - 3:30pm",
    "3:30pm - 5:00pm",
];

/// Additional information collected when the customer commits to a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub billing_address: String,
    #[serde(default)]
    pub billing_post_code: String,
    #[serde(default)]
    pub billing_state: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_post_code: String,
    #[serde(default)]
    pub delivery_state: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub setup_time_slot: String,
    #[serde(default)]
    pub dismantle_time_slot: String,
    #[serde(default)]
    pub special_request: String,
    /// Customer confirms sufficient space is reserved for the canopy setup.
    #[serde(default)]
    pub terms_space_confirmed: bool,
    /// Customer accepts that the selected slots are subject to availability.
    #[serde(default)]
    pub terms_schedule_flexible: bool,
    /// Customer accepts that a site visit is at the company's discretion.
    #[serde(default)]
    pub terms_site_visit: bool,
}

impl BookingDetails {
    /// Assign a fresh project reference if none has been issued yet.
    pub fn ensure_project_id(&mut self) {
        if self.project_id.is_empty() {
            self.project_id = new_project_id();
        }
    }

    /// All mandatory fields filled and all three terms accepted.
    pub fn is_complete(&self) -> bool {
        !self.company_name.is_empty()
            && !self.billing_address.is_empty()
            && !self.delivery_address.is_empty()
            && !self.email.is_empty()
            && !self.setup_time_slot.is_empty()
            && !self.dismantle_time_slot.is_empty()
            && self.terms_space_confirmed
            && self.terms_schedule_flexible
            && self.terms_site_visit
    }
}

/// Generate a customer-facing project reference, e.g. `VE-9F2C41AB`.
pub fn new_project_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("VE-{}", id[..8].to_uppercase())
}
