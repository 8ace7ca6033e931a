//! Booking page: pro-forma quotation with the online-booking discount,
//! plus the additional details needed before payment.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{BookingDetails, TIME_SLOTS};
use crate::pricing::{calculators, PriceCatalog, QuoteMode};
use crate::AppState;

/// A rendered quotation line.
struct QuoteRow {
    name: String,
    qty: String,
    unit: String,
    sst: String,
    total: String,
}

/// A selectable time slot with its current selection state.
struct SlotRow {
    value: &'static str,
    setup_selected: bool,
    dismantle_selected: bool,
}

#[derive(Template)]
#[template(path = "booking.html")]
struct BookingTemplate {
    has_lines: bool,
    event_type: String,
    estimated_guests: u32,
    area_label: &'static str,
    location_label: &'static str,
    rows: Vec<QuoteRow>,
    subtotal: String,
    discount: String,
    grand_total: String,

    booking: BookingDetails,
    setup_date: String,
    setup_weekday: String,
    dismantle_date: String,
    dismantle_weekday: String,
    slots: Vec<SlotRow>,
    can_proceed: bool,
}

/// Booking page
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let mut snapshot = state.store.snapshot();
    if snapshot.booking.project_id.is_empty() {
        // Issue the project reference once and keep it across visits.
        state.store.update(|s| s.booking.ensure_project_id());
        snapshot = state.store.snapshot();
    }
    let catalog = PriceCatalog::default();

    let quote = calculators::compute_quote(
        &snapshot.event,
        &snapshot.selection,
        &catalog,
        QuoteMode::Booking,
    );

    let rows = quote
        .lines
        .iter()
        .map(|line| QuoteRow {
            name: line.name.clone(),
            qty: line.quantity.to_string(),
            unit: line.unit_price_display(),
            sst: line.sst_display(),
            total: line.total_display(),
        })
        .collect();

    let slots = TIME_SLOTS
        .iter()
        .map(|slot| SlotRow {
            value: slot,
            setup_selected: snapshot.booking.setup_time_slot == *slot,
            dismantle_selected: snapshot.booking.dismantle_time_slot == *slot,
        })
        .collect();

    let template = BookingTemplate {
        has_lines: quote.has_lines(),
        event_type: if snapshot.event.event_type.is_empty() {
            "Not specified".to_string()
        } else {
            snapshot.event.event_type.clone()
        },
        estimated_guests: snapshot.event.estimated_guests,
        area_label: if snapshot.event.area_type.is_public() {
            "Public Area"
        } else {
            "Private Area"
        },
        location_label: snapshot.event.area_selection.label(),
        rows,
        subtotal: quote.subtotal_display(),
        discount: quote.discount_display(),
        grand_total: quote.grand_total_display(),
        can_proceed: snapshot.booking.is_complete(),
        setup_date: date_label(snapshot.event.setup_date),
        setup_weekday: weekday_label(snapshot.event.setup_date),
        dismantle_date: date_label(snapshot.event.dismantle_date),
        dismantle_weekday: weekday_label(snapshot.event.dismantle_date),
        slots,
        booking: snapshot.booking,
    };

    Ok(Html(template.render()?))
}

fn date_label(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "not set".to_string())
}

fn weekday_label(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%A").to_string()).unwrap_or_default()
}

/// Additional-information form posted from the booking page.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
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
    pub setup_time_slot: String,
    #[serde(default)]
    pub dismantle_time_slot: String,
    #[serde(default)]
    pub special_request: String,
    #[serde(default)]
    pub terms_space_confirmed: Option<String>,
    #[serde(default)]
    pub terms_schedule_flexible: Option<String>,
    #[serde(default)]
    pub terms_site_visit: Option<String>,
}

impl BookingForm {
    fn apply(&self, booking: &mut BookingDetails) {
        booking.company_name = self.company_name.trim().to_string();
        booking.billing_address = self.billing_address.trim().to_string();
        booking.billing_post_code = self.billing_post_code.trim().to_string();
        booking.billing_state = self.billing_state.trim().to_string();
        booking.delivery_address = self.delivery_address.trim().to_string();
        booking.delivery_post_code = self.delivery_post_code.trim().to_string();
        booking.delivery_state = self.delivery_state.trim().to_string();
        booking.email = self.email.trim().to_string();
        booking.event_name = self.event_name.trim().to_string();
        booking.setup_time_slot = valid_slot(&self.setup_time_slot);
        booking.dismantle_time_slot = valid_slot(&self.dismantle_time_slot);
        booking.special_request = self.special_request.trim().to_string();
        booking.terms_space_confirmed = self.terms_space_confirmed.is_some();
        booking.terms_schedule_flexible = self.terms_schedule_flexible.is_some();
        booking.terms_site_visit = self.terms_site_visit.is_some();
        booking.ensure_project_id();
    }
}

/// Only the published slots are accepted; anything else is treated as unset.
fn valid_slot(raw: &str) -> String {
    if TIME_SLOTS.contains(&raw) {
        raw.to_string()
    } else {
        String::new()
    }
}

/// Persist the posted booking details and re-render.
pub async fn update(State(state): State<AppState>, Form(form): Form<BookingForm>) -> Redirect {
    state.store.update(|snapshot| form.apply(&mut snapshot.booking));
    Redirect::to("/booking")
}

#[derive(Template)]
#[template(path = "payment.html")]
struct PaymentTemplate {
    project_id: String,
    grand_total: String,
}

/// Payment gateway stub.
///
/// Online payment is not live; a complete booking lands on a notice page
/// that repeats the project reference, an incomplete one is sent back.
pub async fn pay(State(state): State<AppState>) -> Result<axum::response::Response> {
    use axum::response::IntoResponse;

    let snapshot = state.store.snapshot();
    if !snapshot.booking.is_complete() {
        return Ok(Redirect::to("/booking").into_response());
    }

    let quote = calculators::compute_quote(
        &snapshot.event,
        &snapshot.selection,
        &PriceCatalog::default(),
        QuoteMode::Booking,
    );
    let template = PaymentTemplate {
        project_id: snapshot.booking.project_id.clone(),
        grand_total: quote.grand_total_display(),
    };
    Ok(Html(template.render()?).into_response())
}
