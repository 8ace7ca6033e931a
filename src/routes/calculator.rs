//! Calculator page: live quotation over the current form state.
//!
//! Every POST replaces the saved snapshot and re-renders, so the quote the
//! customer sees is always recomputed from the full current state.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::error::Result;
use crate::handoff;
use crate::models::{
    parse_count, parse_date, parse_guests, CustomerData, LongTableSelection, TentColor,
    TentSelection,
};
use crate::pricing::calculators::{
    self, capacity_summary, compute_duration, cost_per_guest, is_sunday, line_amounts,
};
use crate::pricing::{CapacityTable, PriceCatalog, QuoteMode};
use crate::store::PersistedState;
use crate::AppState;

/// One selectable item row on the pricing tables.
struct ItemRow {
    qty: String,
    unit: String,
    sst: String,
    total: String,
}

impl ItemRow {
    fn new(quantity: u32, unit: rust_decimal::Decimal, sst_applies: bool) -> Self {
        let (_, sst, total) = line_amounts(quantity, unit, sst_applies);
        Self {
            qty: if quantity == 0 { String::new() } else { quantity.to_string() },
            unit: format!("{:.0}", unit),
            sst: if sst_applies {
                format!("{:.2}", calculators::round_money(sst, 2))
            } else {
                "No SST".to_string()
            },
            total: format!("{:.2}", calculators::round_money(total, 2)),
        }
    }
}

/// One tent tier row, with its colour picker and capacity hint.
struct TentRow {
    size: &'static str,
    qty_field: &'static str,
    color_field: &'static str,
    color: String,
    capacity_per_tent: u32,
    row: ItemRow,
}

#[derive(Template)]
#[template(path = "calculator.html")]
struct CalculatorTemplate {
    event_date: String,
    event_type: String,
    guests_value: String,
    estimated_guests: u32,
    setup_date: String,
    dismantle_date: String,
    setup_is_sunday: bool,
    dismantle_is_sunday: bool,
    area_public: bool,
    area_within_ipoh: bool,
    area_within_perak: bool,
    area_outside_perak: bool,
    duration: u32,

    tents: Vec<TentRow>,
    table_sets: ItemRow,
    long_table: ItemRow,
    long_table_skirting: bool,
    extra_chairs: ItemRow,
    cooler_fans: ItemRow,
    parking_lots: ItemRow,
    runner_total: String,
    permit_total: String,
    sunday_fee: String,
    has_sunday_fee: bool,
    sunday_note: &'static str,
    extension_fee: String,
    has_extension_fee: bool,
    extension_days: u32,
    has_additional_charges: bool,

    tent_capacity: u32,
    table_set_capacity: u32,
    remaining_tent_capacity: u32,
    remaining_table_set_capacity: u32,
    remaining_table_sets: u32,
    recommended_table_sets: u32,

    total: String,
    cost_per_guest: String,

    customer: CustomerData,
    whatsapp_link: String,
    whatsapp_qr: String,
    site_visit_link: String,
}

/// Calculator page
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let snapshot = state.store.snapshot();
    let catalog = PriceCatalog::default();
    let capacity = CapacityTable::default();

    let event = &snapshot.event;
    let selection = &snapshot.selection;

    let quote = calculators::compute_quote(event, selection, &catalog, QuoteMode::Calculator);
    let summary = capacity_summary(event.estimated_guests, selection, &capacity);
    let duration = compute_duration(event.setup_date, event.dismantle_date);

    let setup_is_sunday = is_sunday(event.setup_date);
    let dismantle_is_sunday = is_sunday(event.dismantle_date);
    let sunday_fee =
        calculators::sunday_overtime_fee(event.setup_date, event.dismantle_date, &catalog);
    let extension_fee = calculators::duration_extension_fee(duration, &catalog);

    let permit_total = if duration > 0 {
        rust_decimal::Decimal::from(duration) * catalog.mbi_permit_per_day
    } else {
        rust_decimal::Decimal::ZERO
    };

    let message = handoff::official_quote_message(event, &snapshot.customer, &quote);
    let whatsapp_link = handoff::wa_link(&state.site.whatsapp_phone, &message);
    let whatsapp_qr = handoff::link_qr_data_url(&whatsapp_link)?;
    let site_visit_link =
        handoff::wa_link(&state.site.whatsapp_phone, &handoff::site_visit_message());

    let tents = vec![
        TentRow {
            size: "10\" x 10\"",
            qty_field: "tent_10x10_qty",
            color_field: "tent_10x10_color",
            color: selection.tent_10x10.color.to_string(),
            capacity_per_tent: capacity.tent_10x10,
            row: ItemRow::new(selection.tent_10x10.quantity, catalog.tent_10x10, true),
        },
        TentRow {
            size: "20\" x 20\"",
            qty_field: "tent_20x20_qty",
            color_field: "tent_20x20_color",
            color: selection.tent_20x20.color.to_string(),
            capacity_per_tent: capacity.tent_20x20,
            row: ItemRow::new(selection.tent_20x20.quantity, catalog.tent_20x20, true),
        },
        TentRow {
            size: "20\" x 30\"",
            qty_field: "tent_20x30_qty",
            color_field: "tent_20x30_color",
            color: selection.tent_20x30.color.to_string(),
            capacity_per_tent: capacity.tent_20x30,
            row: ItemRow::new(selection.tent_20x30.quantity, catalog.tent_20x30, true),
        },
    ];

    let long_table_unit = if selection.long_table.with_skirting {
        catalog.long_table_with_skirting
    } else {
        catalog.long_table
    };

    let remaining_table_sets = summary
        .remaining_table_set_capacity
        .div_ceil(capacity.table_set.max(1));

    let template = CalculatorTemplate {
        event_date: date_value(event.event_date),
        event_type: event.event_type.clone(),
        guests_value: if event.estimated_guests == 0 {
            String::new()
        } else {
            event.estimated_guests.to_string()
        },
        estimated_guests: event.estimated_guests,
        setup_date: date_value(event.setup_date),
        dismantle_date: date_value(event.dismantle_date),
        setup_is_sunday,
        dismantle_is_sunday,
        area_public: event.area_type.is_public(),
        area_within_ipoh: event.area_selection == crate::models::AreaSelection::WithinIpoh,
        area_within_perak: event.area_selection == crate::models::AreaSelection::WithinPerak,
        area_outside_perak: event.area_selection == crate::models::AreaSelection::OutsidePerak,
        duration,
        tents,
        table_sets: ItemRow::new(selection.table_sets, catalog.table_set, true),
        long_table: ItemRow::new(selection.long_table.quantity, long_table_unit, true),
        long_table_skirting: selection.long_table.with_skirting,
        extra_chairs: ItemRow::new(selection.extra_chairs, catalog.extra_chair, true),
        cooler_fans: ItemRow::new(selection.cooler_fans, catalog.cooler_fan, false),
        parking_lots: ItemRow::new(selection.parking_lots, catalog.mbi_parking_per_lot, false),
        runner_total: format!("{:.2}", catalog.mbi_runner_fee),
        permit_total: format!("{:.2}", permit_total),
        sunday_fee: format!("{:.2}", sunday_fee),
        has_sunday_fee: !sunday_fee.is_zero(),
        sunday_note: if setup_is_sunday && dismantle_is_sunday {
            "Setup + Dismantle on Sunday"
        } else if setup_is_sunday {
            "Setup on Sunday"
        } else {
            "Dismantle on Sunday"
        },
        extension_fee: format!("{:.2}", extension_fee),
        has_extension_fee: !extension_fee.is_zero(),
        extension_days: duration.saturating_sub(crate::pricing::catalog::INCLUDED_RENTAL_DAYS),
        has_additional_charges: event.area_type.is_public()
            || !sunday_fee.is_zero()
            || !extension_fee.is_zero(),
        tent_capacity: summary.tent_capacity,
        table_set_capacity: summary.table_set_capacity,
        remaining_tent_capacity: summary.remaining_tent_capacity,
        remaining_table_set_capacity: summary.remaining_table_set_capacity,
        remaining_table_sets,
        recommended_table_sets: summary.recommended_table_sets,
        total: quote.grand_total_display(),
        cost_per_guest: format!(
            "{:.2}",
            calculators::round_money(
                cost_per_guest(quote.grand_total, event.estimated_guests),
                2
            )
        ),
        customer: snapshot.customer.clone(),
        whatsapp_link,
        whatsapp_qr,
        site_visit_link,
    };

    Ok(Html(template.render()?))
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// The full calculator form, posted on every change.
///
/// Everything arrives as text and is normalised here; nothing malformed
/// reaches the calculators.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub estimated_guests: String,
    #[serde(default)]
    pub setup_date: String,
    #[serde(default)]
    pub dismantle_date: String,
    #[serde(default)]
    pub area_type: String,
    #[serde(default)]
    pub area_selection: String,
    #[serde(default)]
    pub tent_10x10_qty: String,
    #[serde(default)]
    pub tent_10x10_color: String,
    #[serde(default)]
    pub tent_20x20_qty: String,
    #[serde(default)]
    pub tent_20x20_color: String,
    #[serde(default)]
    pub tent_20x30_qty: String,
    #[serde(default)]
    pub tent_20x30_color: String,
    #[serde(default)]
    pub table_sets: String,
    #[serde(default)]
    pub long_table_qty: String,
    #[serde(default)]
    pub long_table_skirting: Option<String>,
    #[serde(default)]
    pub extra_chairs: String,
    #[serde(default)]
    pub cooler_fans: String,
    #[serde(default)]
    pub parking_lots: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub customer_notes: String,
}

impl CalculatorForm {
    /// Normalise the raw form into the persisted snapshot.
    pub fn apply(&self, state: &mut PersistedState) {
        let event = &mut state.event;
        event.event_date = parse_date(&self.event_date);
        event.event_type = self.event_type.trim().to_string();
        event.estimated_guests = parse_guests(&self.estimated_guests);
        event.setup_date = parse_date(&self.setup_date);
        event.dismantle_date = parse_date(&self.dismantle_date);
        event.area_type = crate::models::AreaType::parse(&self.area_type);
        event.area_selection = crate::models::AreaSelection::parse(&self.area_selection);

        let selection = &mut state.selection;
        selection.tent_10x10 = TentSelection {
            quantity: parse_count(&self.tent_10x10_qty),
            color: TentColor::parse(&self.tent_10x10_color),
        };
        selection.tent_20x20 = TentSelection {
            quantity: parse_count(&self.tent_20x20_qty),
            color: TentColor::parse(&self.tent_20x20_color),
        };
        selection.tent_20x30 = TentSelection {
            quantity: parse_count(&self.tent_20x30_qty),
            color: TentColor::parse(&self.tent_20x30_color),
        };
        selection.table_sets = parse_count(&self.table_sets);
        selection.long_table = LongTableSelection {
            quantity: parse_count(&self.long_table_qty),
            with_skirting: self.long_table_skirting.is_some(),
        };
        selection.extra_chairs = parse_count(&self.extra_chairs);
        selection.cooler_fans = parse_count(&self.cooler_fans);
        selection.parking_lots = parse_count(&self.parking_lots);

        state.customer = CustomerData {
            name: self.customer_name.trim().to_string(),
            phone: self.customer_phone.trim().to_string(),
            email: self.customer_email.trim().to_string(),
            address: self.customer_address.trim().to_string(),
            notes: self.customer_notes.trim().to_string(),
        };
    }
}

/// Persist the posted form and re-render.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<CalculatorForm>,
) -> Redirect {
    state.store.update(|snapshot| form.apply(snapshot));
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_apply_normalises_bad_input() {
        let form = CalculatorForm {
            estimated_guests: "25000".to_string(),
            setup_date: "garbage".to_string(),
            dismantle_date: "2024-06-05".to_string(),
            area_type: "public".to_string(),
            tent_10x10_qty: "-4".to_string(),
            tent_10x10_color: "Red".to_string(),
            table_sets: "abc".to_string(),
            long_table_qty: "2".to_string(),
            long_table_skirting: Some("on".to_string()),
            ..CalculatorForm::default()
        };
        let mut state = PersistedState::default();
        form.apply(&mut state);

        assert_eq!(state.event.estimated_guests, crate::models::MAX_GUESTS);
        assert_eq!(state.event.setup_date, None);
        assert!(state.event.dismantle_date.is_some());
        assert!(state.event.area_type.is_public());
        assert_eq!(state.selection.tent_10x10.quantity, 0);
        assert_eq!(state.selection.tent_10x10.color, TentColor::Red);
        assert_eq!(state.selection.table_sets, 0);
        assert!(state.selection.long_table.with_skirting);
    }

    #[test]
    fn unchecked_skirting_resets_flag() {
        let mut state = PersistedState::default();
        state.selection.long_table.with_skirting = true;
        CalculatorForm::default().apply(&mut state);
        assert!(!state.selection.long_table.with_skirting);
    }
}
