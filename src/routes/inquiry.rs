//! Dessert-catering quote-request page (the patisserie flow).
//!
//! No pricing engine behind this one: the request is captured, saved, and
//! handed off over WhatsApp for a personalised quotation.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::Result;
use crate::handoff;
use crate::models::inquiry::{
    CustomisationLevel, DessertCategory, DessertSize, DrinksOption, EventLocation,
    PackagingOption, QuoteRequest, VenueType,
};
use crate::models::{parse_date, parse_guests, CustomerData};
use crate::AppState;

#[derive(Template)]
#[template(path = "inquiry.html")]
struct InquiryTemplate {
    request: QuoteRequest,
    event_date: String,
    setup_date: String,
    dismantle_date: String,
    location_kl: bool,
    location_ipoh: bool,
    location_others: bool,
    venue_indoor: bool,
    venue_outdoor: bool,
    category_savoury: bool,
    category_viennoiserie: bool,
    category_tart: bool,
    category_gateaux: bool,
    size_normal: bool,
    size_mini: bool,
    drinks_coffee: bool,
    drinks_tea: bool,
    drinks_fizzy: bool,
    drinks_others: bool,
    packaging_own: bool,
    packaging_existing: bool,
    packaging_premium: bool,
    customisation_current: bool,
    customisation_partial: bool,
    customisation_full: bool,
    guests_value: String,
    submitted: bool,
    whatsapp_link: String,
}

/// Quote-request page
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let snapshot = state.store.snapshot();
    let request = snapshot.quote_request;

    let message = handoff::quote_request_message(&request);
    let whatsapp_link = handoff::wa_link(&state.site.whatsapp_phone, &message);

    let template = InquiryTemplate {
        event_date: request.event.event_date.map(|d| d.to_string()).unwrap_or_default(),
        setup_date: request.event.setup_date.map(|d| d.to_string()).unwrap_or_default(),
        dismantle_date: request.event.dismantle_date.map(|d| d.to_string()).unwrap_or_default(),
        location_kl: request.event.event_location == EventLocation::EtreCafeKl,
        location_ipoh: request.event.event_location == EventLocation::EtreCafeIpoh,
        location_others: request.event.event_location == EventLocation::Others,
        venue_indoor: request.event.other_venue_type == Some(VenueType::Indoor),
        venue_outdoor: request.event.other_venue_type == Some(VenueType::Outdoor),
        category_savoury: request.menu.categories.contains(&DessertCategory::Savoury),
        category_viennoiserie: request.menu.categories.contains(&DessertCategory::Viennoiserie),
        category_tart: request.menu.categories.contains(&DessertCategory::Tart),
        category_gateaux: request.menu.categories.contains(&DessertCategory::Gateaux),
        size_normal: request.menu.dessert_size == Some(DessertSize::Normal),
        size_mini: request.menu.dessert_size == Some(DessertSize::Mini),
        drinks_coffee: request.menu.drinks.contains(&DrinksOption::Coffee),
        drinks_tea: request.menu.drinks.contains(&DrinksOption::Tea),
        drinks_fizzy: request.menu.drinks.contains(&DrinksOption::Fizzy),
        drinks_others: request.menu.drinks.contains(&DrinksOption::Others),
        packaging_own: request.menu.packaging == Some(PackagingOption::CustomerOwn),
        packaging_existing: request.menu.packaging == Some(PackagingOption::EtreExisting),
        packaging_premium: request.menu.packaging == Some(PackagingOption::Premium),
        customisation_current: request.menu.customisation_level == Some(CustomisationLevel::Current),
        customisation_partial: request.menu.customisation_level == Some(CustomisationLevel::Partial),
        customisation_full: request.menu.customisation_level == Some(CustomisationLevel::Full),
        guests_value: if request.event.estimated_guests == 0 {
            String::new()
        } else {
            request.event.estimated_guests.to_string()
        },
        submitted: request.submitted_at.is_some(),
        whatsapp_link,
        request,
    };

    Ok(Html(template.render()?))
}

/// The quote-request form, posted as a whole on submit.
#[derive(Debug, Default, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub event_name: String,
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
    pub budget_per_person_from: String,
    #[serde(default)]
    pub budget_per_person_to: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub other_area_name: String,
    #[serde(default)]
    pub other_venue_type: String,
    #[serde(default)]
    pub include_brand_logo: Option<String>,
    #[serde(default)]
    pub match_brand_colours: Option<String>,
    #[serde(default)]
    pub logo_on_dessert: Option<String>,
    #[serde(default)]
    pub logo_on_packaging: Option<String>,
    #[serde(default)]
    pub logo_on_others: Option<String>,
    #[serde(default)]
    pub logo_on_others_text: String,
    #[serde(default)]
    pub colour_on_dessert: Option<String>,
    #[serde(default)]
    pub colour_on_packaging: Option<String>,
    #[serde(default)]
    pub colour_on_others: Option<String>,
    #[serde(default)]
    pub colour_on_others_text: String,
    #[serde(default)]
    pub customisation_level: String,
    #[serde(default)]
    pub customisation_notes: String,
    #[serde(default)]
    pub category_savoury: Option<String>,
    #[serde(default)]
    pub category_viennoiserie: Option<String>,
    #[serde(default)]
    pub category_tart: Option<String>,
    #[serde(default)]
    pub category_gateaux: Option<String>,
    #[serde(default)]
    pub dessert_size: String,
    #[serde(default)]
    pub drinks_coffee: Option<String>,
    #[serde(default)]
    pub drinks_tea: Option<String>,
    #[serde(default)]
    pub drinks_fizzy: Option<String>,
    #[serde(default)]
    pub drinks_others: Option<String>,
    #[serde(default)]
    pub drinks_other_text: String,
    #[serde(default)]
    pub packaging: String,
    #[serde(default)]
    pub company_name: String,
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

impl InquiryForm {
    fn apply(&self, request: &mut QuoteRequest) {
        let event = &mut request.event;
        event.event_name = self.event_name.trim().to_string();
        event.event_date = parse_date(&self.event_date);
        event.event_type = self.event_type.trim().to_string();
        event.estimated_guests = parse_guests(&self.estimated_guests);
        event.setup_date = parse_date(&self.setup_date);
        event.dismantle_date = parse_date(&self.dismantle_date);
        event.budget_per_person_from = self.budget_per_person_from.trim().to_string();
        event.budget_per_person_to = self.budget_per_person_to.trim().to_string();
        event.event_location = match self.event_location.as_str() {
            "etre-cafe-ipoh" => EventLocation::EtreCafeIpoh,
            "others" => EventLocation::Others,
            _ => EventLocation::EtreCafeKl,
        };
        event.other_area_name = self.other_area_name.trim().to_string();
        event.other_venue_type = match self.other_venue_type.as_str() {
            "indoor" => Some(VenueType::Indoor),
            "outdoor" => Some(VenueType::Outdoor),
            _ => None,
        };

        let branding = &mut request.branding;
        branding.include_brand_logo = self.include_brand_logo.is_some();
        branding.match_brand_colours = self.match_brand_colours.is_some();
        branding.logo_on_dessert = self.logo_on_dessert.is_some();
        branding.logo_on_packaging = self.logo_on_packaging.is_some();
        branding.logo_on_others = self.logo_on_others.is_some();
        branding.logo_on_others_text = self.logo_on_others_text.trim().to_string();
        branding.colour_on_dessert = self.colour_on_dessert.is_some();
        branding.colour_on_packaging = self.colour_on_packaging.is_some();
        branding.colour_on_others = self.colour_on_others.is_some();
        branding.colour_on_others_text = self.colour_on_others_text.trim().to_string();

        let menu = &mut request.menu;
        menu.customisation_level = match self.customisation_level.as_str() {
            "current" => Some(CustomisationLevel::Current),
            "partial" => Some(CustomisationLevel::Partial),
            "full" => Some(CustomisationLevel::Full),
            _ => None,
        };
        menu.customisation_notes = self.customisation_notes.trim().to_string();
        menu.categories.clear();
        for (flag, category) in [
            (&self.category_savoury, DessertCategory::Savoury),
            (&self.category_viennoiserie, DessertCategory::Viennoiserie),
            (&self.category_tart, DessertCategory::Tart),
            (&self.category_gateaux, DessertCategory::Gateaux),
        ] {
            if flag.is_some() {
                menu.categories.push(category);
            }
        }
        menu.dessert_size = match self.dessert_size.as_str() {
            "normal" => Some(DessertSize::Normal),
            "mini" => Some(DessertSize::Mini),
            _ => None,
        };
        menu.drinks.clear();
        for (flag, drink) in [
            (&self.drinks_coffee, DrinksOption::Coffee),
            (&self.drinks_tea, DrinksOption::Tea),
            (&self.drinks_fizzy, DrinksOption::Fizzy),
            (&self.drinks_others, DrinksOption::Others),
        ] {
            if flag.is_some() {
                menu.drinks.push(drink);
            }
        }
        menu.drinks_other_text = self.drinks_other_text.trim().to_string();
        menu.packaging = match self.packaging.as_str() {
            "customer-own" => Some(PackagingOption::CustomerOwn),
            "etre-existing" => Some(PackagingOption::EtreExisting),
            "premium" => Some(PackagingOption::Premium),
            _ => None,
        };

        request.company_name = self.company_name.trim().to_string();
        request.customer = CustomerData {
            name: self.customer_name.trim().to_string(),
            phone: self.customer_phone.trim().to_string(),
            email: self.customer_email.trim().to_string(),
            address: self.customer_address.trim().to_string(),
            notes: self.customer_notes.trim().to_string(),
        };
        request.submitted_at = Some(Utc::now());
    }
}

/// Persist the posted quote request and re-render.
pub async fn update(State(state): State<AppState>, Form(form): Form<InquiryForm>) -> Redirect {
    state.store.update(|snapshot| form.apply(&mut snapshot.quote_request));
    Redirect::to("/inquiry")
}
