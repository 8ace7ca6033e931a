//! WhatsApp hand-off channel.
//!
//! The final step of both flows is a prefilled WhatsApp conversation: the
//! current form state is serialised into a plain-text message, wrapped into
//! a `wa.me` link, and also rendered as a QR code for customers browsing on
//! a desktop machine.

use std::fmt::Write as _;
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::NaiveDate;
use image::Luma;
use qrcode::QrCode;

use crate::error::{AppError, Result};
use crate::models::{CustomerData, EventParameters, QuoteRequest};
use crate::pricing::Quote;

/// Company name used in message salutations.
const COMPANY_NAME: &str = "Venus Excellent Sdn Bhd";

fn date_or_tbc(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "TBC".to_string())
}

fn push_contact(message: &mut String, customer: &CustomerData) {
    let _ = writeln!(message, "*Contact*");
    if !customer.name.is_empty() {
        let _ = writeln!(message, "Name: {}", customer.name);
    }
    if !customer.phone.is_empty() {
        let _ = writeln!(message, "Phone: {}", customer.phone);
    }
    if !customer.email.is_empty() {
        let _ = writeln!(message, "Email: {}", customer.email);
    }
    if !customer.address.is_empty() {
        let _ = writeln!(message, "Address: {}", customer.address);
    }
    if !customer.notes.is_empty() {
        let _ = writeln!(message, "Notes: {}", customer.notes);
    }
}

/// The "GET OFFICIAL QUOTE" message: event summary, selected items, totals
/// and contact details.
pub fn official_quote_message(
    event: &EventParameters,
    customer: &CustomerData,
    quote: &Quote,
) -> String {
    let mut message = String::new();
    let _ = writeln!(message, "Hello {COMPANY_NAME},");
    let _ = writeln!(message);
    let _ = writeln!(message, "I would like an official quotation for my event.");
    let _ = writeln!(message);
    let _ = writeln!(message, "*Event Details*");
    if !event.event_type.is_empty() {
        let _ = writeln!(message, "Event Type: {}", event.event_type);
    }
    let _ = writeln!(message, "Event Date: {}", date_or_tbc(event.event_date));
    let _ = writeln!(message, "Setup: {}", date_or_tbc(event.setup_date));
    let _ = writeln!(message, "Dismantle: {}", date_or_tbc(event.dismantle_date));
    let _ = writeln!(message, "Estimated Guests: {} pax", event.estimated_guests);
    let _ = writeln!(
        message,
        "Area: {} ({})",
        if event.area_type.is_public() { "Public Area" } else { "Private Area" },
        event.area_selection.label()
    );
    let _ = writeln!(message);
    if quote.has_lines() {
        let _ = writeln!(message, "*Selected Items*");
        for line in &quote.lines {
            let _ = writeln!(
                message,
                "- {} x {} = RM {}",
                line.name,
                line.quantity,
                line.total_display()
            );
        }
        let _ = writeln!(message);
        let _ = writeln!(message, "Estimated Total: RM {}", quote.grand_total_display());
        let _ = writeln!(message);
    }
    push_contact(&mut message, customer);
    let _ = writeln!(message);
    let _ = write!(message, "Thank you!");
    message
}

/// The catalogue page's site-visit request.
pub fn site_visit_message() -> String {
    format!(
        "Hello {COMPANY_NAME},\n\n\
         I would like to request a site visit to view your catalogue items \
         and discuss my event requirements.\n\n\
         Please contact me to arrange a suitable time.\n\n\
         Thank you!"
    )
}

/// The dessert-catering quote request message.
pub fn quote_request_message(request: &QuoteRequest) -> String {
    let mut message = String::new();
    let _ = writeln!(message, "Hello Etre Patisserie,");
    let _ = writeln!(message);
    let _ = writeln!(message, "I would like a personalised dessert catering quote.");
    let _ = writeln!(message);
    let _ = writeln!(message, "*Event*");
    if !request.event.event_name.is_empty() {
        let _ = writeln!(message, "Name: {}", request.event.event_name);
    }
    let _ = writeln!(message, "Date: {}", date_or_tbc(request.event.event_date));
    let _ = writeln!(message, "Guests: {} pax", request.event.estimated_guests);
    if !request.event.budget_per_person_from.is_empty()
        || !request.event.budget_per_person_to.is_empty()
    {
        let _ = writeln!(
            message,
            "Budget per person: RM {} - RM {}",
            request.event.budget_per_person_from, request.event.budget_per_person_to
        );
    }
    if request.branding.include_brand_logo {
        let _ = writeln!(message, "Branding: include brand logo");
    }
    if request.branding.match_brand_colours {
        let _ = writeln!(message, "Branding: match brand colours");
    }
    if !request.menu.categories.is_empty() {
        let categories: Vec<&str> = request.menu.categories.iter().map(|c| c.label()).collect();
        let _ = writeln!(message, "Menu categories: {}", categories.join(", "));
    }
    let _ = writeln!(message);
    push_contact(&mut message, &request.customer);
    let _ = writeln!(message);
    let _ = write!(message, "Thank you!");
    message
}

/// Build the `wa.me` deep link for a prefilled message.
pub fn wa_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}

const QR_SCALE: u32 = 6;
const QR_QUIET_ZONE: u32 = 4;

/// Render a link as a PNG QR code, returned as a `data:` URL for inline use.
pub fn link_qr_data_url(link: &str) -> Result<String> {
    let code = QrCode::new(link.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {e}")))?;

    let modules = code.width() as u32;
    let size = (modules + 2 * QR_QUIET_ZONE) * QR_SCALE;
    let mut img = image::GrayImage::from_pixel(size, size, Luma([255u8]));
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == qrcode::Color::Dark {
                let x0 = (x + QR_QUIET_ZONE) * QR_SCALE;
                let y0 = (y + QR_QUIET_ZONE) * QR_SCALE;
                for dy in 0..QR_SCALE {
                    for dx in 0..QR_SCALE {
                        img.put_pixel(x0 + dx, y0 + dy, Luma([0u8]));
                    }
                }
            }
        }
    }

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("PNG encoding failed: {e}")))?;

    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}
