//! Core quotation calculation functions.
//!
//! Pure functions for the rental pricing math - no storage access, no I/O.
//! Every output is a deterministic function of the input snapshot, and every
//! function is total: absent dates and zero quantities produce zero-valued
//! results instead of errors, so the calculator never fails while the
//! customer is still typing.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{EventParameters, ItemSelection};

use super::catalog::{CapacityTable, PriceCatalog, INCLUDED_RENTAL_DAYS, SST_RATE};
use super::responses::{CapacitySummary, LineQuantity, Quote, QuoteLine};

/// Which totals a quote carries: the live calculator shows the plain
/// subtotal, the booking flow applies a flat 5% online-booking discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    #[default]
    Calculator,
    Booking,
}

impl QuoteMode {
    pub fn discount_rate(self) -> Decimal {
        match self {
            QuoteMode::Calculator => Decimal::ZERO,
            QuoteMode::Booking => dec!(0.05),
        }
    }
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Used only at the display boundary; the calculators themselves keep exact
/// decimals so summation never accumulates rounding drift.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use venusevents_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Inclusive rental duration in days.
///
/// Same-day setup and dismantle count as one day. Returns 0 when either date
/// is absent or the dismantle date precedes the setup date.
pub fn compute_duration(setup: Option<NaiveDate>, dismantle: Option<NaiveDate>) -> u32 {
    match (setup, dismantle) {
        (Some(setup), Some(dismantle)) => {
            let days = (dismantle - setup).num_days() + 1;
            days.max(0) as u32
        }
        _ => 0,
    }
}

/// True iff the date is present and falls on a Sunday.
pub fn is_sunday(date: Option<NaiveDate>) -> bool {
    date.map(|d| d.weekday() == Weekday::Sun).unwrap_or(false)
}

/// Sunday overtime surcharge: charged once per Sunday endpoint.
///
/// Setup and dismantle are checked independently, so both falling on a
/// Sunday charges twice - including when both are the *same* calendar
/// Sunday. That double charge for a single-day Sunday event is the
/// established billing behavior; see the test of the same name.
pub fn sunday_overtime_fee(
    setup: Option<NaiveDate>,
    dismantle: Option<NaiveDate>,
    catalog: &PriceCatalog,
) -> Decimal {
    let mut fee = Decimal::ZERO;
    if is_sunday(setup) {
        fee += catalog.sunday_ot_per_day;
    }
    if is_sunday(dismantle) {
        fee += catalog.sunday_ot_per_day;
    }
    fee
}

/// Surcharge for keeping the equipment beyond the included three days.
pub fn duration_extension_fee(duration: u32, catalog: &PriceCatalog) -> Decimal {
    if duration <= INCLUDED_RENTAL_DAYS {
        Decimal::ZERO
    } else {
        Decimal::from(duration - INCLUDED_RENTAL_DAYS) * catalog.extension_per_day
    }
}

/// Base, SST and line total for a counted item.
pub fn line_amounts(quantity: u32, unit_price: Decimal, sst_applies: bool) -> (Decimal, Decimal, Decimal) {
    let base = Decimal::from(quantity) * unit_price;
    let sst = if sst_applies { base * SST_RATE } else { Decimal::ZERO };
    (base, sst, base + sst)
}

fn counted_line(
    name: impl Into<String>,
    quantity: u32,
    unit_price: Decimal,
    sst_applies: bool,
) -> QuoteLine {
    let (_, sst, total) = line_amounts(quantity, unit_price, sst_applies);
    QuoteLine {
        name: name.into(),
        quantity: LineQuantity::Count(quantity),
        unit_price,
        sst,
        total,
    }
}

/// Build the ordered line items for the current selection.
///
/// A line appears only when its driving quantity is non-zero (or, for the
/// MBI fees, when the event occupies a public area). The order is fixed:
/// tents, table set, long table, extra chairs, cooler fan, MBI fees,
/// Sunday overtime, duration extension.
pub fn line_items(
    event: &EventParameters,
    selection: &ItemSelection,
    catalog: &PriceCatalog,
) -> Vec<QuoteLine> {
    let mut lines = Vec::new();

    for (tent, size, unit_price) in [
        (selection.tent_10x10, "10\" x 10\"", catalog.tent_10x10),
        (selection.tent_20x20, "20\" x 20\"", catalog.tent_20x20),
        (selection.tent_20x30, "20\" x 30\"", catalog.tent_20x30),
    ] {
        if tent.quantity > 0 {
            lines.push(counted_line(
                format!("Arabian Tent ({size} ft) - {}", tent.color),
                tent.quantity,
                unit_price,
                true,
            ));
        }
    }

    if selection.table_sets > 0 {
        lines.push(counted_line(
            "Table Set (10 plastic chairs + 4ft round table with red cloth)",
            selection.table_sets,
            catalog.table_set,
            true,
        ));
    }

    if selection.long_table.quantity > 0 {
        let (name, unit_price) = if selection.long_table.with_skirting {
            ("Long Table (3ft x 6ft) with Skirting", catalog.long_table_with_skirting)
        } else {
            ("Long Table (3ft x 6ft)", catalog.long_table)
        };
        lines.push(counted_line(name, selection.long_table.quantity, unit_price, true));
    }

    if selection.extra_chairs > 0 {
        lines.push(counted_line(
            "Extra Plastic Chair",
            selection.extra_chairs,
            catalog.extra_chair,
            true,
        ));
    }

    if selection.cooler_fans > 0 {
        lines.push(counted_line("Cooler Fan", selection.cooler_fans, catalog.cooler_fan, false));
    }

    let duration = compute_duration(event.setup_date, event.dismantle_date);

    if event.area_type.is_public() {
        lines.push(counted_line("MBI Runner Fee", 1, catalog.mbi_runner_fee, false));

        if duration > 0 {
            lines.push(QuoteLine {
                name: "MBI Permit Fee".to_string(),
                quantity: LineQuantity::Label(format!("{duration} day(s)")),
                unit_price: catalog.mbi_permit_per_day,
                sst: Decimal::ZERO,
                total: Decimal::from(duration) * catalog.mbi_permit_per_day,
            });
        }

        if selection.parking_lots > 0 {
            lines.push(counted_line(
                "MBI Parking Lots",
                selection.parking_lots,
                catalog.mbi_parking_per_lot,
                false,
            ));
        }
    }

    let sunday_fee = sunday_overtime_fee(event.setup_date, event.dismantle_date, catalog);
    if sunday_fee > Decimal::ZERO {
        let both = is_sunday(event.setup_date) && is_sunday(event.dismantle_date);
        lines.push(QuoteLine {
            name: "Sunday OT Fee".to_string(),
            quantity: LineQuantity::Label(if both { "2 days" } else { "1 day" }.to_string()),
            unit_price: catalog.sunday_ot_per_day,
            sst: Decimal::ZERO,
            total: sunday_fee,
        });
    }

    let extension_fee = duration_extension_fee(duration, catalog);
    if extension_fee > Decimal::ZERO {
        lines.push(QuoteLine {
            name: "Duration Extension Fee".to_string(),
            quantity: LineQuantity::Label(format!("{} day(s)", duration - INCLUDED_RENTAL_DAYS)),
            unit_price: catalog.extension_per_day,
            sst: Decimal::ZERO,
            total: extension_fee,
        });
    }

    lines
}

/// Compute the full quote for the current snapshot.
///
/// The subtotal is the exact sum of the line totals; the discount is a pure
/// multiplier on the subtotal, applied only in booking mode.
pub fn compute_quote(
    event: &EventParameters,
    selection: &ItemSelection,
    catalog: &PriceCatalog,
    mode: QuoteMode,
) -> Quote {
    let lines = line_items(event, selection, catalog);
    let subtotal: Decimal = lines.iter().map(|line| line.total).sum();
    let discount = subtotal * mode.discount_rate();
    Quote {
        lines,
        subtotal,
        discount,
        grand_total: subtotal - discount,
        mode,
    }
}

/// Total guest capacity of the selected tents.
pub fn tent_capacity(selection: &ItemSelection, capacity: &CapacityTable) -> u32 {
    selection.tent_10x10.quantity * capacity.tent_10x10
        + selection.tent_20x20.quantity * capacity.tent_20x20
        + selection.tent_20x30.quantity * capacity.tent_20x30
}

/// Total guest capacity of the selected table sets.
pub fn table_set_capacity(table_sets: u32, capacity: &CapacityTable) -> u32 {
    table_sets * capacity.table_set
}

/// Guests not yet covered by the current capacity; never negative.
pub fn remaining_capacity(estimated_guests: u32, current_capacity: u32) -> u32 {
    estimated_guests.saturating_sub(current_capacity)
}

/// Table sets needed to seat every estimated guest.
pub fn recommended_table_sets(estimated_guests: u32, capacity: &CapacityTable) -> u32 {
    estimated_guests.div_ceil(capacity.table_set)
}

/// All advisory capacity figures for the hint text on the calculator page.
pub fn capacity_summary(
    estimated_guests: u32,
    selection: &ItemSelection,
    capacity: &CapacityTable,
) -> CapacitySummary {
    let tents = tent_capacity(selection, capacity);
    let tables = table_set_capacity(selection.table_sets, capacity);
    CapacitySummary {
        tent_capacity: tents,
        table_set_capacity: tables,
        remaining_tent_capacity: remaining_capacity(estimated_guests, tents),
        remaining_table_set_capacity: remaining_capacity(estimated_guests, tables),
        recommended_table_sets: recommended_table_sets(estimated_guests, capacity),
    }
}

/// Estimated total divided across the guest count; zero for zero guests.
pub fn cost_per_guest(total: Decimal, estimated_guests: u32) -> Decimal {
    if estimated_guests == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(estimated_guests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaType, LongTableSelection, TentColor, TentSelection};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        Some(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn catalog() -> PriceCatalog {
        PriceCatalog::default()
    }

    fn capacity() -> CapacityTable {
        CapacityTable::default()
    }

    // ==================== compute_duration tests ====================

    #[test]
    fn test_duration_same_day_is_one() {
        assert_eq!(compute_duration(date(2024, 6, 1), date(2024, 6, 1)), 1);
    }

    #[test]
    fn test_duration_is_inclusive() {
        assert_eq!(compute_duration(date(2024, 6, 1), date(2024, 6, 3)), 3);
        assert_eq!(compute_duration(date(2024, 6, 1), date(2024, 6, 7)), 7);
    }

    #[test]
    fn test_duration_reversed_dates_is_zero() {
        assert_eq!(compute_duration(date(2024, 6, 3), date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_duration_missing_dates_is_zero() {
        assert_eq!(compute_duration(None, date(2024, 6, 1)), 0);
        assert_eq!(compute_duration(date(2024, 6, 1), None), 0);
        assert_eq!(compute_duration(None, None), 0);
    }

    // ==================== is_sunday tests ====================

    #[test]
    fn test_is_sunday() {
        // 2024-06-02 was a Sunday, 2024-06-03 a Monday
        assert!(is_sunday(date(2024, 6, 2)));
        assert!(!is_sunday(date(2024, 6, 3)));
        assert!(!is_sunday(None));
    }

    // ==================== sunday_overtime_fee tests ====================

    #[test]
    fn test_sunday_fee_neither_endpoint() {
        let fee = sunday_overtime_fee(date(2024, 6, 3), date(2024, 6, 5), &catalog());
        assert_eq!(fee, Decimal::ZERO);
    }

    #[test]
    fn test_sunday_fee_single_endpoint() {
        let fee = sunday_overtime_fee(date(2024, 6, 2), date(2024, 6, 4), &catalog());
        assert_eq!(fee, dec!(300));
        let fee = sunday_overtime_fee(date(2024, 5, 31), date(2024, 6, 2), &catalog());
        assert_eq!(fee, dec!(300));
    }

    #[test]
    fn test_sunday_fee_both_endpoints() {
        // 2024-06-02 and 2024-06-09 are consecutive Sundays
        let fee = sunday_overtime_fee(date(2024, 6, 2), date(2024, 6, 9), &catalog());
        assert_eq!(fee, dec!(600));
    }

    #[test]
    fn test_sunday_fee_same_sunday_charges_twice() {
        // A single-day Sunday event is charged for both the setup and the
        // dismantle check. Possibly surprising, but it is the established
        // billing behavior, so it is pinned here rather than "fixed".
        let fee = sunday_overtime_fee(date(2024, 6, 2), date(2024, 6, 2), &catalog());
        assert_eq!(fee, dec!(600));
    }

    // ==================== duration_extension_fee tests ====================

    #[test]
    fn test_extension_fee_within_included_days() {
        assert_eq!(duration_extension_fee(0, &catalog()), Decimal::ZERO);
        assert_eq!(duration_extension_fee(3, &catalog()), Decimal::ZERO);
    }

    #[test]
    fn test_extension_fee_beyond_included_days() {
        assert_eq!(duration_extension_fee(4, &catalog()), dec!(300));
        assert_eq!(duration_extension_fee(5, &catalog()), dec!(600));
    }

    // ==================== line_items tests ====================

    #[test]
    fn test_zero_quantities_produce_no_lines() {
        let lines = line_items(&EventParameters::default(), &ItemSelection::default(), &catalog());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_tent_line_applies_sst() {
        let selection = ItemSelection {
            tent_10x10: TentSelection { quantity: 2, color: TentColor::White },
            ..ItemSelection::default()
        };
        let lines = line_items(&EventParameters::default(), &selection, &catalog());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Arabian Tent (10\" x 10\" ft) - White");
        assert_eq!(lines[0].quantity, LineQuantity::Count(2));
        assert_eq!(lines[0].unit_price, dec!(220));
        assert_eq!(lines[0].sst, dec!(35.2));
        assert_eq!(lines[0].total, dec!(475.2));
    }

    #[test]
    fn test_long_table_price_depends_on_skirting() {
        let mut selection = ItemSelection {
            long_table: LongTableSelection { quantity: 4, with_skirting: false },
            ..ItemSelection::default()
        };
        let lines = line_items(&EventParameters::default(), &selection, &catalog());
        assert_eq!(lines[0].name, "Long Table (3ft x 6ft)");
        assert_eq!(lines[0].unit_price, dec!(15));

        selection.long_table.with_skirting = true;
        let lines = line_items(&EventParameters::default(), &selection, &catalog());
        assert_eq!(lines[0].name, "Long Table (3ft x 6ft) with Skirting");
        assert_eq!(lines[0].unit_price, dec!(30));
        assert_eq!(lines[0].total, dec!(120) + dec!(9.6));
    }

    #[test]
    fn test_cooler_fan_is_sst_exempt() {
        let selection = ItemSelection { cooler_fans: 1, ..ItemSelection::default() };
        let lines = line_items(&EventParameters::default(), &selection, &catalog());
        assert_eq!(lines[0].sst, Decimal::ZERO);
        assert_eq!(lines[0].total, dec!(200));
    }

    #[test]
    fn test_public_area_fees() {
        let event = EventParameters {
            area_type: AreaType::Public,
            setup_date: date(2024, 6, 3),
            dismantle_date: date(2024, 6, 4),
            ..EventParameters::default()
        };
        let selection = ItemSelection { parking_lots: 3, ..ItemSelection::default() };
        let lines = line_items(&event, &selection, &catalog());

        assert_eq!(lines[0].name, "MBI Runner Fee");
        assert_eq!(lines[0].quantity, LineQuantity::Count(1));
        assert_eq!(lines[0].total, dec!(100));

        assert_eq!(lines[1].name, "MBI Permit Fee");
        assert_eq!(lines[1].quantity, LineQuantity::Label("2 day(s)".to_string()));
        assert_eq!(lines[1].total, dec!(40));

        assert_eq!(lines[2].name, "MBI Parking Lots");
        assert_eq!(lines[2].total, dec!(30));
    }

    #[test]
    fn test_public_area_without_dates_still_charges_runner() {
        let event = EventParameters { area_type: AreaType::Public, ..EventParameters::default() };
        let lines = line_items(&event, &ItemSelection::default(), &catalog());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "MBI Runner Fee");
    }

    #[test]
    fn test_private_area_has_no_mbi_lines() {
        let event = EventParameters {
            setup_date: date(2024, 6, 3),
            dismantle_date: date(2024, 6, 4),
            ..EventParameters::default()
        };
        let selection = ItemSelection { parking_lots: 3, ..ItemSelection::default() };
        let lines = line_items(&event, &selection, &catalog());
        assert!(lines.iter().all(|line| !line.name.starts_with("MBI")));
    }

    #[test]
    fn test_sunday_line_quantity_labels() {
        let event = EventParameters {
            setup_date: date(2024, 6, 2),
            dismantle_date: date(2024, 6, 9),
            ..EventParameters::default()
        };
        let lines = line_items(&event, &ItemSelection::default(), &catalog());
        let sunday = lines.iter().find(|l| l.name == "Sunday OT Fee").unwrap();
        assert_eq!(sunday.quantity, LineQuantity::Label("2 days".to_string()));
        assert_eq!(sunday.total, dec!(600));

        let event = EventParameters {
            setup_date: date(2024, 6, 2),
            dismantle_date: date(2024, 6, 4),
            ..EventParameters::default()
        };
        let lines = line_items(&event, &ItemSelection::default(), &catalog());
        let sunday = lines.iter().find(|l| l.name == "Sunday OT Fee").unwrap();
        assert_eq!(sunday.quantity, LineQuantity::Label("1 day".to_string()));
        assert_eq!(sunday.total, dec!(300));
    }

    #[test]
    fn test_extension_line_quantity_label() {
        let event = EventParameters {
            setup_date: date(2024, 6, 3),
            dismantle_date: date(2024, 6, 7),
            ..EventParameters::default()
        };
        let lines = line_items(&event, &ItemSelection::default(), &catalog());
        let extension = lines.iter().find(|l| l.name == "Duration Extension Fee").unwrap();
        assert_eq!(extension.quantity, LineQuantity::Label("2 day(s)".to_string()));
        assert_eq!(extension.total, dec!(600));
    }

    #[test]
    fn test_line_order_is_fixed() {
        let event = EventParameters {
            area_type: AreaType::Public,
            setup_date: date(2024, 6, 2),  // Sunday
            dismantle_date: date(2024, 6, 6), // 5 days
            ..EventParameters::default()
        };
        let selection = ItemSelection {
            tent_10x10: TentSelection { quantity: 1, color: TentColor::White },
            tent_20x20: TentSelection { quantity: 1, color: TentColor::Red },
            tent_20x30: TentSelection { quantity: 1, color: TentColor::Yellow },
            table_sets: 2,
            long_table: LongTableSelection { quantity: 1, with_skirting: true },
            extra_chairs: 5,
            cooler_fans: 1,
            parking_lots: 2,
        };
        let lines = line_items(&event, &selection, &catalog());
        let names: Vec<&str> = lines.iter().map(|line| line.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Arabian Tent (10\" x 10\" ft) - White",
                "Arabian Tent (20\" x 20\" ft) - Red",
                "Arabian Tent (20\" x 30\" ft) - Yellow",
                "Table Set (10 plastic chairs + 4ft round table with red cloth)",
                "Long Table (3ft x 6ft) with Skirting",
                "Extra Plastic Chair",
                "Cooler Fan",
                "MBI Runner Fee",
                "MBI Permit Fee",
                "MBI Parking Lots",
                "Sunday OT Fee",
                "Duration Extension Fee",
            ]
        );
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn test_subtotal_is_exact_sum_of_line_totals() {
        let event = EventParameters {
            area_type: AreaType::Public,
            setup_date: date(2024, 6, 2),
            dismantle_date: date(2024, 6, 6),
            ..EventParameters::default()
        };
        let selection = ItemSelection {
            tent_10x10: TentSelection { quantity: 3, color: TentColor::Red },
            table_sets: 7,
            long_table: LongTableSelection { quantity: 2, with_skirting: false },
            extra_chairs: 13,
            cooler_fans: 2,
            parking_lots: 1,
            ..ItemSelection::default()
        };
        let quote = compute_quote(&event, &selection, &catalog(), QuoteMode::Calculator);
        let expected: Decimal = quote.lines.iter().map(|line| line.total).sum();
        assert_eq!(quote.subtotal, expected);
        assert_eq!(quote.discount, Decimal::ZERO);
        assert_eq!(quote.grand_total, quote.subtotal);
    }

    #[test]
    fn test_booking_mode_applies_five_percent_discount() {
        // 5 cooler fans = RM1000 flat, no SST, so the subtotal is exactly 1000
        let selection = ItemSelection { cooler_fans: 5, ..ItemSelection::default() };
        let quote = compute_quote(
            &EventParameters::default(),
            &selection,
            &catalog(),
            QuoteMode::Booking,
        );
        assert_eq!(quote.subtotal, dec!(1000));
        assert_eq!(quote.discount, dec!(50));
        assert_eq!(quote.grand_total, dec!(950));
    }

    #[test]
    fn test_quote_is_deterministic() {
        let selection = ItemSelection {
            tent_20x20: TentSelection { quantity: 2, color: TentColor::White },
            ..ItemSelection::default()
        };
        let event = EventParameters::default();
        let first = compute_quote(&event, &selection, &catalog(), QuoteMode::Booking);
        let second = compute_quote(&event, &selection, &catalog(), QuoteMode::Booking);
        assert_eq!(first, second);
    }

    // ==================== capacity tests ====================

    #[test]
    fn test_tent_capacity_sums_tiers() {
        let selection = ItemSelection {
            tent_10x10: TentSelection { quantity: 2, color: TentColor::White },
            tent_20x20: TentSelection { quantity: 1, color: TentColor::White },
            tent_20x30: TentSelection { quantity: 1, color: TentColor::White },
            ..ItemSelection::default()
        };
        assert_eq!(tent_capacity(&selection, &capacity()), 2 * 20 + 50 + 70);
    }

    #[test]
    fn test_table_set_capacity() {
        assert_eq!(table_set_capacity(0, &capacity()), 0);
        assert_eq!(table_set_capacity(6, &capacity()), 60);
    }

    #[test]
    fn test_remaining_capacity_never_negative() {
        assert_eq!(remaining_capacity(100, 120), 0);
        assert_eq!(remaining_capacity(100, 60), 40);
        assert_eq!(remaining_capacity(0, 50), 0);
    }

    #[test]
    fn test_recommended_table_sets_rounds_up() {
        assert_eq!(recommended_table_sets(25, &capacity()), 3);
        assert_eq!(recommended_table_sets(10, &capacity()), 1);
        assert_eq!(recommended_table_sets(11, &capacity()), 2);
        assert_eq!(recommended_table_sets(0, &capacity()), 0);
    }

    #[test]
    fn test_capacity_summary() {
        let selection = ItemSelection {
            tent_10x10: TentSelection { quantity: 2, color: TentColor::White },
            table_sets: 3,
            ..ItemSelection::default()
        };
        let summary = capacity_summary(55, &selection, &capacity());
        assert_eq!(summary.tent_capacity, 40);
        assert_eq!(summary.table_set_capacity, 30);
        assert_eq!(summary.remaining_tent_capacity, 15);
        assert_eq!(summary.remaining_table_set_capacity, 25);
        assert_eq!(summary.recommended_table_sets, 6);
    }

    // ==================== cost_per_guest tests ====================

    #[test]
    fn test_cost_per_guest() {
        assert_eq!(cost_per_guest(dec!(1000), 100), dec!(10));
        assert_eq!(cost_per_guest(dec!(1000), 0), Decimal::ZERO);
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }
}
