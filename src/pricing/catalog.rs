//! Static rental price catalog and capacity tables.
//!
//! Every price is a fixed RM amount; SST (8%) applies only to the physical
//! rental items, never to permit or overtime fees. The catalog is constant
//! across all calculations and is passed into the calculators by value
//! reference, so the engine itself carries no configuration state.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sales and Service Tax rate applied to SST-liable catalog items.
pub const SST_RATE: Decimal = dec!(0.08);

/// Unit prices for every rentable item and fee, in RM.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    pub tent_10x10: Decimal,
    pub tent_20x20: Decimal,
    pub tent_20x30: Decimal,
    pub table_set: Decimal,
    pub long_table: Decimal,
    pub long_table_with_skirting: Decimal,
    pub extra_chair: Decimal,
    pub cooler_fan: Decimal,
    /// MBI permit, charged per day of the rental duration.
    pub mbi_permit_per_day: Decimal,
    /// MBI parking, charged per reserved lot.
    pub mbi_parking_per_lot: Decimal,
    /// Flat runner fee for any public-area event.
    pub mbi_runner_fee: Decimal,
    /// Overtime surcharge per Sunday setup/dismantle date.
    pub sunday_ot_per_day: Decimal,
    /// Surcharge per rental day beyond the included three days.
    pub extension_per_day: Decimal,
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self {
            tent_10x10: dec!(220),
            tent_20x20: dec!(250),
            tent_20x30: dec!(300),
            table_set: dec!(100),
            long_table: dec!(15),
            long_table_with_skirting: dec!(30),
            extra_chair: dec!(5),
            cooler_fan: dec!(200),
            mbi_permit_per_day: dec!(20),
            mbi_parking_per_lot: dec!(10),
            mbi_runner_fee: dec!(100),
            sunday_ot_per_day: dec!(300),
            extension_per_day: dec!(300),
        }
    }
}

/// How many guests each tent tier or table set accommodates.
///
/// Used only for advisory recommendations, never for pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityTable {
    pub tent_10x10: u32,
    pub tent_20x20: u32,
    pub tent_20x30: u32,
    pub table_set: u32,
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self {
            tent_10x10: 20,
            tent_20x20: 50,
            tent_20x30: 70,
            table_set: 10,
        }
    }
}

/// Number of rental days included before the extension surcharge applies.
pub const INCLUDED_RENTAL_DAYS: u32 = 3;
