//! Money presentation helpers.
//!
//! Amounts are carried as full-precision [`Decimal`]s everywhere in the crate
//! and only rounded to cents when they are shown to someone.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// The shop prices everything in US dollars.
#[must_use]
pub fn currency() -> &'static iso::Currency {
    iso::USD
}

/// Round an amount to two decimal places, halves away from zero.
///
/// The result always carries a scale of two, so `10.9` comes back as `10.90`.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    rounded.rescale(2);
    rounded
}

/// Convert an amount into [`Money`] in the shop currency, rounded to cents.
#[must_use]
pub fn to_money(amount: Decimal) -> Money<'static, iso::Currency> {
    Money::from_decimal(round2(amount), currency())
}

/// Format an amount for display, e.g. `$10.90`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    to_money(amount).to_string()
}
