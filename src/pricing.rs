//! Line pricing.
//!
//! Toppings are classified purely by name: anything whose label contains
//! `Tapioca` or `Jelly` (case-sensitive) is a cheap topping, everything else is
//! a premium topping.

use rust_decimal::Decimal;

/// Surcharge for toppings whose label mentions `Tapioca` or `Jelly`.
pub const CHEAP_TOPPING_SURCHARGE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Surcharge for every other topping.
pub const PREMIUM_TOPPING_SURCHARGE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Unit price and line total for one priced selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrice {
    /// Base price plus topping surcharges
    pub unit_price: Decimal,

    /// Unit price times quantity
    pub line_total: Decimal,
}

/// The surcharge added to the unit price for one topping.
#[must_use]
pub fn surcharge(label: &str) -> Decimal {
    if label.contains("Tapioca") || label.contains("Jelly") {
        CHEAP_TOPPING_SURCHARGE
    } else {
        PREMIUM_TOPPING_SURCHARGE
    }
}

/// Price a selection.
///
/// `quantity` is expected to be within `1..=10`; it is not clamped here.
/// No rounding is applied.
pub fn price<S: AsRef<str>>(base_price: Decimal, toppings: &[S], quantity: u32) -> LinePrice {
    let unit_price = toppings
        .iter()
        .map(|label| surcharge(label.as_ref()))
        .fold(base_price, |acc, surcharge| acc + surcharge);

    LinePrice {
        unit_price,
        line_total: unit_price * Decimal::from(quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(value: i64) -> Decimal {
        Decimal::new(value, 2)
    }

    #[test]
    fn tapioca_and_jelly_toppings_are_cheap() {
        assert_eq!(surcharge("Tapioca Pearls"), cents(50));
        assert_eq!(surcharge("Lychee Jelly"), cents(50));
        assert_eq!(surcharge("Brown Sugar Tapioca Jelly"), cents(50));
    }

    #[test]
    fn other_toppings_are_premium() {
        assert_eq!(surcharge("Pudding"), cents(75));
        assert_eq!(surcharge("Cheese Foam"), cents(75));
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(surcharge("tapioca pearls"), cents(75));
        assert_eq!(surcharge("JELLY"), cents(75));
    }

    #[test]
    fn no_toppings_is_base_price() {
        let priced = price::<&str>(cents(495), &[], 1);

        assert_eq!(priced.unit_price, cents(495));
        assert_eq!(priced.line_total, cents(495));
    }

    #[test]
    fn single_tapioca_topping_times_two() {
        let priced = price(cents(495), &["Tapioca Pearls"], 2);

        assert_eq!(priced.unit_price, cents(545));
        assert_eq!(priced.line_total, cents(1090));
    }

    #[test]
    fn mixed_toppings_sum_surcharges() {
        let priced = price(cents(525), &["Pudding", "Mango Jelly", "Aloe Vera"], 3);

        // 5.25 + 0.75 + 0.50 + 0.75
        assert_eq!(priced.unit_price, cents(725));
        assert_eq!(priced.line_total, cents(2175));
    }

    #[test]
    fn line_total_is_exact_before_rounding() {
        let priced = price(Decimal::new(4_995, 3), &["Pudding"], 7);

        assert_eq!(priced.unit_price, Decimal::new(5_745, 3));
        assert_eq!(priced.line_total, Decimal::new(40_215, 3));
    }
}
