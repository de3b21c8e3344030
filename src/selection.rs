//! Drink customization choices.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    cart::CartError,
    menu::{MenuItemId, ParseError},
};

/// Topping labels in the order they were chosen.
pub type Toppings = SmallVec<[String; 4]>;

/// Sweetness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SugarLevel {
    /// No sugar
    #[serde(rename = "0%")]
    None,

    /// Quarter sweet
    #[serde(rename = "25%")]
    Quarter,

    /// Half sweet
    #[serde(rename = "50%")]
    Half,

    /// Less sweet
    #[serde(rename = "75%")]
    ThreeQuarters,

    /// Regular sweetness
    #[default]
    #[serde(rename = "100%")]
    Full,
}

impl SugarLevel {
    /// Every sugar level, least sweet first.
    pub const ALL: [SugarLevel; 5] = [
        SugarLevel::None,
        SugarLevel::Quarter,
        SugarLevel::Half,
        SugarLevel::ThreeQuarters,
        SugarLevel::Full,
    ];

    /// Label shown to customers and stored with the line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SugarLevel::None => "0%",
            SugarLevel::Quarter => "25%",
            SugarLevel::Half => "50%",
            SugarLevel::ThreeQuarters => "75%",
            SugarLevel::Full => "100%",
        }
    }
}

impl Display for SugarLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SugarLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SugarLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseError::new("sugar level", s))
    }
}

/// Ice level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IceLevel {
    /// No ice
    #[serde(rename = "No Ice")]
    NoIce,

    /// Less ice
    #[serde(rename = "Less Ice")]
    Less,

    /// Regular ice
    #[default]
    Regular,

    /// Extra ice
    #[serde(rename = "Extra Ice")]
    Extra,
}

impl IceLevel {
    /// Every ice level, least ice first.
    pub const ALL: [IceLevel; 4] = [
        IceLevel::NoIce,
        IceLevel::Less,
        IceLevel::Regular,
        IceLevel::Extra,
    ];

    /// Label shown to customers and stored with the line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IceLevel::NoIce => "No Ice",
            IceLevel::Less => "Less Ice",
            IceLevel::Regular => "Regular",
            IceLevel::Extra => "Extra Ice",
        }
    }
}

impl Display for IceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IceLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IceLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("ice level", s))
    }
}

/// Number of drinks on a line, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest orderable quantity.
    pub const MIN: Quantity = Quantity(1);

    /// Largest orderable quantity.
    pub const MAX: Quantity = Quantity(10);

    /// Validate a raw quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `value` is outside `1..=10`.
    pub fn new(value: u32) -> Result<Self, CartError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CartError::InvalidQuantity(value))
        }
    }

    /// The raw count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// One more, unless already at the maximum.
    #[must_use]
    pub fn increment(self) -> Self {
        if self < Self::MAX { Self(self.0 + 1) } else { self }
    }

    /// One fewer, unless already at the minimum.
    #[must_use]
    pub fn decrement(self) -> Self {
        if self > Self::MIN { Self(self.0 - 1) } else { self }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One customization of a menu item, ready to be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The menu item being customized
    pub menu_item_id: MenuItemId,

    /// Chosen sugar level
    pub sugar: SugarLevel,

    /// Chosen ice level
    pub ice: IceLevel,

    /// Chosen toppings, in selection order
    pub toppings: Toppings,

    /// Requested quantity; validated when the line is added
    pub quantity: u32,
}

impl Selection {
    /// A default selection for an item: full sugar, regular ice, no toppings, one drink.
    #[must_use]
    pub fn new(menu_item_id: MenuItemId) -> Self {
        Self {
            menu_item_id,
            sugar: SugarLevel::default(),
            ice: IceLevel::default(),
            toppings: Toppings::new(),
            quantity: Quantity::MIN.get(),
        }
    }

    /// Set the sugar level.
    #[must_use]
    pub fn sugar(mut self, sugar: SugarLevel) -> Self {
        self.sugar = sugar;
        self
    }

    /// Set the ice level.
    #[must_use]
    pub fn ice(mut self, ice: IceLevel) -> Self {
        self.ice = ice;
        self
    }

    /// Append a topping.
    #[must_use]
    pub fn topping(mut self, label: impl Into<String>) -> Self {
        self.toppings.push(label.into());
        self
    }

    /// Set the quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sugar_levels_parse_from_labels() -> TestResult {
        assert_eq!("50%".parse::<SugarLevel>()?, SugarLevel::Half);
        assert_eq!("0%".parse::<SugarLevel>()?, SugarLevel::None);
        assert!("60%".parse::<SugarLevel>().is_err());

        Ok(())
    }

    #[test]
    fn ice_levels_parse_case_insensitively() -> TestResult {
        assert_eq!("regular".parse::<IceLevel>()?, IceLevel::Regular);
        assert_eq!("Extra Ice".parse::<IceLevel>()?, IceLevel::Extra);
        assert!("Crushed".parse::<IceLevel>().is_err());

        Ok(())
    }

    #[test]
    fn levels_serialize_as_labels() -> TestResult {
        assert_eq!(serde_json::to_string(&SugarLevel::Half)?, "\"50%\"");
        assert_eq!(serde_json::to_string(&IceLevel::Regular)?, "\"Regular\"");
        assert_eq!(serde_json::to_string(&IceLevel::NoIce)?, "\"No Ice\"");

        Ok(())
    }

    #[test]
    fn quantity_accepts_bounds() -> TestResult {
        assert_eq!(Quantity::new(1)?.get(), 1);
        assert_eq!(Quantity::new(10)?.get(), 10);

        Ok(())
    }

    #[test]
    fn quantity_rejects_out_of_range() {
        assert!(matches!(
            Quantity::new(0),
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(matches!(
            Quantity::new(11),
            Err(CartError::InvalidQuantity(11))
        ));
    }

    #[test]
    fn stepper_refuses_to_leave_range() {
        assert_eq!(Quantity::MAX.increment(), Quantity::MAX);
        assert_eq!(Quantity::MIN.decrement(), Quantity::MIN);
        assert_eq!(Quantity::MIN.increment().get(), 2);
        assert_eq!(Quantity::MAX.decrement().get(), 9);
    }

    #[test]
    fn selection_builder_keeps_topping_order() {
        let selection = Selection::new(MenuItemId(1))
            .sugar(SugarLevel::Half)
            .topping("Pudding")
            .topping("Tapioca Pearls")
            .quantity(3);

        assert_eq!(selection.sugar, SugarLevel::Half);
        assert_eq!(selection.ice, IceLevel::Regular);
        assert_eq!(
            selection.toppings.as_slice(),
            ["Pudding".to_string(), "Tapioca Pearls".to_string()]
        );
        assert_eq!(selection.quantity, 3);
    }
}
