//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    menu::MenuItemId,
    selection::{IceLevel, Quantity, SugarLevel, Toppings},
    uuids::TypedUuid,
};

pub mod errors;
pub mod store;

pub use errors::CartError;
pub use store::CartStore;

/// Cart line identifier.
pub type LineId = TypedUuid<CartLine>;

/// One priced entry in the cart, created by a single add-to-cart action.
///
/// Lines are immutable once created. The menu item name is captured when the
/// line is added so the cart survives menu changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    id: LineId,
    menu_item_id: MenuItemId,
    name: String,
    sugar: SugarLevel,
    ice: IceLevel,
    toppings: Toppings,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    unit_price: Decimal,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    total: Decimal,
}

impl CartLine {
    #[expect(
        clippy::too_many_arguments,
        reason = "a line is a flat snapshot of every selection field."
    )]
    pub(crate) fn new(
        id: LineId,
        menu_item_id: MenuItemId,
        name: String,
        sugar: SugarLevel,
        ice: IceLevel,
        toppings: Toppings,
        quantity: Quantity,
        unit_price: Decimal,
        total: Decimal,
    ) -> Self {
        Self {
            id,
            menu_item_id,
            name,
            sugar,
            ice,
            toppings,
            quantity: quantity.get(),
            unit_price,
            total,
        }
    }

    /// Line id
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Source menu item
    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    /// Menu item name at the time the line was added
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sugar level
    pub fn sugar(&self) -> SugarLevel {
        self.sugar
    }

    /// Ice level
    pub fn ice(&self) -> IceLevel {
        self.ice
    }

    /// Toppings, in selection order
    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    /// Number of drinks
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Base price plus topping surcharges
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Unit price times quantity
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Customization summary, e.g. `50%, Regular, Tapioca Pearls`.
    #[must_use]
    pub fn details(&self) -> String {
        let mut parts = vec![self.sugar.as_str(), self.ice.as_str()];

        parts.extend(self.toppings.iter().map(String::as_str));

        parts.join(", ")
    }
}

/// The ordered set of lines. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Sum of line totals, unrounded.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of lines (not drinks).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a line with this id is already in the cart.
    #[must_use]
    pub fn contains(&self, id: LineId) -> bool {
        self.lines.iter().any(|line| line.id == id)
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub(crate) fn pop(&mut self) -> Option<CartLine> {
        self.lines.pop()
    }

    /// Whether every line carries an orderable quantity.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.lines
            .iter()
            .all(|line| Quantity::new(line.quantity).is_ok())
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
