//! Cart store.
//!
//! Owns the in-memory [`Cart`] and keeps it in step with a durable slot: every
//! mutation is written through before it returns, and a failed write rolls the
//! mutation back.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartError, CartLine, LineId},
    menu::MenuItem,
    pricing,
    selection::{Quantity, Selection},
    storage::{FileSlot, SlotStorage},
};

/// Cart aggregate bound to its storage slot.
#[derive(Debug)]
pub struct CartStore<S: SlotStorage = FileSlot> {
    cart: Cart,
    storage: S,
}

impl<S: SlotStorage> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// Never fails: an unreadable slot, undecodable contents or lines with an
    /// unorderable quantity are all treated as "no prior cart".
    pub fn restore(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(payload)) => decode(&payload),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "cart slot unreadable, starting with an empty cart");

                Cart::new()
            }
        };

        debug!(lines = cart.len(), items = cart.item_count(), "restored cart");

        Self { cart, storage }
    }

    /// Price a selection and append it to the cart as a new line.
    ///
    /// Identical selections are never merged; each call adds its own line.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the quantity is outside `1..=10`.
    /// - [`CartError::SelectionMismatch`]: the selection references another item.
    /// - [`CartError::Storage`] / [`CartError::Encode`]: the write-through failed;
    ///   the cart is left unchanged.
    pub fn add_line(
        &mut self,
        item: &MenuItem,
        selection: Selection,
    ) -> Result<CartLine, CartError> {
        let quantity = Quantity::new(selection.quantity)?;

        if selection.menu_item_id != item.id {
            return Err(CartError::SelectionMismatch {
                expected: item.id,
                found: selection.menu_item_id,
            });
        }

        let priced = pricing::price(item.price, &selection.toppings, quantity.get());

        let line = CartLine::new(
            self.fresh_line_id(),
            item.id,
            item.name.clone(),
            selection.sugar,
            selection.ice,
            selection.toppings,
            quantity,
            priced.unit_price,
            priced.line_total,
        );

        self.cart.push(line.clone());

        if let Err(error) = self.persist() {
            self.cart.pop();

            return Err(error);
        }

        debug!(
            line = %line.id(),
            item = %line.menu_item_id(),
            quantity = line.quantity(),
            total = %line.total(),
            "added cart line"
        );

        Ok(line)
    }

    /// Remove every line and persist the empty cart. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the empty cart cannot be written; the lines are
    /// kept in that case.
    pub fn clear(&mut self) -> Result<(), CartError> {
        let previous = std::mem::take(&mut self.cart);

        if let Err(error) = self.persist() {
            self.cart = previous;

            return Err(error);
        }

        debug!(removed = previous.len(), "cleared cart");

        Ok(())
    }

    /// Write the whole cart to the slot.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the cart cannot be encoded or stored.
    pub fn persist(&self) -> Result<(), CartError> {
        let payload = serde_json::to_string(&self.cart)?;

        self.storage.store(&payload)?;

        Ok(())
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Sum of line totals.
    pub fn grand_total(&self) -> Decimal {
        self.cart.grand_total()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The storage slot backing this cart.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn fresh_line_id(&self) -> LineId {
        let mut id = LineId::now_v7();

        while self.cart.contains(id) {
            id = LineId::now_v7();
        }

        id
    }
}

fn decode(payload: &str) -> Cart {
    match serde_json::from_str::<Cart>(payload) {
        Ok(cart) if cart.is_well_formed() => cart,
        Ok(_) => {
            warn!("persisted cart has unorderable quantities, discarding it");

            Cart::new()
        }
        Err(error) => {
            warn!(%error, "persisted cart is malformed, discarding it");

            Cart::new()
        }
    }
}
