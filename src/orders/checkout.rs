//! Checkout handshake.
//!
//! An empty cart never reaches the gateway. Otherwise the whole cart is
//! submitted once; the cart is cleared afterwards whether or not the gateway
//! acknowledged the order, and a failed submission is reported to the customer
//! as a simulated success.

use std::fmt::{self, Display, Formatter};

use tracing::{info, warn};

use crate::{
    cart::{CartError, CartStore},
    money::format_price,
    orders::{OrderGateway, OrderRequest},
    storage::SlotStorage,
};

/// How a checkout attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to order; no request was made and nothing was persisted.
    EmptyCart,

    /// The gateway accepted the order.
    Placed {
        /// Server-assigned order id
        order_id: String,

        /// Optional message from the shop
        message: Option<String>,
    },

    /// The gateway failed or answered with something other than a success;
    /// the cart was cleared anyway.
    Simulated,
}

impl CheckoutOutcome {
    /// Notification text for the customer.
    #[must_use]
    pub fn notification(&self) -> String {
        match self {
            CheckoutOutcome::EmptyCart => "Your cart is empty!".to_string(),
            CheckoutOutcome::Placed { order_id, .. } => {
                format!("Order placed! Order ID: {order_id}")
            }
            CheckoutOutcome::Simulated => "Order placed successfully (simulated)".to_string(),
        }
    }
}

impl Display for CheckoutOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notification())
    }
}

/// Submit the cart as one order and empty it.
///
/// # Errors
///
/// Returns a [`CartError`] only if the emptied cart cannot be persisted.
/// Gateway failures are not errors.
pub async fn checkout<S, G>(
    store: &mut CartStore<S>,
    gateway: &G,
) -> Result<CheckoutOutcome, CartError>
where
    S: SlotStorage,
    G: OrderGateway + ?Sized,
{
    if store.is_empty() {
        return Ok(CheckoutOutcome::EmptyCart);
    }

    let request = OrderRequest::from_cart(store.cart());
    let total = format_price(request.total);

    let outcome = match gateway.submit(&request).await {
        Ok(ack) => match ack.accepted_order_id() {
            Some(order_id) => {
                info!(order_id, lines = request.items.len(), %total, "order placed");

                CheckoutOutcome::Placed {
                    order_id: order_id.to_string(),
                    message: ack.message.clone(),
                }
            }
            None => {
                warn!(?ack, %total, "order endpoint did not confirm the order");

                CheckoutOutcome::Simulated
            }
        },
        Err(error) => {
            warn!(%error, %total, "order submission failed");

            CheckoutOutcome::Simulated
        }
    };

    store.clear()?;

    Ok(outcome)
}
