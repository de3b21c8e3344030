//! Orders

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};

pub mod checkout;

pub use checkout::{CheckoutOutcome, checkout};

/// Body of an order submission: every cart line plus the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// All lines in the cart, in display order
    pub items: Vec<CartLine>,

    /// Sum of line totals
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl OrderRequest {
    /// Build a request from the whole cart.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            total: cart.grand_total(),
        }
    }
}

/// Response from the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderAcknowledgement {
    /// Whether the order was accepted
    #[serde(default)]
    pub success: bool,

    /// Server-assigned order identifier
    #[serde(default)]
    pub order_id: Option<String>,

    /// Message to show to the customer
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderAcknowledgement {
    /// The order id, when the acknowledgement reports success and carries one.
    #[must_use]
    pub fn accepted_order_id(&self) -> Option<&str> {
        if self.success {
            self.order_id.as_deref()
        } else {
            None
        }
    }
}

/// Errors that can occur when submitting an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The order endpoint returned a non-2xx response.
    #[error("unexpected response from order endpoint: {0}")]
    UnexpectedResponse(String),
}

/// Something that accepts orders.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a whole cart as one order.
    async fn submit(&self, order: &OrderRequest) -> Result<OrderAcknowledgement, OrderError>;
}
