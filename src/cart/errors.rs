//! Cart errors.

use thiserror::Error;

use crate::{menu::MenuItemId, storage::StorageError};

/// Errors returned by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity is outside `1..=10`.
    #[error("quantity {0} is outside the orderable range 1..=10")]
    InvalidQuantity(u32),

    /// The selection was made for a different menu item.
    #[error("selection is for menu item {found}, but item {expected} was supplied")]
    SelectionMismatch {
        /// Id of the supplied menu item
        expected: MenuItemId,
        /// Id referenced by the selection
        found: MenuItemId,
    },

    /// The cart could not be encoded for storage.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    /// The cart slot could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
