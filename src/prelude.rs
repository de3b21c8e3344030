//! Teahouse prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    api::{ShopApiClient, ShopApiConfig},
    cart::{Cart, CartError, CartLine, CartStore, LineId},
    menu::{
        Category, CategoryFilter, FileMenuSource, MenuError, MenuItem, MenuItemId, MenuSource,
        builtin_menu, find_item, load_menu,
    },
    money::{format_price, round2},
    orders::{
        CheckoutOutcome, OrderAcknowledgement, OrderError, OrderGateway, OrderRequest, checkout,
    },
    pricing::{LinePrice, price, surcharge},
    receipt::{ReceiptError, write_cart, write_menu},
    selection::{IceLevel, Quantity, Selection, SugarLevel, Toppings},
    storage::{CART_SLOT_KEY, FileSlot, MemorySlot, SlotStorage, StorageError},
};
