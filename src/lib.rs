//! Teahouse
//!
//! Cart and pricing core for a bubble tea storefront: price customized drinks,
//! keep the cart in a durable local slot, and hand it to the shop as an order.

pub mod api;
pub mod cart;
pub mod menu;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod selection;
pub mod storage;
pub mod uuids;
