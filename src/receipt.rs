//! Cart receipt rendering.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, menu::MenuItem, money::format_price};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Write the cart as a table: one row per line, then the item count and total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the output cannot be written.
pub fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;
        writeln!(out, "Total: {}", format_price(cart.grand_total()))?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Details", "Price"]);

    for line in cart {
        builder.push_record([
            format!("{} × {}", line.name(), line.quantity()),
            line.details(),
            format_price(line.total()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::last(), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")?;
    writeln!(out, "Items: {}", cart.item_count())?;
    writeln!(out, "Total: {}", format_price(cart.grand_total()))?;

    Ok(())
}

/// Write a menu listing, one row per item.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the output cannot be written.
pub fn write_menu(mut out: impl io::Write, items: &[MenuItem]) -> Result<(), ReceiptError> {
    if items.is_empty() {
        writeln!(out, "No items found in this category")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Category", "Price", "Add-ons"]);

    for item in items {
        let name = if item.popular {
            format!("{} (Popular)", item.name)
        } else {
            item.name.clone()
        };

        builder.push_record([
            item.id.to_string(),
            name,
            item.category.label(),
            format_price(item.price),
            item.customizations.join(", "),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
