use teahouse::prelude::*;

use super::{CommandError, Context, ItemArgs};

pub(crate) async fn run(ctx: &Context, args: &ItemArgs) -> Result<(), CommandError> {
    let item = ctx.menu_item(args.item).await?;
    let quantity = Quantity::new(args.quantity)?;
    let priced = price(item.price, &args.toppings, quantity.get());

    println!(
        "{} × {quantity}: {} ({} each)",
        item.name,
        format_price(priced.line_total),
        format_price(priced.unit_price)
    );

    Ok(())
}
