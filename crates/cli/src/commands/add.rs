use teahouse::prelude::*;

use super::{CommandError, Context, ItemArgs};

pub(crate) async fn run(ctx: &mut Context, args: &ItemArgs) -> Result<(), CommandError> {
    let item = ctx.menu_item(args.item).await?;
    let line = ctx.store.add_line(&item, args.selection())?;

    println!("{} added to cart!", line.name());
    println!(
        "Cart: {} item(s), {}",
        ctx.store.item_count(),
        format_price(ctx.store.grand_total())
    );

    Ok(())
}
