use teahouse::prelude::*;

use super::{CommandError, Context};

pub(crate) async fn run(ctx: &mut Context) -> Result<(), CommandError> {
    let outcome = checkout(&mut ctx.store, &ctx.api).await?;

    println!("{outcome}");

    if let CheckoutOutcome::Placed {
        message: Some(message),
        ..
    } = &outcome
    {
        println!("{message}");
    }

    Ok(())
}
