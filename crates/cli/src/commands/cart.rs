use std::io;

use teahouse::prelude::*;

use super::{CommandError, Context};

pub(crate) fn run(ctx: &Context) -> Result<(), CommandError> {
    write_cart(io::stdout().lock(), ctx.store.cart())?;

    Ok(())
}
