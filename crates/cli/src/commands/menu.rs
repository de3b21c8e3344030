use std::io;

use clap::Args;
use teahouse::prelude::*;

use super::{CommandError, Context};

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Category to show (all, milk-tea, fruit-tea, specialty, matcha)
    #[arg(short, long, default_value = "all")]
    category: CategoryFilter,
}

pub(crate) async fn run(ctx: &Context, args: &MenuArgs) -> Result<(), CommandError> {
    let items = load_menu(ctx.menu.as_ref(), args.category).await;

    write_menu(io::stdout().lock(), &items)?;

    Ok(())
}
