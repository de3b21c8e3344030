//! Storefront commands

use clap::{Args, Subcommand};
use teahouse::prelude::*;
use thiserror::Error;

use crate::config::ShopConfig;

mod add;
mod cart;
mod checkout;
mod menu;
mod quote;

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error("no menu item with id {0}")]
    UnknownItem(MenuItemId),
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the menu
    Menu(menu::MenuArgs),

    /// Price a customized drink without adding it
    Quote(ItemArgs),

    /// Customize a drink and add it to the cart
    Add(ItemArgs),

    /// Show the cart
    Cart,

    /// Place an order for everything in the cart
    Checkout,
}

/// Customization shared by `quote` and `add`.
#[derive(Debug, Args)]
pub(crate) struct ItemArgs {
    /// Menu item id
    #[arg(long)]
    item: MenuItemId,

    /// Sugar level (0%, 25%, 50%, 75%, 100%)
    #[arg(long, default_value = "100%")]
    sugar: SugarLevel,

    /// Ice level (No Ice, Less Ice, Regular, Extra Ice)
    #[arg(long, default_value = "Regular")]
    ice: IceLevel,

    /// Topping label; repeat for more, in the order they should be added
    #[arg(long = "topping")]
    toppings: Vec<String>,

    /// Number of drinks (1-10)
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,
}

impl ItemArgs {
    fn selection(&self) -> Selection {
        Selection {
            menu_item_id: self.item,
            sugar: self.sugar,
            ice: self.ice,
            toppings: self.toppings.iter().cloned().collect(),
            quantity: self.quantity,
        }
    }
}

/// Everything a command needs: the restored cart and the shop backend.
pub(crate) struct Context {
    store: CartStore,
    api: ShopApiClient,
    menu: Box<dyn MenuSource>,
}

impl Context {
    pub(crate) fn new(config: &ShopConfig) -> Self {
        let api = ShopApiClient::new(ShopApiConfig {
            base_url: config.api_url.clone(),
        });

        let menu: Box<dyn MenuSource> = match &config.menu_file {
            Some(path) => Box::new(FileMenuSource::new(path)),
            None => Box::new(api.clone()),
        };

        Self {
            store: CartStore::restore(FileSlot::cart(&config.data_dir)),
            api,
            menu,
        }
    }

    async fn menu_item(&self, id: MenuItemId) -> Result<MenuItem, CommandError> {
        let items = load_menu(self.menu.as_ref(), CategoryFilter::All).await;

        find_item(&items, id)
            .cloned()
            .ok_or(CommandError::UnknownItem(id))
    }
}

impl Command {
    pub(crate) async fn run(self, mut ctx: Context) -> Result<(), CommandError> {
        match self {
            Command::Menu(args) => menu::run(&ctx, &args).await,
            Command::Quote(args) => quote::run(&ctx, &args).await,
            Command::Add(args) => add::run(&mut ctx, &args).await,
            Command::Cart => cart::run(&ctx),
            Command::Checkout => checkout::run(&mut ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use crate::config::Cli;

    use super::*;

    fn item_args(args: &[&str]) -> Result<ItemArgs, clap::Error> {
        let cli = Cli::try_parse_from(["teahouse", "add"].iter().chain(args))?;

        match cli.command {
            Command::Add(args) => Ok(args),
            other => unreachable!("expected add command, got {other:?}"),
        }
    }

    #[test]
    fn add_args_build_selection_in_topping_order() -> TestResult {
        let args = item_args(&[
            "--item",
            "1",
            "--sugar",
            "50%",
            "--ice",
            "Less Ice",
            "--topping",
            "Pudding",
            "--topping",
            "Tapioca Pearls",
            "-q",
            "2",
        ])?;

        let selection = args.selection();

        assert_eq!(selection.menu_item_id, MenuItemId(1));
        assert_eq!(selection.sugar, SugarLevel::Half);
        assert_eq!(selection.ice, IceLevel::Less);
        assert_eq!(
            selection.toppings.as_slice(),
            ["Pudding".to_string(), "Tapioca Pearls".to_string()]
        );
        assert_eq!(selection.quantity, 2);

        Ok(())
    }

    #[test]
    fn add_args_default_to_plain_single_drink() -> TestResult {
        let selection = item_args(&["--item", "4"])?.selection();

        assert_eq!(selection, Selection::new(MenuItemId(4)));

        Ok(())
    }

    #[test]
    fn unknown_sugar_level_is_rejected() {
        assert!(item_args(&["--item", "1", "--sugar", "60%"]).is_err());
    }

    #[tokio::test]
    async fn add_then_show_cart_uses_file_slot() -> TestResult {
        let dir = tempfile::tempdir()?;
        let menu_file = dir.path().join("menu.yml");

        std::fs::write(
            &menu_file,
            "items:\n  - id: 1\n    name: House Milk Tea\n    price: 4.0\n    category: milk-tea\n",
        )?;

        let config = ShopConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            data_dir: dir.path().join("data"),
            menu_file: Some(menu_file),
        };

        let mut ctx = Context::new(&config);
        let args = item_args(&["--item", "1", "--topping", "Grass Jelly", "-q", "3"])?;

        add::run(&mut ctx, &args).await?;

        let reloaded = Context::new(&config);

        assert_eq!(reloaded.store.item_count(), 3);
        assert_eq!(format_price(reloaded.store.grand_total()), "$13.50");

        Ok(())
    }
}
