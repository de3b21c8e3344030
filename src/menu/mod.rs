//! Menu

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod catalog;
pub mod source;

pub use catalog::builtin_menu;
pub use source::{FileMenuSource, MenuError, MenuSource, MockMenuSource, load_menu};

/// Menu item identifier, as assigned by the menu source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl Display for MenuItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for MenuItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(MenuItemId)
    }
}

/// Error returned when a menu or selection value cannot be parsed from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Drink category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Milk teas.
    MilkTea,

    /// Fruit teas.
    FruitTea,

    /// Specialty drinks.
    Specialty,

    /// Matcha drinks.
    Matcha,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 4] = [
        Category::MilkTea,
        Category::FruitTea,
        Category::Specialty,
        Category::Matcha,
    ];

    /// Wire name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::MilkTea => "milk-tea",
            Category::FruitTea => "fruit-tea",
            Category::Specialty => "specialty",
            Category::Matcha => "matcha",
        }
    }

    /// Human readable label, e.g. `milk tea`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseError::new("category", s))
    }
}

/// Category filter used when requesting the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every item on the menu.
    #[default]
    All,

    /// Only items in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Wire name of the filter (`all` or a category name).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether an item passes this filter.
    #[must_use]
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }

        s.parse()
            .map(CategoryFilter::Only)
            .map_err(|_err| ParseError::new("category filter", s))
    }
}

/// An item on the menu. Read-only input to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item identifier
    pub id: MenuItemId,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Base price, before any topping surcharges
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category tag
    pub category: Category,

    /// Available add-on labels
    #[serde(default)]
    pub customizations: Vec<String>,

    /// Whether the item is flagged as popular
    #[serde(default)]
    pub popular: bool,

    /// Image file name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Find an item by id in a list of menu items.
pub fn find_item(items: &[MenuItem], id: MenuItemId) -> Option<&MenuItem> {
    items.iter().find(|item| item.id == id)
}
