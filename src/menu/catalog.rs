//! Built-in fallback catalog, used when no menu source is reachable.

use rust_decimal::Decimal;

use super::{Category, MenuItem, MenuItemId};

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(ToString::to_string).collect()
}

/// The fixed catalog shipped with the storefront.
#[must_use]
pub fn builtin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: MenuItemId(1),
            name: "Classic Milk Tea".to_string(),
            description: "Our signature black tea with creamy milk and chewy tapioca pearls"
                .to_string(),
            price: Decimal::new(4_95, 2),
            category: Category::MilkTea,
            customizations: labels(&["Sugar Level", "Ice Level", "Pearls", "Pudding"]),
            popular: true,
            image: Some("classic-milk-tea.jpg".to_string()),
        },
        MenuItem {
            id: MenuItemId(2),
            name: "Taro Milk Tea".to_string(),
            description: "Sweet taro flavor blended with milk and tea, topped with taro chunks"
                .to_string(),
            price: Decimal::new(5_45, 2),
            category: Category::MilkTea,
            customizations: labels(&["Sugar Level", "Ice Level", "Pearls", "Taro Chunks"]),
            popular: true,
            image: Some("taro-milk-tea.jpg".to_string()),
        },
        MenuItem {
            id: MenuItemId(3),
            name: "Matcha Latte".to_string(),
            description: "Premium Japanese matcha green tea with steamed milk".to_string(),
            price: Decimal::new(5_75, 2),
            category: Category::Specialty,
            customizations: labels(&["Sugar Level", "Milk Type", "Whipped Cream"]),
            popular: false,
            image: Some("matcha-latte.jpg".to_string()),
        },
        MenuItem {
            id: MenuItemId(4),
            name: "Strawberry Fruit Tea".to_string(),
            description: "Refreshing green tea with fresh strawberry puree and fruit chunks"
                .to_string(),
            price: Decimal::new(5_25, 2),
            category: Category::FruitTea,
            customizations: labels(&["Sugar Level", "Ice Level", "Fruit Toppings"]),
            popular: true,
            image: Some("strawberry-tea.jpg".to_string()),
        },
    ]
}
