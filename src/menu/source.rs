//! Menu sources.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::{CategoryFilter, MenuItem, builtin_menu};

/// Errors that can occur while fetching the menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The menu endpoint returned a non-2xx response.
    #[error("unexpected response from menu endpoint: {0}")]
    UnexpectedResponse(String),

    /// The catalog file could not be read.
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid YAML for a menu.
    #[error("failed to parse menu file: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Something that can list menu items.
#[automock]
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetch the menu, restricted to the given category filter.
    async fn fetch(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, MenuError>;
}

/// Menu catalog stored as a YAML file.
///
/// ```yaml
/// items:
///   - id: 1
///     name: Classic Milk Tea
///     price: 4.95
///     category: milk-tea
/// ```
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    items: Vec<MenuItem>,
}

impl FileMenuSource {
    /// Read the catalog from the given path on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MenuSource for FileMenuSource {
    async fn fetch(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, MenuError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let file: MenuFile = serde_norway::from_str(&contents)?;

        Ok(file
            .items
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect())
    }
}

/// Load the menu from a source, falling back to the built-in catalog on failure.
pub async fn load_menu(source: &dyn MenuSource, filter: CategoryFilter) -> Vec<MenuItem> {
    match source.fetch(filter).await {
        Ok(items) => {
            debug!(count = items.len(), %filter, "loaded menu");

            items
        }
        Err(error) => {
            warn!(%error, %filter, "menu source failed, using built-in catalog");

            builtin_menu()
                .into_iter()
                .filter(|item| filter.matches(item))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use testresult::TestResult;

    use crate::menu::{Category, MenuItemId};

    use super::*;

    const CATALOG: &str = "
items:
  - id: 10
    name: Mango Slush
    price: 6.25
    category: fruit-tea
    customizations: [Ice Level, Mango Jelly]
  - id: 11
    name: Hojicha Latte
    description: Roasted green tea latte
    price: 5.5
    category: matcha
";

    #[tokio::test]
    async fn file_source_reads_yaml_catalog() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.yml");

        fs::write(&path, CATALOG)?;

        let items = FileMenuSource::new(&path).fetch(CategoryFilter::All).await?;

        assert_eq!(items.len(), 2);
        assert_eq!(items.first().map(|item| item.id), Some(MenuItemId(10)));
        assert_eq!(
            items.get(1).map(|item| item.price),
            Some(rust_decimal::Decimal::new(55, 1))
        );

        Ok(())
    }

    #[tokio::test]
    async fn file_source_applies_filter() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.yml");

        fs::write(&path, CATALOG)?;

        let items = FileMenuSource::new(&path)
            .fetch(CategoryFilter::Only(Category::Matcha))
            .await?;

        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, vec!["Hojicha Latte"]);

        Ok(())
    }

    #[tokio::test]
    async fn file_source_missing_file_errors() -> TestResult {
        let dir = tempfile::tempdir()?;
        let source = FileMenuSource::new(dir.path().join("missing.yml"));

        let result = source.fetch(CategoryFilter::All).await;

        assert!(matches!(result, Err(MenuError::Io(_))), "got {result:?}");

        Ok(())
    }

    #[tokio::test]
    async fn load_menu_returns_source_items() {
        let mut source = MockMenuSource::new();

        source
            .expect_fetch()
            .returning(|_| Ok(builtin_menu().into_iter().take(1).collect()));

        let items = load_menu(&source, CategoryFilter::All).await;

        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn load_menu_falls_back_to_filtered_builtin() {
        let mut source = MockMenuSource::new();

        source
            .expect_fetch()
            .times(1)
            .returning(|_| Err(MenuError::Io(io::Error::other("offline"))));

        let all = load_menu(&source, CategoryFilter::All).await;

        assert_eq!(all, builtin_menu());

        let mut source = MockMenuSource::new();

        source
            .expect_fetch()
            .returning(|_| Err(MenuError::UnexpectedResponse("502".to_string())));

        let milk_teas = load_menu(&source, CategoryFilter::Only(Category::MilkTea)).await;

        assert_eq!(milk_teas.len(), 2);
        assert!(
            milk_teas
                .iter()
                .all(|item| item.category == Category::MilkTea)
        );
    }
}
