//! HTTP client for the shop backend.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::{
    menu::{CategoryFilter, MenuError, MenuItem, MenuSource},
    orders::{OrderAcknowledgement, OrderError, OrderGateway, OrderRequest},
};

/// Configuration for connecting to the shop backend.
#[derive(Debug, Clone)]
pub struct ShopApiConfig {
    /// Backend base address, e.g. `"http://localhost:5000"`.
    pub base_url: String,
}

/// HTTP client for the menu and order endpoints.
#[derive(Debug, Clone)]
pub struct ShopApiClient {
    config: ShopApiConfig,
    http: Client,
}

impl ShopApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ShopApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

async fn failure_text(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    format!("status {status}: {text}")
}

#[async_trait]
impl MenuSource for ShopApiClient {
    async fn fetch(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, MenuError> {
        let url = self.url("/api/menu");

        debug!(%url, %filter, "fetching menu");

        let response = self
            .http
            .get(&url)
            .query(&[("category", filter.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MenuError::UnexpectedResponse(failure_text(response).await));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl OrderGateway for ShopApiClient {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderAcknowledgement, OrderError> {
        let url = self.url("/api/order");

        debug!(%url, lines = order.items.len(), "submitting order");

        let response = self.http.post(&url).json(order).send().await?;

        if !response.status().is_success() {
            return Err(OrderError::UnexpectedResponse(failure_text(response).await));
        }

        Ok(response.json().await?)
    }
}
