// demos/storefront/src/services/api.rs

use crate::errors::Result as AppResult;
use anyhow::Context;
use async_trait::async_trait;
use cartstore::{Product, ProductCatalog, ProductId, StockInfo, StockService};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// JSON client for the storefront API (`GET stock/{id}`, `GET products/{id}`).
#[derive(Debug, Clone)]
pub struct ApiClient {
  client: Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  pub fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }

  #[instrument(skip(self), fields(url = %self.url(path)))]
  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
    let url = self.url(path);
    let response = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("GET {} failed", url))?
      .error_for_status()
      .with_context(|| format!("GET {} returned an error status", url))?;
    debug!(status = %response.status(), "Response received.");
    response
      .json::<T>()
      .await
      .with_context(|| format!("GET {} returned an unexpected body", url))
  }
}

#[async_trait]
impl StockService for ApiClient {
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<StockInfo> {
    self.get_json(&format!("stock/{}", product_id)).await
  }
}

#[async_trait]
impl ProductCatalog for ApiClient {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<Product> {
    self.get_json(&format!("products/{}", product_id)).await
  }
}
