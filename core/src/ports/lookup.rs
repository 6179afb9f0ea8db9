// cartstore/src/ports/lookup.rs

//! Remote lookups the store performs before mutating the cart.
//!
//! Implementations own transport concerns (base URL, timeouts, headers). Any
//! error they return, from a network failure to a malformed body, is reported
//! by the store as `CartError::LookupFailure`.

use crate::core::cart::{Product, ProductId, StockInfo};
use async_trait::async_trait;

#[async_trait]
pub trait StockService: Send + Sync {
  /// Current available quantity for `product_id`.
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<StockInfo>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<Product>;
}
