// cartstore/examples/basic_cart.rs

use async_trait::async_trait;
use cartstore::{
  CartConfig, CartDependencies, CartError, CartStore, MemoryStore, Product, ProductCatalog, ProductId, StockInfo,
  StockService, TracingNotifier, UpdateProductAmount,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

// 1. A tiny in-process stand-in for the stock and product APIs.
struct Shelf {
  products: HashMap<ProductId, (Product, u32)>,
}

#[async_trait]
impl StockService for Shelf {
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<StockInfo> {
    let (_, amount) = self
      .products
      .get(&product_id)
      .ok_or_else(|| anyhow::anyhow!("unknown product {}", product_id))?;
    Ok(StockInfo { amount: *amount })
  }
}

#[async_trait]
impl ProductCatalog for Shelf {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<Product> {
    let (product, _) = self
      .products
      .get(&product_id)
      .ok_or_else(|| anyhow::anyhow!("unknown product {}", product_id))?;
    Ok(product.clone())
  }
}

#[tokio::main]
async fn main() -> Result<(), CartError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  let shelf = Arc::new(Shelf {
    products: HashMap::from([
      (
        1,
        (
          Product {
            id: 1,
            name: "Runner".to_string(),
            price: 179.9,
            image: String::new(),
          },
          2,
        ),
      ),
      (
        2,
        (
          Product {
            id: 2,
            name: "Trail".to_string(),
            price: 139.9,
            image: String::new(),
          },
          10,
        ),
      ),
    ]),
  });

  // 2. Wire the store. Notifications just go to the log here.
  let store = CartStore::load(
    CartDependencies {
      stock: shelf.clone(),
      catalog: shelf,
      notifier: Arc::new(TracingNotifier),
      storage: Arc::new(MemoryStore::new()),
    },
    CartConfig::default(),
  )?;

  store.subscribe(|change| info!(revision = change.revision, items = change.cart.len(), "Cart changed."));

  // 3. Mutate it.
  store.add_product(1).await?;
  store.add_product(1).await?;
  if let Err(e) = store.add_product(1).await {
    info!("Third add rejected as expected: {}", e);
  }
  store.add_product(2).await?;
  store
    .update_product_amount(UpdateProductAmount { product_id: 2, amount: 4 })
    .await?;
  store.remove_product(1)?;

  // 4. Inspect the result.
  let cart = store.cart();
  for item in &cart {
    info!("{} x{} = {:.2}", item.name, item.amount, item.subtotal());
  }
  info!("Total: {:.2}", cart.total());
  Ok(())
}
