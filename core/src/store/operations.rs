// cartstore/src/store/operations.rs

//! The three cart mutations: add, remove, update amount.
//!
//! Each public method returns a `CartResult` the caller can match on and, on
//! failure, also fires exactly one notification into the `NotificationSink`.

use crate::core::cart::{LineItem, Product, ProductId, StockInfo};
use crate::core::operation::{CartOperation, UpdateProductAmount};
use crate::error::{CartError, CartResult};
use crate::store::definition::CartStore;
use tracing::{info, instrument};

impl CartStore {
  /// Adds one unit of `product_id`.
  ///
  /// Looks up stock and product details first. A product already in the cart
  /// gets its amount incremented; a new one is appended with amount 1. Fails
  /// with `StockExhausted` when the cart already holds every available unit.
  ///
  /// Returns the line item as committed.
  #[instrument(name = "CartStore::add_product", skip(self))]
  pub async fn add_product(&self, product_id: ProductId) -> CartResult<LineItem> {
    let result = self.try_add_product(product_id).await;
    self.settle(CartOperation::AddProduct, result)
  }

  async fn try_add_product(&self, product_id: ProductId) -> CartResult<LineItem> {
    let stock = self.fetch_stock(product_id).await?;
    let product = self.fetch_product(product_id).await?;

    let item = self.commit(CartOperation::AddProduct, product_id, |cart| {
      match cart.get(product_id) {
        Some(existing) if existing.amount >= stock.amount => Err(CartError::StockExhausted {
          product_id,
          requested: u64::from(existing.amount) + 1,
          available: stock.amount,
        }),
        Some(_) => {
          let next = cart.with_incremented(product_id);
          let item = next.get(product_id).cloned().ok_or(CartError::ProductNotInCart { product_id })?;
          Ok((next, item))
        }
        None if stock.amount == 0 => Err(CartError::StockExhausted {
          product_id,
          requested: 1,
          available: 0,
        }),
        None => {
          let item = LineItem::from_product(product, 1);
          Ok((cart.with_appended(item.clone()), item))
        }
      }
    })?;

    info!(amount = item.amount, "Product added to cart.");
    Ok(item)
  }

  /// Removes `product_id` entirely. No remote lookups.
  ///
  /// Returns the removed line item; `ProductNotInCart` if it was absent.
  #[instrument(name = "CartStore::remove_product", skip(self))]
  pub fn remove_product(&self, product_id: ProductId) -> CartResult<LineItem> {
    let result = self.commit(CartOperation::RemoveProduct, product_id, |cart| {
      let removed = cart
        .get(product_id)
        .cloned()
        .ok_or(CartError::ProductNotInCart { product_id })?;
      Ok((cart.without(product_id), removed))
    });
    if let Ok(removed) = &result {
      info!(amount = removed.amount, "Product removed from cart.");
    }
    self.settle(CartOperation::RemoveProduct, result)
  }

  /// Sets the amount of a product already in the cart.
  ///
  /// Amounts below 1 are rejected without any lookup, as is a product that is
  /// not in the cart. Otherwise the stock is fetched and the amount is applied
  /// if the stock covers it. Presence is checked again against the latest cart
  /// once the lookup resolves.
  #[instrument(
    name = "CartStore::update_product_amount",
    skip(self, update),
    fields(product_id = update.product_id, amount = update.amount)
  )]
  pub async fn update_product_amount(&self, update: UpdateProductAmount) -> CartResult<LineItem> {
    let result = self.try_update_product_amount(update).await;
    self.settle(CartOperation::UpdateProductAmount, result)
  }

  async fn try_update_product_amount(&self, update: UpdateProductAmount) -> CartResult<LineItem> {
    let UpdateProductAmount { product_id, amount } = update;
    if amount < 1 {
      return Err(CartError::InvalidAmount { product_id, amount });
    }
    let present = self.inner.state.read().cart.contains(product_id);
    if !present {
      return Err(CartError::ProductNotInCart { product_id });
    }

    let stock = self.fetch_stock(product_id).await?;
    let requested = amount.unsigned_abs();
    let exhausted = CartError::StockExhausted {
      product_id,
      requested,
      available: stock.amount,
    };
    if requested > u64::from(stock.amount) {
      return Err(exhausted);
    }
    let new_amount = u32::try_from(requested).map_err(|_| exhausted)?;

    let item = self.commit(CartOperation::UpdateProductAmount, product_id, |cart| {
      let current = cart.get(product_id).ok_or(CartError::ProductNotInCart { product_id })?;
      let item = LineItem {
        amount: new_amount,
        ..current.clone()
      };
      Ok((cart.with_amount(product_id, new_amount), item))
    })?;

    info!(amount = item.amount, "Product amount updated.");
    Ok(item)
  }

  async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockInfo> {
    self
      .inner
      .stock
      .stock(product_id)
      .await
      .map_err(|source| CartError::LookupFailure { product_id, source })
  }

  async fn fetch_product(&self, product_id: ProductId) -> CartResult<Product> {
    let product = self
      .inner
      .catalog
      .product(product_id)
      .await
      .map_err(|source| CartError::LookupFailure { product_id, source })?;
    if product.id != product_id {
      return Err(CartError::LookupFailure {
        product_id,
        source: anyhow::anyhow!("catalog answered with product {} instead", product.id),
      });
    }
    Ok(product)
  }
}
