// cartstore/src/error.rs
use crate::core::cart::ProductId;
use crate::core::operation::CartOperation;
use crate::ports::notify::Notification;
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Why a cart operation did not change the cart.
///
/// Every variant is terminal for the call that produced it: nothing is
/// retried and nothing is partially applied.
#[derive(Debug, Error)]
pub enum CartError {
  #[error("Requested {requested} unit(s) of product {product_id}, only {available} in stock")]
  StockExhausted {
    product_id: ProductId,
    requested: u64,
    available: u32,
  },

  #[error("Product {product_id} is not in the cart")]
  ProductNotInCart { product_id: ProductId },

  #[error("Invalid amount {amount} for product {product_id}: amounts start at 1")]
  InvalidAmount { product_id: ProductId, amount: i64 },

  #[error("Remote lookup for product {product_id} failed. Source: {source}")]
  LookupFailure {
    product_id: ProductId,
    #[source]
    source: AnyhowError,
  },

  #[error("Cart storage under key '{key}' failed. Source: {source}")]
  Persistence {
    key: String,
    #[source]
    source: AnyhowError,
  },
}

impl CartError {
  /// The user-facing message for this error raised by `operation`.
  ///
  /// Stock problems get their own message; everything else collapses into the
  /// operation's generic failure message.
  pub fn notification(&self, operation: CartOperation) -> Notification {
    match self {
      CartError::StockExhausted { .. } => Notification::OutOfStock,
      _ => operation.failure_notification(),
    }
  }

  pub fn product_id(&self) -> Option<ProductId> {
    match self {
      CartError::StockExhausted { product_id, .. }
      | CartError::ProductNotInCart { product_id }
      | CartError::InvalidAmount { product_id, .. }
      | CartError::LookupFailure { product_id, .. } => Some(*product_id),
      CartError::Persistence { .. } => None,
    }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
