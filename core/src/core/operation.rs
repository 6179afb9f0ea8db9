// cartstore/src/core/operation.rs

//! Names the three cart mutations and the outcome reported to subscribers.

use crate::core::cart::{Cart, ProductId};
use crate::ports::notify::Notification;
use std::fmt;

/// The cart mutations exposed to UI code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
  AddProduct,
  RemoveProduct,
  UpdateProductAmount,
}

impl CartOperation {
  pub fn as_str(self) -> &'static str {
    match self {
      CartOperation::AddProduct => "add_product",
      CartOperation::RemoveProduct => "remove_product",
      CartOperation::UpdateProductAmount => "update_product_amount",
    }
  }

  /// The generic message shown when this operation fails for any reason other than stock.
  pub fn failure_notification(self) -> Notification {
    match self {
      CartOperation::AddProduct => Notification::AddFailed,
      CartOperation::RemoveProduct => Notification::RemoveFailed,
      CartOperation::UpdateProductAmount => Notification::UpdateAmountFailed,
    }
  }
}

impl fmt::Display for CartOperation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Input of `CartStore::update_product_amount`.
///
/// `amount` is signed on purpose: callers forward raw UI input and the store
/// rejects anything below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
  pub product_id: ProductId,
  pub amount: i64,
}

/// A committed change, delivered to subscribers after the new cart is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartChange {
  pub operation: CartOperation,
  pub product_id: ProductId,
  /// Monotonic commit counter. Subscribers can drop changes older than one already seen.
  pub revision: u64,
  pub cart: Cart,
}
