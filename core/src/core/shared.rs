// cartstore/src/core/shared.rs
use crate::core::cart::Cart;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// The committed cart plus the number of commits that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
  pub cart: Cart,
  pub revision: u64,
}

/// Shared, interior-mutable holder of the committed cart state, backed by
/// `parking_lot::RwLock`.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points. The store only takes the write
/// lock after all remote lookups have resolved.
#[derive(Debug)]
pub struct SharedCart(Arc<RwLock<CartState>>);

impl SharedCart {
  pub fn new(cart: Cart) -> Self {
    SharedCart(Arc::new(RwLock::new(CartState { cart, revision: 0 })))
  }

  /// Acquires a read lock on the whole state.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, CartState> {
    self.0.read()
  }

  pub(crate) fn write(&self) -> RwLockWriteGuard<'_, CartState> {
    self.0.write()
  }

  /// Attempts to acquire a read lock without blocking.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, CartState>> {
    self.0.try_read()
  }

  // Guard over just the cart, e.g. for rendering without cloning.
  pub fn map_read(&self) -> MappedRwLockReadGuard<'_, Cart> {
    RwLockReadGuard::map(self.read(), |state| &state.cart)
  }

  /// Clones the committed cart.
  pub fn snapshot(&self) -> Cart {
    self.read().cart.clone()
  }

  pub fn revision(&self) -> u64 {
    self.read().revision
  }
}

impl Clone for SharedCart {
  fn clone(&self) -> Self {
    SharedCart(Arc::clone(&self.0))
  }
}

impl Default for SharedCart {
  fn default() -> Self {
    Self::new(Cart::default())
  }
}
