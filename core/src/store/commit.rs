// cartstore/src/store/commit.rs

//! The single path through which a cart mutation becomes visible: compute,
//! persist, swap, then tell subscribers.

use crate::core::cart::{Cart, ProductId};
use crate::core::operation::{CartChange, CartOperation};
use crate::error::{CartError, CartResult};
use crate::store::definition::CartStore;
use tracing::{debug, event, warn, Level};

impl CartStore {
  /// Applies `mutate` to the latest committed cart.
  ///
  /// `mutate` returns the next cart and a value for the caller, or an error
  /// that aborts the commit. The next cart is written to storage before it
  /// replaces the in-memory cart; if the write fails the in-memory cart is left
  /// as it was. The write lock is held for the whole sequence.
  pub(crate) fn commit<T>(
    &self,
    operation: CartOperation,
    product_id: ProductId,
    mutate: impl FnOnce(&Cart) -> CartResult<(Cart, T)>,
  ) -> CartResult<T> {
    let key = &self.inner.config.storage_key;

    let (change, output) = {
      let mut state = self.inner.state.write();
      let (next, output) = mutate(&state.cart)?;

      let serialized = serde_json::to_string(&next).map_err(|e| CartError::Persistence {
        key: key.clone(),
        source: e.into(),
      })?;
      self
        .inner
        .storage
        .set(key, &serialized)
        .map_err(|source| CartError::Persistence {
          key: key.clone(),
          source,
        })?;

      state.cart = next;
      state.revision += 1;
      event!(
        Level::DEBUG,
        revision = state.revision,
        items = state.cart.len(),
        "Cart committed."
      );

      let change = CartChange {
        operation,
        product_id,
        revision: state.revision,
        cart: state.cart.clone(),
      };
      (change, output)
    };

    self.publish(&change);
    Ok(output)
  }

  fn publish(&self, change: &CartChange) {
    // Clone the list so listeners may subscribe or unsubscribe from inside a callback.
    let listeners: Vec<_> = self
      .inner
      .listeners
      .read()
      .iter()
      .map(|(_, listener)| listener.clone())
      .collect();
    for listener in listeners {
      listener(change);
    }
  }

  /// Reports a failed operation: one log line and exactly one notification.
  pub(crate) fn settle<T>(&self, operation: CartOperation, result: CartResult<T>) -> CartResult<T> {
    match &result {
      Ok(_) => debug!(%operation, "Cart operation succeeded."),
      Err(err) => {
        warn!(%operation, error = %err, "Cart operation rejected.");
        self.inner.notifier.notify(err.notification(operation));
      }
    }
    result
  }
}
