// cartstore/src/store/definition.rs

//! Defines `CartStore`: its collaborators, how it is loaded from storage, and
//! how UI code reads and observes the committed cart.

use crate::config::CartConfig;
use crate::core::cart::Cart;
use crate::core::operation::CartChange;
use crate::core::shared::SharedCart;
use crate::error::{CartError, CartResult};
use crate::ports::{NotificationSink, PersistentStore, ProductCatalog, StockService};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The collaborators a `CartStore` is built from.
#[derive(Clone)]
pub struct CartDependencies {
  pub stock: Arc<dyn StockService>,
  pub catalog: Arc<dyn ProductCatalog>,
  pub notifier: Arc<dyn NotificationSink>,
  pub storage: Arc<dyn PersistentStore>,
}

/// Callback run after every successful commit.
pub type CartListener = Arc<dyn Fn(&CartChange) + Send + Sync>;

/// Handle returned by `CartStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) struct CartStoreInner {
  pub(crate) stock: Arc<dyn StockService>,
  pub(crate) catalog: Arc<dyn ProductCatalog>,
  pub(crate) notifier: Arc<dyn NotificationSink>,
  pub(crate) storage: Arc<dyn PersistentStore>,
  pub(crate) config: CartConfig,
  pub(crate) state: SharedCart,
  pub(crate) listeners: RwLock<Vec<(SubscriptionId, CartListener)>>,
  next_subscription: AtomicU64,
}

/// The shopping-cart store.
///
/// Built once at application start and handed to whichever components need
/// it. Cloning is cheap and every clone shares the same cart, storage and
/// subscribers.
///
/// Concurrency contract: remote lookups run without any lock held. Once they
/// resolve, the operation takes the write lock, validates against the latest
/// committed cart, persists the result and swaps it in before releasing the
/// lock. Overlapping operations therefore never interleave their writes, and
/// the last one to commit wins.
#[derive(Clone)]
pub struct CartStore {
  pub(crate) inner: Arc<CartStoreInner>,
}

impl CartStore {
  /// Reads the cart stored under `config.storage_key` and builds the store around it.
  ///
  /// A missing entry yields an empty cart. So does an entry that does not parse
  /// or breaks the cart invariants (duplicate ids, zero amounts); it is logged
  /// and replaced on the next commit. Only a failing storage backend is an error.
  #[instrument(name = "CartStore::load", skip_all, fields(storage_key = %config.storage_key))]
  pub fn load(deps: CartDependencies, config: CartConfig) -> CartResult<Self> {
    let stored = deps.storage.get(&config.storage_key).map_err(|source| CartError::Persistence {
      key: config.storage_key.clone(),
      source,
    })?;

    let cart = match stored {
      Some(raw) => decode_stored_cart(&raw),
      None => {
        debug!("No stored cart found, starting empty.");
        Cart::new()
      }
    };

    info!(items = cart.len(), units = cart.total_units(), "Cart loaded.");
    Ok(Self::with_cart(deps, config, cart))
  }

  /// Builds a store around an explicit cart without reading storage.
  pub fn with_cart(deps: CartDependencies, config: CartConfig, cart: Cart) -> Self {
    Self {
      inner: Arc::new(CartStoreInner {
        stock: deps.stock,
        catalog: deps.catalog,
        notifier: deps.notifier,
        storage: deps.storage,
        config,
        state: SharedCart::new(cart),
        listeners: RwLock::new(Vec::new()),
        next_subscription: AtomicU64::new(0),
      }),
    }
  }

  /// Snapshot of the committed cart.
  pub fn cart(&self) -> Cart {
    self.inner.state.snapshot()
  }

  /// Read-only handle on the committed state, shared with this store.
  pub fn state(&self) -> SharedCart {
    self.inner.state.clone()
  }

  /// Number of commits since the store was built.
  pub fn revision(&self) -> u64 {
    self.inner.state.revision()
  }

  pub fn config(&self) -> &CartConfig {
    &self.inner.config
  }

  /// Registers `listener` to run after each successful commit, outside the cart lock.
  pub fn subscribe(&self, listener: impl Fn(&CartChange) + Send + Sync + 'static) -> SubscriptionId {
    let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
    self.inner.listeners.write().push((id, Arc::new(listener)));
    debug!(subscription = id.0, "Cart listener subscribed.");
    id
  }

  /// Returns `false` if `id` was not subscribed.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    let mut listeners = self.inner.listeners.write();
    let before = listeners.len();
    listeners.retain(|(existing, _)| *existing != id);
    listeners.len() != before
  }
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let state = self.inner.state.read();
    f.debug_struct("CartStore")
      .field("storage_key", &self.inner.config.storage_key)
      .field("items", &state.cart.len())
      .field("revision", &state.revision)
      .field("listeners", &self.inner.listeners.read().len())
      .finish()
  }
}

fn decode_stored_cart(raw: &str) -> Cart {
  match serde_json::from_str::<Cart>(raw) {
    Ok(cart) => match cart.find_violation() {
      None => cart,
      Some(violation) => {
        warn!(%violation, "Stored cart breaks cart invariants; starting with an empty cart.");
        Cart::new()
      }
    },
    Err(e) => {
      warn!(error = %e, "Stored cart could not be parsed; starting with an empty cart.");
      Cart::new()
    }
  }
}
