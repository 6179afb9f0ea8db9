// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use anyhow::anyhow;
use async_trait::async_trait;
use cartstore::{
  Cart, CartConfig, CartDependencies, CartStore, LineItem, MemoryStore, Notification, NotificationSink,
  PersistentStore, Product, ProductCatalog, ProductId, StockInfo, StockService,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Fake remote services ---

/// Stock and catalog backed by in-memory maps. Unknown ids fail like a 404 would.
#[derive(Default)]
pub struct FakeBackend {
  stock: Mutex<HashMap<ProductId, u32>>,
  products: Mutex<HashMap<ProductId, Product>>,
  pub stock_calls: AtomicUsize,
  pub product_calls: AtomicUsize,
}

impl FakeBackend {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_product(self, id: ProductId, name: &str, price: f64, stock: u32) -> Self {
    self.set_stock(id, stock);
    self.products.lock().insert(
      id,
      Product {
        id,
        name: name.to_string(),
        price,
        image: format!("https://cdn.example.test/{}.jpg", id),
      },
    );
    self
  }

  pub fn set_stock(&self, id: ProductId, amount: u32) {
    self.stock.lock().insert(id, amount);
  }

  pub fn stock_calls(&self) -> usize {
    self.stock_calls.load(Ordering::SeqCst)
  }

  pub fn product_calls(&self) -> usize {
    self.product_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl StockService for FakeBackend {
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<StockInfo> {
    self.stock_calls.fetch_add(1, Ordering::SeqCst);
    let amount = self.stock.lock().get(&product_id).copied();
    amount
      .map(|amount| StockInfo { amount })
      .ok_or_else(|| anyhow!("stock/{}: 404 Not Found", product_id))
  }
}

#[async_trait]
impl ProductCatalog for FakeBackend {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<Product> {
    self.product_calls.fetch_add(1, Ordering::SeqCst);
    let product = self.products.lock().get(&product_id).cloned();
    product.ok_or_else(|| anyhow!("products/{}: 404 Not Found", product_id))
  }
}

// --- Notifications ---

#[derive(Default)]
pub struct RecordingNotifier {
  seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
  pub fn all(&self) -> Vec<Notification> {
    self.seen.lock().clone()
  }

  pub fn count(&self) -> usize {
    self.seen.lock().len()
  }
}

impl NotificationSink for RecordingNotifier {
  fn notify(&self, notification: Notification) {
    self.seen.lock().push(notification);
  }
}

// --- Storage that can be told to fail ---

#[derive(Default)]
pub struct FlakyStore {
  inner: MemoryStore,
  pub fail_writes: std::sync::atomic::AtomicBool,
  pub fail_reads: std::sync::atomic::AtomicBool,
  pub writes: AtomicUsize,
}

impl FlakyStore {
  pub fn fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }
}

impl PersistentStore for FlakyStore {
  fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    if self.fail_reads.load(Ordering::SeqCst) {
      return Err(anyhow!("storage unavailable"));
    }
    self.inner.get(key)
  }

  fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(anyhow!("quota exceeded"));
    }
    self.writes.fetch_add(1, Ordering::SeqCst);
    self.inner.set(key, value)
  }
}

// --- Fixture wiring ---

pub struct Fixture {
  pub store: CartStore,
  pub backend: Arc<FakeBackend>,
  pub notifier: Arc<RecordingNotifier>,
  pub storage: Arc<FlakyStore>,
}

impl Fixture {
  /// Stored cart, decoded from storage (what a fresh process would load).
  pub fn persisted_cart(&self) -> Cart {
    let raw = self
      .storage
      .get(cartstore::DEFAULT_STORAGE_KEY)
      .expect("storage read")
      .expect("cart was persisted");
    serde_json::from_str(&raw).expect("persisted cart is valid JSON")
  }

  pub fn has_persisted_cart(&self) -> bool {
    self.storage.get(cartstore::DEFAULT_STORAGE_KEY).expect("storage read").is_some()
  }
}

/// Store over `backend` starting from `initial` (not written to storage).
pub fn fixture_with(backend: FakeBackend, initial: Vec<LineItem>) -> Fixture {
  let backend = Arc::new(backend);
  let notifier = Arc::new(RecordingNotifier::default());
  let storage = Arc::new(FlakyStore::default());
  let deps = CartDependencies {
    stock: backend.clone(),
    catalog: backend.clone(),
    notifier: notifier.clone(),
    storage: storage.clone(),
  };
  let cart = Cart::from_items(initial).expect("valid initial cart");
  let store = CartStore::with_cart(deps, CartConfig::default(), cart);
  Fixture {
    store,
    backend,
    notifier,
    storage,
  }
}

pub fn fixture(backend: FakeBackend) -> Fixture {
  fixture_with(backend, Vec::new())
}

pub fn line_item(id: ProductId, name: &str, price: f64, amount: u32) -> LineItem {
  LineItem {
    id,
    name: name.to_string(),
    price,
    image: format!("https://cdn.example.test/{}.jpg", id),
    amount,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
