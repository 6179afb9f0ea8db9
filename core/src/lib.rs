// src/lib.rs

//! cartstore: an asynchronous, storage-backed shopping-cart store.
//!
//! A `CartStore` keeps the shopper's ordered list of line items and offers
//! three mutations:
//!  - `add_product`: one more unit, checked against remote stock.
//!  - `remove_product`: drop a product entirely.
//!  - `update_product_amount`: set an amount, checked against remote stock.
//!
//! After every successful mutation the whole cart is written as a JSON array
//! to a `PersistentStore` and only then becomes the committed in-memory cart.
//! Failures come back as a typed `CartError` and are also surfaced as one
//! user-facing `Notification`.

pub mod config;
pub mod core;
pub mod error;
pub mod ports;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::core::cart::{Cart, IntegrityViolation, LineItem, Product, ProductId, StockInfo};
pub use crate::core::operation::{CartChange, CartOperation, UpdateProductAmount};
pub use crate::core::shared::{CartState, SharedCart};

pub use crate::config::{CartConfig, DEFAULT_STORAGE_KEY};
pub use crate::error::{CartError, CartResult};

pub use crate::ports::{
  FileStore, MemoryStore, Notification, NotificationSink, PersistentStore, ProductCatalog, StockService,
  TracingNotifier,
};

pub use crate::store::{CartDependencies, CartListener, CartStore, SubscriptionId};
