pub mod cart;
pub mod operation;
pub mod shared;

// Re-export key types for easier access from other modules (and lib.rs)
pub use cart::{Cart, IntegrityViolation, LineItem, Product, ProductId, StockInfo};
pub use operation::{CartChange, CartOperation, UpdateProductAmount};
pub use shared::{CartState, SharedCart};
