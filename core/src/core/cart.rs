// cartstore/src/core/cart.rs

//! The cart data model: products, stock, line items and the ordered `Cart`.
//!
//! Every mutation on `Cart` is pure. It borrows the current cart and returns a
//! new one, so the store can compute the next state, persist it, and only then
//! swap it in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Catalog identifier of a product. Unique within a cart.
pub type ProductId = u64;

/// Product details as served by the catalog (`GET products/{id}`).
///
/// Remote payloads carry the display name as `title`; `name` is accepted too.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  #[serde(rename = "title", alias = "name")]
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub image: String,
}

/// Available quantity for a product at query time (`GET stock/{id}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
  pub amount: u32,
}

/// One product in the cart together with the selected quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub id: ProductId,
  #[serde(rename = "title", alias = "name")]
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub image: String,
  pub amount: u32,
}

impl LineItem {
  pub fn from_product(product: Product, amount: u32) -> Self {
    Self {
      id: product.id,
      name: product.name,
      price: product.price,
      image: product.image,
      amount,
    }
  }

  /// `price * amount`.
  pub fn subtotal(&self) -> f64 {
    self.price * f64::from(self.amount)
  }
}

/// A reason a stored cart cannot be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityViolation {
  DuplicateId(ProductId),
  ZeroAmount(ProductId),
}

impl fmt::Display for IntegrityViolation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IntegrityViolation::DuplicateId(id) => write!(f, "product {} appears more than once", id),
      IntegrityViolation::ZeroAmount(id) => write!(f, "product {} has an amount of 0", id),
    }
  }
}

/// Ordered sequence of line items. Order is the order in which products were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<LineItem>);

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a cart from already-ordered items, rejecting duplicates and zero amounts.
  pub fn from_items(items: Vec<LineItem>) -> Result<Self, IntegrityViolation> {
    let cart = Cart(items);
    match cart.find_violation() {
      Some(violation) => Err(violation),
      None => Ok(cart),
    }
  }

  pub(crate) fn find_violation(&self) -> Option<IntegrityViolation> {
    let mut seen = std::collections::HashSet::with_capacity(self.0.len());
    for item in &self.0 {
      if item.amount == 0 {
        return Some(IntegrityViolation::ZeroAmount(item.id));
      }
      if !seen.insert(item.id) {
        return Some(IntegrityViolation::DuplicateId(item.id));
      }
    }
    None
  }

  pub fn items(&self) -> &[LineItem] {
    &self.0
  }

  pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
    self.0.iter()
  }

  pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
    self.0.iter().find(|item| item.id == product_id)
  }

  pub fn contains(&self, product_id: ProductId) -> bool {
    self.get(product_id).is_some()
  }

  /// Number of distinct products.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Sum of all amounts.
  pub fn total_units(&self) -> u64 {
    self.0.iter().map(|item| u64::from(item.amount)).sum()
  }

  pub fn total(&self) -> f64 {
    self.0.iter().map(LineItem::subtotal).sum()
  }

  /// Amount per product id, as product listings show it next to each product.
  pub fn amounts(&self) -> BTreeMap<ProductId, u32> {
    self.0.iter().map(|item| (item.id, item.amount)).collect()
  }

  /// Copy of this cart with the given item's amount replaced. Other items are untouched.
  pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
    Cart(
      self
        .0
        .iter()
        .map(|item| {
          if item.id == product_id {
            LineItem { amount, ..item.clone() }
          } else {
            item.clone()
          }
        })
        .collect(),
    )
  }

  pub fn with_incremented(&self, product_id: ProductId) -> Cart {
    Cart(
      self
        .0
        .iter()
        .map(|item| {
          if item.id == product_id {
            LineItem {
              amount: item.amount.saturating_add(1),
              ..item.clone()
            }
          } else {
            item.clone()
          }
        })
        .collect(),
    )
  }

  /// Copy of this cart with `item` appended at the end.
  ///
  /// Callers check `contains` first; appending an id already present would break uniqueness.
  pub fn with_appended(&self, item: LineItem) -> Cart {
    let mut items = self.0.clone();
    items.push(item);
    Cart(items)
  }

  /// Copy of this cart without the given product. Remaining order is preserved.
  pub fn without(&self, product_id: ProductId) -> Cart {
    Cart(self.0.iter().filter(|item| item.id != product_id).cloned().collect())
  }
}

impl<'a> IntoIterator for &'a Cart {
  type Item = &'a LineItem;
  type IntoIter = std::slice::Iter<'a, LineItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
