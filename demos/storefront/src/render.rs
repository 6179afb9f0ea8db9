// demos/storefront/src/render.rs

use cartstore::Cart;
use std::fmt::Write;

/// Plain-text cart page: one row per line item, then the total.
pub fn cart_table(cart: &Cart) -> String {
  if cart.is_empty() {
    return "Your cart is empty.\n".to_string();
  }

  let name_width = cart.iter().map(|item| item.name.chars().count()).max().unwrap_or(0).max(7);
  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:>6}  {:<name_width$}  {:>6}  {:>10}  {:>11}",
    "ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"
  );
  for item in cart {
    let _ = writeln!(
      out,
      "{:>6}  {:<name_width$}  {:>6}  {:>10.2}  {:>11.2}",
      item.id,
      item.name,
      item.amount,
      item.price,
      item.subtotal()
    );
  }
  let _ = writeln!(
    out,
    "{} product(s), {} unit(s), total {:.2}",
    cart.len(),
    cart.total_units(),
    cart.total()
  );
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use cartstore::LineItem;

  #[test]
  fn renders_rows_in_cart_order_with_total() {
    let cart = Cart::from_items(vec![
      LineItem {
        id: 3,
        name: "Runner".to_string(),
        price: 179.9,
        image: String::new(),
        amount: 2,
      },
      LineItem {
        id: 1,
        name: "Trail".to_string(),
        price: 139.9,
        image: String::new(),
        amount: 1,
      },
    ])
    .unwrap();

    let table = cart_table(&cart);
    let lines: Vec<_> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("Runner") && lines[1].contains("359.80"));
    assert!(lines[2].contains("Trail"));
    assert_eq!(lines[3], "2 product(s), 3 unit(s), total 499.70");
  }

  #[test]
  fn renders_empty_cart() {
    assert_eq!(cart_table(&Cart::new()), "Your cart is empty.\n");
  }
}
