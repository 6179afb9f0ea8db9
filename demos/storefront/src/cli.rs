// demos/storefront/src/cli.rs

use cartstore::ProductId;
use clap::{Parser, Subcommand};

/// Storefront cart, persisted locally and checked against the store's stock API.
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Manage the local storefront cart")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the cart.
  Show,

  /// Add one unit of a product.
  Add { product_id: ProductId },

  /// Remove a product from the cart.
  Remove { product_id: ProductId },

  /// Set the amount of a product already in the cart.
  Update {
    product_id: ProductId,
    #[arg(allow_negative_numbers = true)]
    amount: i64,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_update_with_negative_amount() {
    let cli = Cli::try_parse_from(["storefront", "update", "4", "-1"]).unwrap();
    assert!(matches!(
      cli.command,
      Command::Update {
        product_id: 4,
        amount: -1
      }
    ));
  }

  #[test]
  fn rejects_non_numeric_ids() {
    assert!(Cli::try_parse_from(["storefront", "add", "shoe"]).is_err());
  }
}
