// demos/storefront/src/main.rs

mod cli;
mod config;
mod errors;
mod render;
mod services;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::services::api::ApiClient;
use crate::services::toast::ConsoleToast;

use cartstore::{CartConfig, CartDependencies, CartStore, FileStore, UpdateProductAmount};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
  // Logs go to stderr so stdout carries only the cart.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let cli = Cli::parse();

  match run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      match &e {
        // Already surfaced through the toast.
        AppError::Cart(cart_err) => tracing::debug!(error = %cart_err, "Cart operation rejected."),
        other => tracing::error!(error = %other, "storefront command failed."),
      }
      ExitCode::from(e.exit_code())
    }
  }
}

async fn run(cli: Cli) -> AppResult<()> {
  let config = AppConfig::from_env()?;
  let api = Arc::new(ApiClient::new(&config.api_url, config.http_timeout)?);

  let store = CartStore::load(
    CartDependencies {
      stock: api.clone(),
      catalog: api,
      notifier: Arc::new(ConsoleToast),
      storage: Arc::new(FileStore::open(&config.storage_path)),
    },
    CartConfig::default().with_storage_key(config.storage_key.clone()),
  )?;
  tracing::info!(storage = %config.storage_path.display(), items = store.cart().len(), "Cart ready.");

  match cli.command {
    Command::Show => {}
    Command::Add { product_id } => {
      store.add_product(product_id).await?;
    }
    Command::Remove { product_id } => {
      store.remove_product(product_id)?;
    }
    Command::Update { product_id, amount } => {
      store
        .update_product_amount(UpdateProductAmount { product_id, amount })
        .await?;
    }
  }

  print!("{}", render::cart_table(&store.cart()));
  Ok(())
}
