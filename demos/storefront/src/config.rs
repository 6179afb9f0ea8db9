// demos/storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL serving `stock/{id}` and `products/{id}`.
  pub api_url: String,
  /// File holding the local key-value storage.
  pub storage_path: PathBuf,
  pub storage_key: String,
  pub http_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let api_url = lookup("STOREFRONT_API_URL")
      .filter(|v| !v.trim().is_empty())
      .ok_or_else(|| AppError::Config("Missing environment variable 'STOREFRONT_API_URL'".to_string()))?;
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
      return Err(AppError::Config(format!(
        "STOREFRONT_API_URL must be an http(s) URL, got '{}'",
        api_url
      )));
    }

    let storage_path = lookup("STOREFRONT_STORAGE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from("./storefront-storage.json"));
    let storage_key = lookup("STOREFRONT_STORAGE_KEY").unwrap_or_else(|| cartstore::DEFAULT_STORAGE_KEY.to_string());
    let http_timeout_secs = lookup("STOREFRONT_HTTP_TIMEOUT_SECS")
      .unwrap_or_else(|| "10".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid STOREFRONT_HTTP_TIMEOUT_SECS: {}", e)))?;

    tracing::debug!(%api_url, storage_path = %storage_path.display(), %storage_key, "Storefront configuration loaded.");

    Ok(Self {
      api_url,
      storage_path,
      storage_key,
      http_timeout: Duration::from_secs(http_timeout_secs),
    })
  }
}
