// demos/storefront/src/errors.rs

use cartstore::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("HTTP Client Error: {0}")]
  Http(#[from] reqwest::Error),

  // The shopper has already been notified by the time this is returned.
  #[error("Cart Error: {0}")]
  Cart(#[from] CartError),
}

impl AppError {
  /// Process exit code: 2 for a rejected cart operation, 1 for everything else.
  pub fn exit_code(&self) -> u8 {
    match self {
      AppError::Cart(_) => 2,
      _ => 1,
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
