// cartstore/src/config.rs

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
  /// Key under which the serialized cart lives in the `PersistentStore`.
  pub storage_key: String,
}

impl CartConfig {
  pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
    self.storage_key = key.into();
    self
  }
}

impl Default for CartConfig {
  fn default() -> Self {
    Self {
      storage_key: DEFAULT_STORAGE_KEY.to_string(),
    }
  }
}
