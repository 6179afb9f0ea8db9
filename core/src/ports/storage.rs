// cartstore/src/ports/storage.rs

//! Durable key-value storage for the serialized cart, in the spirit of a
//! browser's local storage: string keys, string values, whole-value overwrites.

use anyhow::Context;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub trait PersistentStore: Send + Sync {
  /// Value stored under `key`, or `None` if nothing was ever written.
  fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

  /// Replaces the value under `key`.
  fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store pre-seeded with one entry.
  pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
    let store = Self::new();
    store.entries.lock().insert(key.into(), value.into());
    store
  }
}

impl PersistentStore for MemoryStore {
  fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    Ok(self.entries.lock().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    self.entries.lock().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Stores all keys in one JSON object file (`{"key": "value", ...}`).
///
/// Writes go to a sibling temporary file which is then renamed over the
/// original, so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
  path: PathBuf,
  // Serializes read-modify-write cycles within this process.
  guard: Mutex<()>,
}

impl FileStore {
  /// Opens (without creating) the store at `path`. The file is created on first `set`.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      guard: Mutex::new(()),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn read_entries(&self) -> anyhow::Result<BTreeMap<String, String>> {
    match std::fs::read_to_string(&self.path) {
      Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
      Ok(raw) => serde_json::from_str(&raw)
        .with_context(|| format!("storage file '{}' is not a JSON object of strings", self.path.display())),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
      Err(e) => Err(e).with_context(|| format!("failed to read storage file '{}'", self.path.display())),
    }
  }

  fn write_entries(&self, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create storage directory '{}'", parent.display()))?;
    }
    let mut tmp_path = self.path.clone().into_os_string();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let body = serde_json::to_string_pretty(entries).context("failed to encode storage entries")?;
    std::fs::write(&tmp_path, body)
      .with_context(|| format!("failed to write storage file '{}'", tmp_path.display()))?;
    std::fs::rename(&tmp_path, &self.path)
      .with_context(|| format!("failed to replace storage file '{}'", self.path.display()))?;
    Ok(())
  }
}

impl PersistentStore for FileStore {
  #[instrument(name = "FileStore::get", skip(self), fields(path = %self.path.display()))]
  fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    let _guard = self.guard.lock();
    let mut entries = self.read_entries()?;
    Ok(entries.remove(key))
  }

  #[instrument(name = "FileStore::set", skip(self, value), fields(path = %self.path.display(), bytes = value.len()))]
  fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    let _guard = self.guard.lock();
    let mut entries = self.read_entries()?;
    entries.insert(key.to_string(), value.to_string());
    self.write_entries(&entries)?;
    debug!("Storage entry written.");
    Ok(())
  }
}
