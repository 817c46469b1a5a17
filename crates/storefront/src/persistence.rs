//! Key-value persistence for cart, wishlist, and preferences.
//!
//! The storefront treats storage as a black box of opaque string blobs.
//! [`KeyValueStore`] is the seam: [`CatalogStore`](crate::catalog::CatalogStore)
//! and [`PreferencesStore`](crate::prefs::PreferencesStore) receive one at
//! construction and write through it after every mutation.
//!
//! [`load`] never fails: missing or corrupt data yields the caller's fallback.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Keys for persisted storefront state.
pub mod keys {
    /// Key for the cart line list.
    pub const CART: &str = "ts_cart";

    /// Key for the wishlist id list.
    pub const WISHLIST: &str = "ts_wishlist";

    /// Key for accessibility preferences.
    pub const PREFERENCES: &str = "ts_prefs";
}

/// Errors that can occur while writing persisted state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// A string-keyed blob store.
///
/// Each `set_raw` is a single key replace; implementations need no batching.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backing storage cannot be written.
    fn set_raw(&self, key: &str, value: String) -> Result<(), PersistenceError>;

    /// Pick up changes other sessions made to the backing storage.
    fn refresh(&self) {}
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns `PersistenceError` if serialization or the underlying write fails.
#[instrument(skip(store, value))]
pub fn save<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, raw)?;
    debug!("saved");
    Ok(())
}

/// Load and deserialize the value under `key`, or return `fallback`.
///
/// Missing keys, JSON `null`, and blobs that fail to parse all fall back
/// silently (corrupt data is logged at `warn`).
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    let Some(raw) = store.get_raw(key) else {
        return fallback;
    };

    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupt persisted value");
            fallback
        }
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Volatile store, used in tests and when no data file is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), PersistenceError> {
        self.entries
            .write()
            .map_err(|_| PersistenceError::Poisoned)?
            .insert(key.to_owned(), value);
        Ok(())
    }
}

// =============================================================================
// JSON file store
// =============================================================================

/// Store backed by a single JSON document mapping key to blob.
///
/// The whole document is rewritten on every `set_raw` through a temporary
/// sibling file and a rename, so a crash mid-write leaves the previous
/// document intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts an empty store. A corrupt file is logged and also
    /// starts empty; it is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let entries = read_entries(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Missing and corrupt documents read as empty. Other I/O failures are
/// returned so an unreadable document is never overwritten.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Ignoring corrupt data file");
        BTreeMap::new()
    }))
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    /// Replaces only `key`; other keys are re-read from disk first so
    /// concurrent sessions do not clobber each other.
    fn set_raw(&self, key: &str, value: String) -> Result<(), PersistenceError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PersistenceError::Poisoned)?;
        *entries = read_entries(&self.path)?;
        entries.insert(key.to_owned(), value);
        self.flush(&entries)
    }

    fn refresh(&self) {
        match read_entries(&self.path) {
            Ok(fresh) => {
                if let Ok(mut entries) = self.entries.write() {
                    *entries = fresh;
                }
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Cannot read data file, keeping cached state"
                );
            }
        }
    }
}
