//! # Session Cache
//!
//! A key-value storage area scoped to one session. The store keeps exactly
//! one entry per store name (the JSON snapshot of its state), but the cache
//! itself is a plain string-to-string map so other session-scoped stores can
//! share a backend.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SessionCache Backends                              │
//! │                                                                         │
//! │  MemoryCache                      FileCache                             │
//! │  ───────────                      ─────────                             │
//! │  HashMap in process memory        One file per key inside a session     │
//! │  Gone when the process exits      directory:                            │
//! │  Used by tests and hosts that       <dir>/refrigerator.json             │
//! │  manage persistence themselves    clear() removes the directory at      │
//! │                                   session teardown                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no versioning or migration: a snapshot that cannot be decoded is
//! treated as absent by the store (see `store.rs`).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{SessionError, SessionResult};

// =============================================================================
// Trait
// =============================================================================

/// Session-scoped key-value storage.
///
/// All methods take `&self`: backends use interior mutability so a cache can
/// sit behind a shared store handle.
pub trait SessionCache: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process cache backend.
///
/// Contents live as long as the process; used by tests and by embedding
/// hosts that handle persistence on their own.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    /// Creates an empty in-memory cache.
    pub fn new() -> Self {
        MemoryCache::default()
    }
}

impl SessionCache for MemoryCache {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| SessionError::PoisonedLock)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::PoisonedLock)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::PoisonedLock)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// File-backed cache: one file per key inside a session directory.
///
/// ## Lifecycle
/// - [`FileCache::open`] creates the directory if needed.
/// - [`FileCache::clear`] removes the whole directory; the host calls it at
///   session teardown so the next session starts clean.
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Opens a cache rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> SessionResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|err| SessionError::cache_io(dir.display().to_string(), err))?;
        debug!(dir = %dir.display(), "Opened session cache directory");
        Ok(FileCache { dir })
    }

    /// Removes the entire session directory and everything in it.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::cache_io(self.dir.display().to_string(), err)),
        }
    }

    /// Returns the file path backing `key`.
    ///
    /// Keys are sanitized to a conservative file-name alphabet so a key can
    /// never escape the session directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl SessionCache for FileCache {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionError::cache_io(key, err)),
        }
    }

    fn put(&self, key: &str, value: &str) -> SessionResult<()> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|err| SessionError::cache_io(key, err))?;
        debug!(key = %key, bytes = value.len(), "Wrote session cache entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::cache_io(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        assert!(cache.get("refrigerator").unwrap().is_none());

        cache.put("refrigerator", "{\"a\":1}").unwrap();
        assert_eq!(cache.get("refrigerator").unwrap().unwrap(), "{\"a\":1}");

        cache.remove("refrigerator").unwrap();
        assert!(cache.get("refrigerator").unwrap().is_none());
    }

    #[test]
    fn test_memory_cache_remove_absent_key_is_ok() {
        let cache = MemoryCache::new();
        cache.remove("missing").unwrap();
    }

    #[test]
    fn test_file_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::open(dir.path().join("session")).unwrap();

        assert!(cache.get("refrigerator").unwrap().is_none());
        cache.put("refrigerator", "snapshot").unwrap();
        assert_eq!(cache.get("refrigerator").unwrap().unwrap(), "snapshot");

        cache.remove("refrigerator").unwrap();
        assert!(cache.get("refrigerator").unwrap().is_none());
    }

    #[test]
    fn test_file_cache_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::open(dir.path()).unwrap();

        cache.put("../escape/attempt", "value").unwrap();

        // The entry stays inside the session directory.
        assert_eq!(cache.get("../escape/attempt").unwrap().unwrap(), "value");
        assert!(!dir.path().join("..").join("escape").exists());
    }

    #[test]
    fn test_file_cache_clear_removes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let session_dir = dir.path().join("session");
        let cache = FileCache::open(&session_dir).unwrap();
        cache.put("refrigerator", "snapshot").unwrap();

        cache.clear().unwrap();
        assert!(!session_dir.exists());

        // Clearing twice is not an error.
        cache.clear().unwrap();
    }
}
