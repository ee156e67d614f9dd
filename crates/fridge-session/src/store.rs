//! # Refrigerator Store Handle
//!
//! The shared handle the host application holds for the lifetime of a
//! session. It wraps the pure [`RefrigeratorState`] in a mutex, rehydrates
//! it from the session cache at open, and snapshots it back after every
//! mutation.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple host callbacks may access/modify the store
//! 2. Only one caller should modify the state at a time
//! 3. Handles are cheap clones sharing the same state
//!
//! ## Write-Through Persistence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Mutation Flow (write-through)                         │
//! │                                                                         │
//! │  set_refrigerators(v)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock state ──► apply pure mutation ──► serialize snapshot ──► cache   │
//! │       │                                        │                        │
//! │       │                                        └─ on failure: memory    │
//! │       ▼                                           mutation is already   │
//! │  release lock                                     applied, Err returned │
//! │                                                                         │
//! │  NOTE: A rejected selection (`set_selected_refrigerator` → false)       │
//! │        changes nothing, so nothing is persisted.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use fridge_core::{GroceryEntity, Refrigerator, RefrigeratorState};

use crate::cache::SessionCache;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// Shared, clonable handle to the session's refrigerator state.
///
/// There is exactly one state record per session; every clone of the handle
/// reads and writes the same record, so mutation visibility is immediate to
/// all holders. Construct it once with [`RefrigeratorStore::open`] and pass
/// clones to the consumers that need it (no implicit global).
#[derive(Clone)]
pub struct RefrigeratorStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Cache key this store snapshots under.
    key: String,

    /// The live state record.
    state: Mutex<RefrigeratorState>,

    /// Session-scoped persistence backend.
    cache: Arc<dyn SessionCache>,
}

impl RefrigeratorStore {
    /// Opens the store, rehydrating state from the session cache.
    ///
    /// ## Behavior
    /// - No snapshot under the configured key: starts from the empty state.
    /// - Snapshot present and well-formed: restores it.
    /// - Snapshot present but unreadable: warn-logs and starts empty. There
    ///   is no versioning or migration; an undecodable snapshot is treated
    ///   as absent.
    pub fn open(config: &SessionConfig, cache: Arc<dyn SessionCache>) -> SessionResult<Self> {
        let key = config.store_key.clone();

        let state = match cache.get(&key)? {
            Some(snapshot) => match serde_json::from_str::<RefrigeratorState>(&snapshot) {
                Ok(state) => {
                    info!(key = %key, fridges = state.refrigerators().len(), "Restored session state");
                    state
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "Discarding unreadable session snapshot");
                    RefrigeratorState::new()
                }
            },
            None => {
                info!(key = %key, "No session snapshot, starting empty");
                RefrigeratorState::new()
            }
        };

        Ok(RefrigeratorStore {
            inner: Arc::new(StoreInner {
                key,
                state: Mutex::new(state),
                cache,
            }),
        })
    }

    fn lock(&self) -> SessionResult<MutexGuard<'_, RefrigeratorState>> {
        self.inner.state.lock().map_err(|_| SessionError::PoisonedLock)
    }

    /// Serializes the locked state and writes it through to the cache.
    fn persist(&self, state: &RefrigeratorState) -> SessionResult<()> {
        let snapshot = serde_json::to_string(state).map_err(SessionError::Serialize)?;
        self.inner.cache.put(&self.inner.key, &snapshot)
    }

    // -------------------------------------------------------------------------
    // Getters (read only)
    // -------------------------------------------------------------------------

    /// Returns the currently-selected grocery, if any.
    pub fn selected_grocery(&self) -> SessionResult<Option<GroceryEntity>> {
        Ok(self.lock()?.selected_grocery().cloned())
    }

    /// Returns the currently-selected refrigerator, if any.
    pub fn selected_refrigerator(&self) -> SessionResult<Option<Refrigerator>> {
        Ok(self.lock()?.selected_refrigerator().cloned())
    }

    /// Returns the current refrigerator list.
    pub fn refrigerators(&self) -> SessionResult<Vec<Refrigerator>> {
        Ok(self.lock()?.refrigerators().to_vec())
    }

    /// Looks up a refrigerator by id (first match in insertion order).
    pub fn refrigerator_by_id(&self, id: i64) -> SessionResult<Option<Refrigerator>> {
        Ok(self.lock()?.refrigerator_by_id(id).cloned())
    }

    /// Returns a copy of the whole state record.
    pub fn state(&self) -> SessionResult<RefrigeratorState> {
        Ok(self.lock()?.clone())
    }

    // -------------------------------------------------------------------------
    // Mutations (write-through)
    // -------------------------------------------------------------------------

    /// Overwrites the selected grocery.
    pub fn set_selected_grocery(&self, grocery: GroceryEntity) -> SessionResult<()> {
        let mut state = self.lock()?;
        debug!(id = grocery.id, "set_selected_grocery");
        state.set_selected_grocery(grocery);
        self.persist(&state)
    }

    /// Selects a refrigerator, if its id is known to the store.
    ///
    /// Returns `Ok(true)` when the selection was accepted, `Ok(false)` when
    /// the id was not found (state unchanged, nothing persisted). See
    /// [`RefrigeratorState::set_selected_refrigerator`] for the exact
    /// acceptance semantics.
    pub fn set_selected_refrigerator(&self, refrigerator: Refrigerator) -> SessionResult<bool> {
        let mut state = self.lock()?;
        let accepted = state.set_selected_refrigerator(refrigerator);
        debug!(accepted, "set_selected_refrigerator");
        if accepted {
            self.persist(&state)?;
        }
        Ok(accepted)
    }

    /// Replaces the refrigerator list wholesale.
    ///
    /// Selections are not reconciled; see
    /// [`RefrigeratorState::set_refrigerators`].
    pub fn set_refrigerators(&self, refrigerators: Vec<Refrigerator>) -> SessionResult<()> {
        let mut state = self.lock()?;
        debug!(count = refrigerators.len(), "set_refrigerators");
        state.set_refrigerators(refrigerators);
        self.persist(&state)
    }

    /// Clears all state and persists the empty snapshot.
    ///
    /// The empty snapshot is written (rather than the cache key removed) so
    /// a reset deliberately survives a reload within the same session.
    pub fn reset(&self) -> SessionResult<()> {
        let mut state = self.lock()?;
        debug!("reset");
        state.reset();
        self.persist(&state)
    }
}
