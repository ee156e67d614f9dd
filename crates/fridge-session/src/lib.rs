//! # fridge-session: Session Layer for the Fridge App
//!
//! This crate ties the pure domain state from `fridge-core` to one user
//! session: it rehydrates the state from a session-scoped cache at startup,
//! snapshots it back after every mutation, and hands the host application a
//! shared, clonable store handle.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fridge Session Flow                              │
//! │                                                                         │
//! │  Host application (UI layer)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  fridge-session (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌───────────────┐   ┌───────────────┐  │   │
//! │  │   │ RefrigeratorStore │ SessionCache  │   │ SessionConfig │  │   │
//! │  │   │   (store.rs)   │   │  (cache.rs)   │   │  (config.rs)  │  │   │
//! │  │   │                │   │               │   │               │  │   │
//! │  │   │ Arc<Mutex<     │◄──│ MemoryCache   │   │ cache dir     │  │   │
//! │  │   │  State>> +     │   │ FileCache     │   │ store key     │  │   │
//! │  │   │ write-through  │   │               │   │               │  │   │
//! │  │   └────────────────┘   └───────────────┘   └───────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session cache directory (one JSON file per key, removed at teardown)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`cache`] - Session cache trait and backends
//! - [`config`] - Session configuration
//! - [`error`] - Session error types
//! - [`store`] - The shared RefrigeratorStore handle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use fridge_session::{FileCache, RefrigeratorStore, SessionCache, SessionConfig};
//!
//! let config = SessionConfig::from_env();
//! let cache: Arc<dyn SessionCache> = Arc::new(FileCache::open(&config.cache_dir)?);
//! let store = RefrigeratorStore::open(&config, cache)?;
//!
//! store.set_refrigerators(fridges)?;
//! if store.set_selected_refrigerator(pick)? {
//!     // selection accepted
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod config;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use cache::{FileCache, MemoryCache, SessionCache};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use store::RefrigeratorStore;
