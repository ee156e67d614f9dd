//! # Session Error Types
//!
//! Error types for the session layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionError (this module) ← Adds context and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host application decides: surface, retry, or discard                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the deliberate asymmetry with the domain layer: a rejected selection
//! is NOT an error (it is the `false` arm of `set_selected_refrigerator`).
//! SessionError covers only the ambient failure modes the original host
//! environment could not express: cache I/O and snapshot encoding.

use thiserror::Error;

/// Session layer errors.
///
/// These errors wrap I/O and serialization failures from the session cache
/// and provide additional context for debugging.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Cache storage operation failed.
    ///
    /// ## When This Occurs
    /// - Session directory cannot be created
    /// - Snapshot file cannot be written or removed
    /// - File permissions issue, disk full
    #[error("Session cache I/O failed for key '{key}': {source}")]
    CacheIo {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// State snapshot could not be serialized.
    ///
    /// Should not occur for well-formed state; kept typed rather than
    /// panicking so the host can log and continue.
    #[error("Failed to serialize state snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The shared state lock was poisoned by a panicking holder.
    #[error("Session state lock poisoned")]
    PoisonedLock,
}

impl SessionError {
    /// Creates a CacheIo error for a given cache key.
    pub fn cache_io(key: impl Into<String>, source: std::io::Error) -> Self {
        SessionError::CacheIo {
            key: key.into(),
            source,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_io_message_includes_key() {
        let err = SessionError::cache_io(
            "refrigerator",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("refrigerator"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_poisoned_lock_message() {
        assert_eq!(
            SessionError::PoisonedLock.to_string(),
            "Session state lock poisoned"
        );
    }
}
