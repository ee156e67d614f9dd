//! # Session Configuration
//!
//! Stores session-layer configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FRIDGE_*`)
//! 2. Defaults (this file)

use std::path::PathBuf;

/// Session configuration.
///
/// ## Fields
/// Defaults are suitable for development; hosts typically override the cache
/// directory with a per-session path they own.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory used by the file-backed session cache.
    pub cache_dir: PathBuf,

    /// Cache key the refrigerator store snapshots under.
    pub store_key: String,
}

/// Default cache key; mirrors the store's name in the frontend.
pub const DEFAULT_STORE_KEY: &str = "refrigerator";

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cache_dir: std::env::temp_dir().join("fridge-session"),
            store_key: DEFAULT_STORE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FRIDGE_SESSION_DIR`: Override the session cache directory
    /// - `FRIDGE_STORE_KEY`: Override the snapshot cache key
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(dir) = std::env::var("FRIDGE_SESSION_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }

        if let Ok(key) = std::env::var("FRIDGE_STORE_KEY") {
            config.store_key = key;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_key() {
        let config = SessionConfig::default();
        assert_eq!(config.store_key, "refrigerator");
    }

    #[test]
    fn test_default_cache_dir_is_under_temp() {
        let config = SessionConfig::default();
        assert!(config.cache_dir.starts_with(std::env::temp_dir()));
    }
}
