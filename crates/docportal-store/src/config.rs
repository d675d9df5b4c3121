//! Store configuration.

use std::path::PathBuf;

use docportal_core::defaults::{DEFAULT_DATA_DIR, RECENT_ITEMS_MAX};
use docportal_core::{Error, Result};
use tracing::warn;

use crate::storage::FileStorage;

/// Environment variable naming the file storage directory.
pub const DATA_DIR_ENV: &str = "DOCPORTAL_DATA_DIR";

/// Environment variable overriding the recently viewed cap.
pub const RECENT_MAX_ENV: &str = "DOCPORTAL_RECENT_MAX";

/// Where per-user state lives and how much history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory for [`FileStorage`].
    pub data_dir: PathBuf,
    /// Maximum number of recently viewed documents retained.
    pub recent_max: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            recent_max: RECENT_ITEMS_MAX,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with fallback to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. `from_env` delegates here so
    /// tests need not mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(DATA_DIR_ENV) {
            if val.trim().is_empty() {
                warn!(value = %val, "Empty DOCPORTAL_DATA_DIR, using default");
            } else {
                config.data_dir = PathBuf::from(val);
            }
        }

        if let Some(val) = lookup(RECENT_MAX_ENV) {
            match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.recent_max = n,
                _ => warn!(value = %val, "Invalid DOCPORTAL_RECENT_MAX, using default"),
            }
        }

        config
    }

    /// Reject configurations a store cannot be opened with.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(Error::Config("data_dir must not be empty".to_string()));
        }
        if self.recent_max == 0 {
            return Err(Error::Config("recent_max must be at least 1".to_string()));
        }
        Ok(())
    }

    /// File storage rooted at the configured data directory.
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}
