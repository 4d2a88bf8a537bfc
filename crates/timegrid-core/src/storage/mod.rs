mod config;
mod store;
mod sync;

pub use config::{ConfigDelta, TimetableConfig};
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};
pub use sync::{PendingWrite, PrioritySync, SyncOutcome};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/timegrid[-dev]/` based on TIMEGRID_ENV.
///
/// Set TIMEGRID_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TIMEGRID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timegrid-dev")
    } else {
        base_dir.join("timegrid")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
