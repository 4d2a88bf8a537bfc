//! Persistence backends for [`TimetableConfig`].

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::config::TimetableConfig;
use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::priority::{merge_priority, PriorityList};

/// Read/write contract for the stored configuration.
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration, or the defaults if nothing is stored.
    fn load(&self) -> Result<TimetableConfig>;

    /// Replace the stored configuration.
    fn save(&self, config: &TimetableConfig) -> Result<()>;

    /// Merge `list` into the stored priority list and return the result.
    ///
    /// Never drops ids already stored. Only writes when the merge adds
    /// something. Returns `None` without writing when priority ordering is
    /// disabled in the stored configuration.
    fn merge_priority(&self, list: &PriorityList) -> Result<Option<PriorityList>> {
        let mut config = self.load()?;
        let Some((merged, changed)) = merge_into(&mut config, list) else {
            return Ok(None);
        };
        if changed {
            self.save(&config)?;
        }
        Ok(Some(merged))
    }
}

/// Fold `list` into `config`'s priority list.
///
/// `None` if the stored list is null; the flag is never switched back on.
fn merge_into(config: &mut TimetableConfig, list: &PriorityList) -> Option<(PriorityList, bool)> {
    let stored = config.timetable_priority.as_ref()?;
    let merged = merge_priority(&PriorityList::new(stored.iter().cloned()), list);
    let changed = stored.as_slice() != merged.as_slice();
    if changed {
        config.timetable_priority = Some(merged.as_slice().to_vec());
    }
    Some((merged, changed))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// TOML file store, by default at `~/.config/timegrid/config.toml`.
pub struct FileConfigStore {
    path: PathBuf,
    // Serializes read-merge-write cycles within the process.
    write_lock: Mutex<()>,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store in the per-user data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(data_dir()?.join("config.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<TimetableConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TimetableConfig::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                }
                .into());
            }
        };
        let config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    fn write(&self, config: &TimetableConfig) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: self.path.clone(),
            message,
        };

        let content = toml::to_string_pretty(config).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }

        // Write beside the target and rename so readers never see a torn file.
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, content).map_err(|e| save_failed(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<TimetableConfig> {
        self.read()
    }

    fn save(&self, config: &TimetableConfig) -> Result<()> {
        let _guard = lock(&self.write_lock);
        self.write(config)
    }

    fn merge_priority(&self, list: &PriorityList) -> Result<Option<PriorityList>> {
        let _guard = lock(&self.write_lock);
        let mut config = self.read()?;
        let Some((merged, changed)) = merge_into(&mut config, list) else {
            return Ok(None);
        };
        if changed {
            self.write(&config)?;
        }
        Ok(Some(merged))
    }
}

/// In-process store, for embedding and tests.
#[derive(Default)]
pub struct MemoryConfigStore {
    config: Mutex<TimetableConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: TimetableConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<TimetableConfig> {
        Ok(lock(&self.config).clone())
    }

    fn save(&self, config: &TimetableConfig) -> Result<()> {
        *lock(&self.config) = config.clone();
        Ok(())
    }

    fn merge_priority(&self, list: &PriorityList) -> Result<Option<PriorityList>> {
        let mut config = lock(&self.config);
        Ok(merge_into(&mut config, list).map(|(merged, _)| merged))
    }
}
