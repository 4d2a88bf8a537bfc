//! Timetable configuration.
//!
//! Two settings drive the layout:
//! - `timetableOverlap`: split overlapping slots into columns
//! - `timetablePriority`: course order for column ties; `null` disables
//!   priority ordering, an empty list enables it
//!
//! The key names match the configuration object shared with the rest of
//! the application, both in TOML on disk and in JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::priority::{PriorityFlags, PriorityList};
use crate::schedule::CourseId;

/// Configuration values consumed by the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableConfig {
    #[serde(default = "default_true")]
    pub timetable_overlap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timetable_priority: Option<Vec<CourseId>>,
}

fn default_true() -> bool {
    true
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            timetable_overlap: true,
            timetable_priority: Some(Vec::new()),
        }
    }
}

/// Update produced by a layout pass for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigDelta {
    TimetablePriority(PriorityList),
}

impl TimetableConfig {
    pub fn priority_enabled(&self) -> bool {
        self.timetable_priority.is_some()
    }

    pub fn flags(&self) -> PriorityFlags {
        PriorityFlags {
            overlap_enabled: self.timetable_overlap,
            priority_enabled: self.priority_enabled(),
        }
    }

    /// Current priority list; empty when priority ordering is disabled.
    pub fn priority_list(&self) -> PriorityList {
        PriorityList::new(self.timetable_priority.iter().flatten().cloned())
    }

    /// Fold a delta into the in-memory configuration.
    pub fn apply(&mut self, delta: &ConfigDelta) {
        match delta {
            ConfigDelta::TimetablePriority(list) => {
                self.timetable_priority = Some(list.as_slice().to_vec());
            }
        }
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                // Optional keys are absent from the serialized form when unset.
                let existing = obj.get(part).cloned().unwrap_or(serde_json::Value::Null);
                if existing.is_null() && !TimetableConfig::is_optional_key(part) {
                    return Err(unknown());
                }

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                    _ => serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?,
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn is_optional_key(key: &str) -> bool {
        key == "timetablePriority"
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::get_json_value_by_path(&json, key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None if Self::is_optional_key(key) => Some("null".to_string()),
            None => None,
        }
    }

    /// Set a config value by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
