//! Persisted preferences: a string key/value store plus typed accessors for the theme and
//! goal entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::theme::Theme;
use crate::foundation::error::{LifecalError, LifecalResult};
use crate::progress::goal::Goal;

pub const THEME_KEY: &str = "life-calendar-theme";
pub const GOAL_KEY: &str = "life-calendar-goal";

/// File name used by [`JsonFileStore::in_dir`].
pub const STATE_FILE: &str = "preferences.json";

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> LifecalResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> LifecalResult<()>;
    fn remove(&mut self, key: &str) -> LifecalResult<()>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LifecalResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LifecalResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LifecalResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object on disk, read on every access and rewritten on every mutation.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`STATE_FILE`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> LifecalResult<BTreeMap<String, String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(LifecalError::storage(format!(
                    "read '{}': {e}",
                    self.path.display()
                )));
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Rewritten whole on the next update.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable preferences file"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> LifecalResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state dir '{}'", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| LifecalError::serde(e.to_string()))?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write '{}'", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> LifecalResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> LifecalResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> LifecalResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Typed view over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Saved theme; missing or unrecognised values fall back to the default.
    pub fn load_theme(&self) -> LifecalResult<Theme> {
        let Some(raw) = self.store.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };
        Ok(raw.parse().unwrap_or_else(|e| {
            tracing::warn!(value = %raw, error = %e, "ignoring saved theme");
            Theme::default()
        }))
    }

    pub fn save_theme(&mut self, theme: Theme) -> LifecalResult<()> {
        self.store.set(THEME_KEY, theme.id())
    }

    /// Saved goal; an unreadable entry is treated as no goal.
    pub fn load_goal(&self) -> LifecalResult<Option<Goal>> {
        let Some(raw) = self.store.get(GOAL_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(goal) => Ok(Some(goal)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring saved goal");
                Ok(None)
            }
        }
    }

    /// Replace any saved goal.
    pub fn save_goal(&mut self, goal: &Goal) -> LifecalResult<()> {
        let json = serde_json::to_string(goal).map_err(|e| LifecalError::serde(e.to_string()))?;
        self.store.set(GOAL_KEY, &json)
    }

    pub fn clear_goal(&mut self) -> LifecalResult<()> {
        self.store.remove(GOAL_KEY)
    }
}

#[cfg(test)]
#[path = "../tests/unit/store.rs"]
mod tests;
