//! Persisted preferences
//!
//! Display language and logged-in identity survive restarts. Cart contents
//! are never persisted.

use crate::error::OrderingResult;
use serde::{Deserialize, Serialize};
use shared::DisplayLanguage;
use shared::models::{UserId, UserRecord};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Logged-in user, as remembered between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
}

impl From<&UserRecord> for UserIdentity {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Option<DisplayLanguage>,
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// Key-value storage for [`Preferences`]
pub trait PreferenceStore: Send + Sync {
    /// Read stored preferences; unreadable data yields defaults
    fn load(&self) -> Preferences;

    fn save(&self, preferences: &Preferences) -> OrderingResult<()>;
}

/// JSON file store (`<data_dir>/preferences.json`)
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Preferences {
        if !self.path.exists() {
            return Preferences::default();
        }
        let parsed = std::fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(preferences) => preferences,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable preferences");
                Preferences::default()
            }
        }
    }

    fn save(&self, preferences: &Preferences) -> OrderingResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(preferences)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    inner: Mutex<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            inner: Mutex::new(preferences),
        }
    }

    /// Current stored value
    pub fn snapshot(&self) -> Preferences {
        self.load()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Preferences {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, preferences: &Preferences) -> OrderingResult<()> {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = preferences.clone();
        Ok(())
    }
}
