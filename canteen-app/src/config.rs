//! Application configuration
//!
//! Defaults, then `<data_dir>/config.json`, then `CANTEEN_*` environment
//! variables. Command-line flags are applied last by the binary.

use crate::error::{OrderingError, OrderingResult};
use canteen_client::ClientConfig;
use serde::{Deserialize, Serialize};
use shared::DisplayLanguage;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_BASE_URL: &str = "CANTEEN_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CANTEEN_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "CANTEEN_DATA_DIR";
pub const ENV_LANG: &str = "CANTEEN_LANG";
pub const ENV_CACHE_TTL_SECS: &str = "CANTEEN_CACHE_TTL_SECS";

const CONFIG_FILE: &str = "config.json";
const PREFERENCES_FILE: &str = "preferences.json";

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Canteen API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Preferences, logs and config file live here
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Language used when no preference is stored
    #[serde(default)]
    pub default_language: DisplayLanguage,
    /// Per-canteen dish cache lifetime (None = whole session)
    #[serde(default)]
    pub catalog_cache_ttl_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            data_dir: default_data_dir(),
            default_language: DisplayLanguage::default(),
            catalog_cache_ttl_secs: None,
        }
    }
}

impl AppConfig {
    /// Load `<data_dir>/config.json`, or defaults when it does not exist
    pub fn load(data_dir: &Path) -> OrderingResult<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config: Self = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| OrderingError::Config(format!("{}: {e}", path.display())))?
        } else {
            Self::default()
        };
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Like [`AppConfig::load`], but writes the defaults out on first run
    /// so there is a file to edit.
    pub fn load_or_init(data_dir: &Path) -> OrderingResult<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let config = Self::load(data_dir)?;
        if !path.exists() {
            config.save()?;
            tracing::info!(path = %path.display(), "Wrote default config");
        }
        Ok(config)
    }

    pub fn save(&self) -> OrderingResult<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| OrderingError::Config(e.to_string()))?;
        std::fs::write(self.data_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Apply `CANTEEN_*` environment variables
    pub fn apply_env(self) -> OrderingResult<Self> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source
    pub fn apply_env_with(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> OrderingResult<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = var(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(dir) = var(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(lang) = var(ENV_LANG) {
            self.default_language = lang
                .parse()
                .map_err(|e| OrderingError::Config(format!("{ENV_LANG}: {e}")))?;
        }
        if let Some(ttl) = var(ENV_CACHE_TTL_SECS) {
            self.catalog_cache_ttl_secs = Some(parse_env(ENV_CACHE_TTL_SECS, &ttl)?);
        }
        Ok(self)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.catalog_cache_ttl_secs.map(Duration::from_secs)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

fn parse_env(name: &str, value: &str) -> OrderingResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| OrderingError::Config(format!("{name} must be a non-negative integer, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_language, DisplayLanguage::Zh);
        assert_eq!(config.data_dir, dir.path());
        assert!(config.cache_ttl().is_none());
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"base_url": "http://canteen.local:9000", "default_language": "en"}"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path())
            .unwrap()
            .apply_env_with(env(&[(ENV_TIMEOUT_SECS, "5"), (ENV_CACHE_TTL_SECS, "600")]))
            .unwrap();

        assert_eq!(config.base_url, "http://canteen.local:9000");
        assert_eq!(config.default_language, DisplayLanguage::En);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"default_language": "en"}"#).unwrap();
        let config = AppConfig::load(dir.path())
            .unwrap()
            .apply_env_with(env(&[(ENV_LANG, "zh"), (ENV_BASE_URL, "http://x:1")]))
            .unwrap();
        assert_eq!(config.default_language, DisplayLanguage::Zh);
        assert_eq!(config.base_url, "http://x:1");
    }

    #[test]
    fn test_bad_env_value_is_config_error() {
        let result = AppConfig::default().apply_env_with(env(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(OrderingError::Config(_))));

        let result = AppConfig::default().apply_env_with(env(&[(ENV_LANG, "fr")]));
        assert!(matches!(result, Err(OrderingError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{not json").unwrap();
        assert!(matches!(AppConfig::load(dir.path()), Err(OrderingError::Config(_))));
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::load(dir.path()).unwrap();
        config.catalog_cache_ttl_secs = Some(60);
        config.save().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let config = AppConfig::load_or_init(&data_dir).unwrap();
        assert!(data_dir.join("config.json").exists());
        assert_eq!(AppConfig::load(&data_dir).unwrap(), config);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_secs": 9}"#).unwrap();

        let config = AppConfig::load_or_init(dir.path()).unwrap();
        assert_eq!(config.timeout_secs, 9);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"timeout_secs": 9}"#);
    }

    #[test]
    fn test_client_config() {
        let config = AppConfig {
            timeout_secs: 7,
            ..AppConfig::default()
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
        assert_eq!(client.timeout, 7);
    }
}
