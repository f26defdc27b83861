//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

pub const ENV_API_BASE_URL: &str = "KRATHUB_API_BASE_URL";
pub const ENV_STORAGE_PATH: &str = "KRATHUB_STORAGE_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the user service
    pub api_base_url: String,
    /// Path to the local storage database
    pub storage_path: PathBuf,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: krathub_api::DEFAULT_BASE_URL.to_string(),
            storage_path: data_dir.join("storage.db"),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("krathub"))
            .unwrap_or_else(|| PathBuf::from(".krathub"))
    }

    /// Read a TOML config file, falling back to defaults when it does not
    /// exist, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CoreError::Config(e.to_string()))
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(path) = lookup(ENV_STORAGE_PATH).filter(|v| !v.trim().is_empty()) {
            self.storage_path = PathBuf::from(path);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/tmp/krathub"));
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.storage_path, PathBuf::from("/tmp/krathub/storage.db"));
    }

    #[test]
    fn test_data_dir_is_namespaced() {
        let dir = Config::data_dir();
        assert!(dir.ends_with("krathub") || dir == PathBuf::from(".krathub"));
        assert_eq!(Config::default().storage_path, dir.join("storage.db"));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(r#"api_base_url = "https://auth.example.com""#).unwrap();
        assert_eq!(config.api_base_url, "https://auth.example.com");
        assert_eq!(config.storage_path, Config::default().storage_path);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = Config::from_toml("api_base_url = [").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        // Env may override in CI, so only check the file didn't break loading
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("krathub.toml");
        std::fs::write(
            &path,
            "api_base_url = \"http://10.0.0.2:9000\"\nstorage_path = \"/var/lib/krathub/s.db\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.storage_path, PathBuf::from("/var/lib/krathub/s.db"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_BASE_URL, "https://staging.example.com"),
            (ENV_STORAGE_PATH, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::new(PathBuf::from("/data"));
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "https://staging.example.com");
        // Blank values are ignored
        assert_eq!(config.storage_path, PathBuf::from("/data/storage.db"));
    }
}
