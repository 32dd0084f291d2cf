//! Application configuration.

use crate::consts::cli_consts::{DEFAULT_PAGE_LIMIT, dashboard};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Persistent dashboard settings, stored as JSON in the user's home directory.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// SOS endpoint; overrides `FLOOD_ENVIRONMENT` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Records requested per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
    /// Seconds between background refreshes in dashboard mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_secs: Option<u64>,
}

impl Config {
    /// Create Config pointing at the given endpoint.
    #[allow(unused)]
    pub fn new(api_url: String) -> Self {
        Config {
            api_url: Some(api_url),
            ..Default::default()
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Resolves the endpoint: explicit flag, then config file, then environment.
    pub fn resolve_environment(&self, cli_api_url: Option<&str>) -> Environment {
        match cli_api_url.or(self.api_url.as_deref()) {
            Some(url) => Environment::Custom {
                api_url: url.to_string(),
            },
            None => Environment::from_env(),
        }
    }

    /// Page size, never zero.
    pub fn resolve_page_limit(&self, cli_limit: Option<u32>) -> u32 {
        cli_limit
            .or(self.page_limit)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .max(1)
    }

    /// Refresh interval in seconds, clamped to the minimum the dashboard allows.
    pub fn resolve_refresh_secs(&self, cli_refresh: Option<u64>) -> u64 {
        cli_refresh
            .or(self.refresh_secs)
            .unwrap_or(dashboard::DEFAULT_REFRESH_SECS)
            .max(dashboard::MIN_REFRESH_SECS)
    }
}

/// Location of the config file: `~/.flood-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".flood-dashboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new("https://example.org/api/sos".to_string());
        config.page_limit = Some(50);
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // An empty object is a valid config with every setting unset.
    fn test_load_accepts_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is not an error.
        Config::clear(&path).unwrap();
    }

    #[test]
    // Command-line values win over the file, the file wins over built-in defaults.
    fn test_resolution_precedence() {
        let config = Config {
            api_url: Some("https://file.example/api".to_string()),
            page_limit: Some(25),
            refresh_secs: Some(1),
        };

        assert_eq!(
            config.resolve_environment(Some("https://flag.example/api")).api_url(),
            "https://flag.example/api"
        );
        assert_eq!(
            config.resolve_environment(None).api_url(),
            "https://file.example/api"
        );
        assert_eq!(config.resolve_page_limit(None), 25);
        assert_eq!(config.resolve_page_limit(Some(0)), 1);
        assert_eq!(
            config.resolve_refresh_secs(None),
            dashboard::MIN_REFRESH_SECS
        );
        assert_eq!(config.resolve_refresh_secs(Some(600)), 600);
    }
}
