//! Configuration service implementation.
//!
//! Loads [`GlossaryConfig`] from a TOML file (by default
//! `~/.config/explaindev/config.toml`). A missing file yields the defaults.

use explaindev_core::config::GlossaryConfig;
use explaindev_core::error::{GlossaryError, Result};
use std::path::{Path, PathBuf};

use crate::paths::ExplainDevPaths;

/// Loads the store configuration and resolves the storage directory.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a ConfigService reading `path`, or the default config file
    /// when `path` is `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => {
                ExplainDevPaths::config_file().map_err(|e| GlossaryError::config(e.to_string()))
            }
        }
    }

    /// Reads and parses the configuration.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(&self) -> Result<GlossaryConfig> {
        let path = self.config_path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<GlossaryConfig> {
        if !path.exists() {
            tracing::debug!("[ConfigService] No config at {:?}, using defaults", path);
            return Ok(GlossaryConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GlossaryError::io(format!("Failed to read config {:?}: {}", path, e)))?;

        let config: GlossaryConfig = toml::from_str(&content)
            .map_err(|e| GlossaryError::config(format!("Invalid config {:?}: {}", path, e)))?;

        tracing::debug!("[ConfigService] Loaded config from {:?}", path);
        Ok(config)
    }

    /// Directory the durable storage should use: the configured one, else
    /// the platform data directory.
    pub fn storage_dir(config: &GlossaryConfig) -> Result<PathBuf> {
        match &config.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => ExplainDevPaths::data_dir().map_err(|e| GlossaryError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path().join("config.toml")));

        assert_eq!(service.load().unwrap(), GlossaryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [storage]
            dir = "/var/lib/explaindev"

            [auth]
            email = "admin@example.com"
            password = "secret"
            "#,
        )
        .unwrap();

        let config = ConfigService::new(Some(path)).load().unwrap();

        assert!(config.auth.matches("admin@example.com", "secret"));
        assert_eq!(config.auth.display_name, "Demo User");
        assert_eq!(
            ConfigService::storage_dir(&config).unwrap(),
            PathBuf::from("/var/lib/explaindev")
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[latency\nsign_in_ms = ").unwrap();

        let err = ConfigService::new(Some(path)).load().unwrap_err();
        assert!(matches!(err, GlossaryError::Config(_)));
    }
}
