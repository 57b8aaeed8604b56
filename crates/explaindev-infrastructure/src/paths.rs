//! Unified path management for explaindev files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/explaindev/         # Config directory
//! └── config.toml               # Store configuration
//!
//! ~/.local/share/explaindev/    # Data directory (DirStorage base)
//! ├── explaindev_user.json
//! └── explaindev_terms.json
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "explaindev";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct ExplainDevPaths;

impl ExplainDevPaths {
    /// Returns the explaindev configuration directory (e.g. `~/.config/explaindev/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default storage directory (e.g. `~/.local/share/explaindev/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        if let Ok(config_file) = ExplainDevPaths::config_file() {
            assert!(config_file.ends_with("explaindev/config.toml"));
        }
    }

    #[test]
    fn test_data_dir() {
        if let Ok(data_dir) = ExplainDevPaths::data_dir() {
            assert!(data_dir.ends_with(APP_DIR));
        }
    }
}
