//! Directory-backed storage adapter.

use async_trait::async_trait;
use explaindev_core::error::{GlossaryError, Result};
use explaindev_core::storage::KeyValueStorage;
use std::path::{Path, PathBuf};

use super::atomic_file::{AtomicFile, AtomicFileError};

/// Durable key/value storage with one JSON file per key.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── explaindev_user.json
/// └── explaindev_terms.json
/// ```
///
/// File work runs on the blocking pool. Several processes sharing a
/// directory overwrite each other's snapshots (last write wins).
#[derive(Debug, Clone)]
pub struct DirStorage {
    base_dir: PathBuf,
}

impl DirStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are fixed identifiers; anything outside `[A-Za-z0-9_-]` is
    /// replaced so a key can never escape the base directory.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{}.json", file_stem))
    }

    async fn run_blocking<T, F>(&self, key: &str, op: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(AtomicFile) -> std::result::Result<T, AtomicFileError> + Send + 'static,
    {
        let file = AtomicFile::new(self.key_path(key));
        let key_owned = key.to_string();

        tokio::task::spawn_blocking(move || f(file))
            .await
            .map_err(|e| GlossaryError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| {
                GlossaryError::storage(format!("Failed to {} '{}': {}", op, key_owned, e))
            })
    }
}

#[async_trait]
impl KeyValueStorage for DirStorage {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let loaded = self.run_blocking(key, "read", |file| file.load()).await?;
        tracing::debug!(
            "[DirStorage] load '{}': {}",
            key,
            if loaded.is_some() { "hit" } else { "absent" }
        );
        Ok(loaded)
    }

    async fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let data = value.to_vec();
        let len = data.len();
        self.run_blocking(key, "write", move |file| file.save(&data))
            .await?;
        tracing::debug!("[DirStorage] saved '{}' ({} bytes)", key, len);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.run_blocking(key, "remove", |file| file.remove()).await?;
        tracing::debug!("[DirStorage] removed '{}'", key);
        Ok(())
    }
}
