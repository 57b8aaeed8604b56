//! Store wiring for the CLI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use explaindev_core::session::SessionStore;
use explaindev_core::storage::KeyValueStorage;
use explaindev_core::term::TermStore;
use explaindev_infrastructure::{ConfigService, DirStorage, SessionStoreImpl, TermStoreImpl};

/// Services shared by every command.
pub struct AppState {
    pub term_store: Arc<dyn TermStore>,
    pub session_store: Arc<dyn SessionStore>,
}

impl AppState {
    /// Loads configuration and constructs both stores over one storage
    /// directory. `data_dir` overrides the configured directory.
    pub async fn bootstrap(
        config_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let config = ConfigService::new(config_path)
            .load()
            .context("Failed to load configuration")?;

        let storage_dir = match data_dir {
            Some(dir) => dir,
            None => ConfigService::storage_dir(&config)
                .context("Failed to resolve storage directory")?,
        };
        let dir_storage = DirStorage::new(storage_dir);
        tracing::debug!("[Bootstrap] Using storage directory {:?}", dir_storage.base_dir());

        let storage: Arc<dyn KeyValueStorage> = Arc::new(dir_storage);

        let session_store = SessionStoreImpl::load(storage.clone(), &config)
            .await
            .context("Failed to load session")?;
        let term_store = TermStoreImpl::new(storage, &config);

        Ok(Self {
            term_store: Arc::new(term_store),
            session_store: Arc::new(session_store),
        })
    }
}
