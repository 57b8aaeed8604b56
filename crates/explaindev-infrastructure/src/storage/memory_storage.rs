//! In-memory storage adapter.

use async_trait::async_trait;
use explaindev_core::error::{GlossaryError, Result};
use explaindev_core::storage::KeyValueStorage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Process-local key/value storage.
///
/// Used as the fake in tests and for ephemeral runs. Writes can be made to
/// fail with [`InMemoryStorage::set_fail_writes`] to exercise the stores'
/// storage-error path.
#[derive(Default)]
pub struct InMemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `entries`.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<u8>)>,
        K: Into<String>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `save`/`remove` fail (simulates a full quota).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw copy of the value under `key`.
    pub async fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().await.get(key).cloned()
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GlossaryError::storage(format!(
                "Quota exceeded while writing '{}'",
                key
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        self.check_writable(key)?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
