//! Mocked session store.
//!
//! Authentication is a local simulation: sign-in accepts exactly one
//! configured credential pair and sign-up accepts anything.

use async_trait::async_trait;
use explaindev_core::config::{AuthSettings, GlossaryConfig, LatencySettings};
use explaindev_core::error::{GlossaryError, Result};
use explaindev_core::session::{SessionRecord, SessionStore};
use explaindev_core::storage::{KeyValueStorage, SESSION_KEY};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::dto::SessionCodec;

/// Session store persisted under [`SESSION_KEY`].
///
/// The current record is cached in memory and rehydrated from storage when
/// the store is created.
///
/// # Example
///
/// ```ignore
/// use explaindev_infrastructure::{InMemoryStorage, SessionStoreImpl};
///
/// let store = SessionStoreImpl::load(Arc::new(InMemoryStorage::new()), &config).await?;
/// let user = store.sign_in("demo@example.com", "password").await?;
/// ```
pub struct SessionStoreImpl {
    storage: Arc<dyn KeyValueStorage>,
    codec: SessionCodec,
    auth: AuthSettings,
    latency: LatencySettings,
    current: Mutex<Option<SessionRecord>>,
}

impl SessionStoreImpl {
    /// Creates the store and rehydrates any persisted session.
    ///
    /// A persisted record that cannot be decoded is discarded so the session
    /// starts empty. Removing it from storage is best-effort.
    pub async fn load(storage: Arc<dyn KeyValueStorage>, config: &GlossaryConfig) -> Result<Self> {
        let codec = SessionCodec::new();

        let current = match storage.load(SESSION_KEY).await? {
            Some(bytes) => match codec.decode(&bytes) {
                Ok(record) => {
                    tracing::debug!("[SessionStore] Rehydrated session for {}", record.email);
                    Some(record)
                }
                Err(e) => {
                    tracing::warn!("[SessionStore] Discarding unreadable session record: {}", e);
                    if let Err(e) = storage.remove(SESSION_KEY).await {
                        tracing::warn!("[SessionStore] Failed to remove session record: {}", e);
                    }
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            storage,
            codec,
            auth: config.auth.clone(),
            latency: config.latency.clone(),
            current: Mutex::new(current),
        })
    }

    /// Persists `record`, then makes it current.
    async fn establish(
        &self,
        current: &mut Option<SessionRecord>,
        record: SessionRecord,
    ) -> Result<SessionRecord> {
        let bytes = self.codec.encode(&record)?;
        self.storage.save(SESSION_KEY, &bytes).await?;
        *current = Some(record.clone());
        Ok(record)
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl SessionStore for SessionStoreImpl {
    async fn current_user(&self) -> Option<SessionRecord> {
        self.current.lock().await.clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionRecord> {
        let mut current = self.current.lock().await;
        simulate_latency(self.latency.sign_in()).await;

        if !self.auth.matches(email, password) {
            tracing::warn!("[SessionStore] Sign-in rejected for {}", email);
            return Err(GlossaryError::InvalidCredentials);
        }

        let record = SessionRecord::new(
            self.auth.uid.clone(),
            email,
            self.auth.display_name.clone(),
        );
        let record = self.establish(&mut current, record).await?;
        tracing::info!("[SessionStore] Signed in as {}", record.email);
        Ok(record)
    }

    async fn sign_up(&self, email: &str, _password: &str, name: &str) -> Result<SessionRecord> {
        let mut current = self.current.lock().await;
        simulate_latency(self.latency.sign_up()).await;

        let record = SessionRecord::new(Uuid::new_v4().to_string(), email, name);
        let record = self.establish(&mut current, record).await?;
        tracing::info!("[SessionStore] Signed up {} ({})", record.email, record.uid);
        Ok(record)
    }

    async fn sign_out(&self) -> Result<()> {
        let mut current = self.current.lock().await;
        simulate_latency(self.latency.sign_out()).await;

        self.storage.remove(SESSION_KEY).await?;
        if let Some(previous) = current.take() {
            tracing::info!("[SessionStore] Signed out {}", previous.email);
        }
        Ok(())
    }
}
