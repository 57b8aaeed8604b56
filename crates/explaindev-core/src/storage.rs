//! Durable key/value storage port.
//!
//! Both stores persist through this trait. Values are opaque bytes; the
//! stores own the encoding.

use async_trait::async_trait;

use crate::error::Result;

/// Key holding the JSON-encoded session record.
pub const SESSION_KEY: &str = "explaindev_user";

/// Key holding the JSON-encoded term collection.
pub const TERMS_KEY: &str = "explaindev_terms";

/// String-keyed, byte-valued persistence shared by the stores.
///
/// Implementations report failures as [`GlossaryError::Storage`] so the
/// stores can surface them without knowing the backend.
///
/// [`GlossaryError::Storage`]: crate::error::GlossaryError::Storage
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the value stored under `key`.
    async fn save(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
