//! Session store trait.

use async_trait::async_trait;

use super::model::SessionRecord;
use crate::error::Result;

/// Holds at most one current user and persists it through the storage port.
///
/// Each mutation applies its durable write before the in-memory change
/// becomes visible, so the two never diverge.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the current session, if any.
    async fn current_user(&self) -> Option<SessionRecord>;

    /// Signs in against the designated credential pair.
    ///
    /// # Returns
    ///
    /// - `Ok(SessionRecord)`: credentials matched; the session is persisted
    /// - `Err(GlossaryError::InvalidCredentials)`: mismatch; prior state kept
    /// - `Err(_)`: the storage port failed
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionRecord>;

    /// Creates a session for a new user. There is no account registry, so
    /// only a storage failure can make this fail.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SessionRecord>;

    /// Clears the session. Signing out while signed out is not an error.
    async fn sign_out(&self) -> Result<()>;
}
