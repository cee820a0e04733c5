//! Session repository trait.

use async_trait::async_trait;

use super::model::{AuthUser, Session};
use crate::error::Result;

/// Durable storage for the signed-in session.
///
/// Holds two keys, the credential token and the serialized identity. They
/// are written together on login and cleared together on logout.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: both keys are present
    /// - `Ok(None)`: nothing stored, or only one of the two keys
    /// - `Err(_)`: storage could not be read
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists token and identity, replacing anything stored before.
    async fn save(&self, token: &str, user: &AuthUser) -> Result<()>;

    /// Removes both keys. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}
