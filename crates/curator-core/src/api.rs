//! Remote staging API trait.
//!
//! Defines the operations the client needs from the admin API, decoupling
//! the use cases from the HTTP transport.

use async_trait::async_trait;

use crate::decision::BatchDecision;
use crate::error::Result;
use crate::photo::StagingPage;
use crate::session::{AuthResponse, AuthUser, LoginCredentials};

/// Operations offered by the remote admin API.
///
/// Implementations attach the current bearer token themselves and map
/// non-success responses to [`crate::CuratorError`].
#[async_trait]
pub trait StagingApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse>;

    /// `POST /logout`: invalidates the remote session.
    async fn logout(&self) -> Result<()>;

    /// `GET /user`
    async fn fetch_current_user(&self) -> Result<AuthUser>;

    /// `GET /admin/photos/staging`
    async fn fetch_staging(&self) -> Result<StagingPage>;

    /// `POST /admin/photos/staging/batch`: processed by the server as one unit.
    async fn submit_batch(&self, decisions: &[BatchDecision]) -> Result<()>;
}
