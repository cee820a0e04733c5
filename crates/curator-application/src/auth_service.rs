//! Authentication use case.
//!
//! `AuthService` keeps three things in step: the remote session, the durable
//! session file and the in-memory [`SessionHandle`] the API client reads its
//! bearer token from.

use curator_core::api::StagingApi;
use curator_core::error::{CuratorError, Result};
use curator_core::session::{AuthUser, LoginCredentials, Session, SessionHandle, SessionRepository};
use std::sync::Arc;

/// How a logout ended. Local state is cleared in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    /// The server invalidated the token.
    Invalidated,
    /// The remote call failed; only local state was cleared.
    LocalOnly { reason: String },
    /// There was no token to invalidate; stored state was cleared anyway.
    NotSignedIn,
}

pub struct AuthService {
    api: Arc<dyn StagingApi>,
    repository: Arc<dyn SessionRepository>,
    session: SessionHandle,
}

impl AuthService {
    pub fn new(
        api: Arc<dyn StagingApi>,
        repository: Arc<dyn SessionRepository>,
        session: SessionHandle,
    ) -> Self {
        Self {
            api,
            repository,
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Restores the session from durable storage.
    ///
    /// Call once at startup before any protected view is shown. Returns
    /// whether the restored session is authenticated.
    pub async fn hydrate(&self) -> Result<bool> {
        match self.repository.load().await? {
            Some(session) => {
                tracing::info!(
                    "[AuthService] Restored session for {}",
                    session.user.as_ref().map(|u| u.email.as_str()).unwrap_or("unknown user")
                );
                self.session.replace(session);
            }
            None => {
                tracing::debug!("[AuthService] No stored session");
                self.session.clear();
            }
        }
        Ok(self.session.is_authenticated())
    }

    /// Signs in and persists the token and identity.
    ///
    /// A rejected login surfaces as an authentication error; the current
    /// session is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CuratorError::validation("Email and password are required"));
        }

        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&credentials).await.map_err(|e| match e {
            CuratorError::Remote {
                status: Some(status),
                message,
            } if (400..500).contains(&status) => CuratorError::Authentication(message),
            other => other,
        })?;

        self.repository.save(&response.token, &response.user).await?;
        self.session
            .replace(Session::signed_in(response.token, response.user.clone()));

        tracing::info!("[AuthService] Signed in as {}", response.user.email);
        Ok(response.user)
    }

    /// Invalidates the remote session, then clears local state regardless of
    /// the remote result.
    ///
    /// Only a failure to clear durable storage is returned as an error; the
    /// in-memory session is cleared even then.
    pub async fn logout(&self) -> Result<LogoutOutcome> {
        if !self.session.is_authenticated() {
            self.session.clear();
            self.repository.clear().await?;
            tracing::debug!("[AuthService] Logout without a session, stored state cleared");
            return Ok(LogoutOutcome::NotSignedIn);
        }

        let outcome = match self.api.logout().await {
            Ok(()) => LogoutOutcome::Invalidated,
            Err(e) => {
                tracing::warn!("[AuthService] Remote logout failed, clearing local session: {}", e);
                LogoutOutcome::LocalOnly {
                    reason: e.to_string(),
                }
            }
        };

        self.session.clear();
        self.repository.clear().await?;

        tracing::info!("[AuthService] Signed out");
        Ok(outcome)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.user()
    }

    /// The signed-in user, or an authentication error when signed out.
    pub fn require_authenticated(&self) -> Result<AuthUser> {
        let session = self.session.snapshot();
        match (session.token, session.user) {
            (Some(_), Some(user)) => Ok(user),
            _ => Err(CuratorError::authentication("Not signed in")),
        }
    }

    /// Re-reads the identity from the server and stores it.
    pub async fn refresh_user(&self) -> Result<AuthUser> {
        let token = self
            .session
            .token()
            .ok_or_else(|| CuratorError::authentication("Not signed in"))?;

        let user = self.api.fetch_current_user().await?;
        self.repository.save(&token, &user).await?;
        self.session.set_user(user.clone());

        tracing::debug!("[AuthService] Refreshed identity for {}", user.email);
        Ok(user)
    }
}
