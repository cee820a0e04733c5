//! TOML-backed durable session storage.
//!
//! Keeps the two session keys in `session.toml`:
//!
//! ```toml
//! auth_token = "1|abcdef..."
//! auth_user = '{"id":1,"name":"Rin","email":"rin@example.com"}'
//! saved_at = "2026-10-18T09:12:44+00:00"
//! ```

use crate::paths::CuratorPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use curator_core::error::{CuratorError, Result};
use curator_core::session::{AuthUser, Session, SessionRepository};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// On-disk layout of `session.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    /// Identity serialized as a JSON object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<String>,
}

/// [`SessionRepository`] storing the session in a private TOML file.
///
/// File access runs on the blocking pool.
#[derive(Clone)]
pub struct TomlSessionRepository {
    file: Arc<AtomicTomlFile<SessionDocument>>,
}

impl TomlSessionRepository {
    /// Uses `session.toml` under the resolved config directory.
    pub fn new(paths: &CuratorPaths) -> Self {
        Self::with_path(paths.session_file())
    }

    /// Uses an explicit file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path).private()),
        }
    }

    async fn blocking<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&AtomicTomlFile<SessionDocument>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| CuratorError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        let document = match self.blocking(|file| Ok(file.load()?)).await {
            Ok(document) => document,
            Err(e @ CuratorError::Serialization { .. }) => {
                tracing::warn!(
                    "[TomlSessionRepository] Ignoring session file that failed to parse: {}",
                    e
                );
                None
            }
            Err(e) => return Err(e),
        };

        let Some(SessionDocument {
            auth_token: Some(token),
            auth_user: Some(user_json),
            ..
        }) = document
        else {
            return Ok(None);
        };

        match serde_json::from_str::<AuthUser>(&user_json) {
            Ok(user) => Ok(Some(Session::signed_in(token, user))),
            Err(e) => {
                tracing::warn!(
                    "[TomlSessionRepository] Ignoring stored identity that failed to parse: {}",
                    e
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, token: &str, user: &AuthUser) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        let document = SessionDocument {
            auth_token: Some(token.to_string()),
            auth_user: Some(user_json),
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
        };

        self.blocking(move |file| Ok(file.replace(&document)?)).await?;

        tracing::debug!("[TomlSessionRepository] Session saved for user {}", user.id);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        // Overwrite without parsing so a corrupt file cannot keep the token.
        self.blocking(|file| {
            if !file.path().exists() {
                return Ok(());
            }
            Ok(file.replace(&SessionDocument::default())?)
        })
        .await?;

        tracing::debug!("[TomlSessionRepository] Session cleared");
        Ok(())
    }
}
