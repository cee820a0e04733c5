//! Wiring of the concrete services used by the binaries.

use crate::auth_service::{AuthService, LogoutOutcome};
use crate::review_usecase::ReviewUseCase;
use curator_core::api::StagingApi;
use curator_core::config::ClientConfig;
use curator_core::error::Result;
use curator_core::session::{SessionHandle, SessionRepository};
use curator_infrastructure::{ConfigService, CuratorPaths, TomlSessionRepository};
use curator_interaction::HttpStagingApi;
use std::sync::Arc;

/// The assembled client: configuration, session and use cases sharing one
/// [`SessionHandle`] and one API client.
pub struct CuratorApp {
    config: ClientConfig,
    auth: Arc<AuthService>,
    review: Arc<ReviewUseCase>,
}

impl CuratorApp {
    /// Loads `config.toml` (with environment overrides) and wires the services.
    pub fn bootstrap(paths: CuratorPaths) -> Result<Self> {
        let config = ConfigService::new(&paths).get_config()?;
        Ok(Self::with_config(paths, config))
    }

    pub fn with_config(paths: CuratorPaths, config: ClientConfig) -> Self {
        let session = SessionHandle::new();
        let api: Arc<dyn StagingApi> =
            Arc::new(HttpStagingApi::from_config(&config, session.clone()));
        let repository: Arc<dyn SessionRepository> = Arc::new(TomlSessionRepository::new(&paths));

        tracing::debug!(
            "[CuratorApp] Config dir {}, API {}",
            paths.config_dir().display(),
            config.api_url.as_deref().unwrap_or("<unset>")
        );

        Self::from_services(config, api, repository, session)
    }

    fn from_services(
        config: ClientConfig,
        api: Arc<dyn StagingApi>,
        repository: Arc<dyn SessionRepository>,
        session: SessionHandle,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(api.clone(), repository, session)),
            review: Arc::new(ReviewUseCase::new(api)),
            config,
        }
    }

    /// Signs out and drops the working set so the next reviewer starts from
    /// a fresh staging page.
    pub async fn sign_out(&self) -> Result<LogoutOutcome> {
        self.review.clear();
        self.auth.logout().await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    pub fn review(&self) -> &Arc<ReviewUseCase> {
        &self.review
    }
}
