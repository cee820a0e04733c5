//! Configuration service implementation.
//!
//! Loads `config.toml` from the config directory and applies environment
//! overrides. A missing file yields the defaults; the API base URL is not
//! validated here because its absence only matters at the first request.

use crate::paths::CuratorPaths;
use crate::storage::AtomicTomlFile;
use curator_core::config::{ClientConfig, LayoutPreference};
use curator_core::error::{CuratorError, Result};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment variable supplying the API base URL.
pub const API_URL_ENV: &str = "CURATOR_API_URL";
/// Environment variable overriding the REPL layout.
pub const LAYOUT_ENV: &str = "CURATOR_LAYOUT";

/// Configuration service that loads and caches the client configuration.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &CuratorPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration with process environment overrides applied.
    pub fn get_config(&self) -> Result<ClientConfig> {
        self.get_config_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::get_config`] with an explicit environment lookup.
    pub fn get_config_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = apply_env_overrides(self.load_file()?, lookup);

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    fn load_file(&self) -> Result<ClientConfig> {
        let file = AtomicTomlFile::<ClientConfig>::new(self.path.clone());
        let config = file.load().map_err(|e| {
            CuratorError::config(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        match config {
            Some(config) => {
                tracing::debug!("[ConfigService] Loaded {}", self.path.display());
                Ok(config)
            }
            None => Ok(ClientConfig::default()),
        }
    }
}

/// Environment wins over the file. Blank values are ignored.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.api_url = Some(url.trim().to_string());
    }

    if let Some(raw) = lookup(LAYOUT_ENV) {
        match raw.parse::<LayoutPreference>() {
            Ok(layout) => config.layout = layout,
            Err(_) => tracing::warn!("[ConfigService] Ignoring unknown {}={}", LAYOUT_ENV, raw),
        }
    }

    config
}
