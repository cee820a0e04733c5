//! Unified path management for Curator's configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/curator/           # Config directory (or $CURATOR_CONFIG_DIR)
//! ├── config.toml              # Client configuration
//! ├── session.toml             # Persisted token + identity (mode 600)
//! └── logs/                    # Review REPL logs
//!     └── curator-review.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CURATOR_CONFIG_DIR";

const APP_DIR_NAME: &str = "curator";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Neither a config nor a home directory could be determined.
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Resolves every file Curator reads or writes.
///
/// `CuratorPaths::new(Some(dir))` roots everything at `dir` (tests use a
/// temporary directory); `CuratorPaths::from_env()` honours
/// `CURATOR_CONFIG_DIR` and otherwise uses the platform config directory.
#[derive(Debug, Clone)]
pub struct CuratorPaths {
    config_dir: PathBuf,
}

impl CuratorPaths {
    /// Creates paths rooted at `base`, or at the platform config dir when `None`.
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        let config_dir = match base {
            Some(dir) => dir.to_path_buf(),
            None => Self::default_config_dir()?,
        };
        Ok(Self { config_dir })
    }

    /// Creates paths honouring `CURATOR_CONFIG_DIR`.
    pub fn from_env() -> Result<Self, PathError> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(Some(Path::new(&dir))),
            _ => Self::new(None),
        }
    }

    fn default_config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// `config.toml`
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// `session.toml`, the durable session store.
    ///
    /// # Security Note
    ///
    /// Holds a bearer token; written with mode 600 on Unix.
    pub fn session_file(&self) -> PathBuf {
        self.config_dir.join("session.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_base() {
        let base = Path::new("/tmp/curator-test");
        let paths = CuratorPaths::new(Some(base)).unwrap();

        assert_eq!(paths.config_dir(), base);
        assert!(paths.config_file().ends_with("config.toml"));
        assert!(paths.session_file().starts_with(base));
        assert!(paths.logs_dir().ends_with("logs"));
    }

    #[test]
    fn test_default_config_dir() {
        let paths = CuratorPaths::new(None).unwrap();
        assert!(paths.config_dir().ends_with("curator"));
    }
}
