//! Infrastructure layer for Curator: paths, file storage, configuration
//! loading and logging setup.

pub mod config_service;
pub mod logging;
pub mod paths;
pub mod session_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::CuratorPaths;
pub use crate::session_repository::TomlSessionRepository;
