//! Error types for the Curator client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message used when the remote service gives no usable error body.
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

/// A shared error type for every Curator crate.
///
/// Variants follow the client's error taxonomy: configuration problems,
/// authentication failures, user-facing validation, and remote/network
/// failures, plus the storage-level kinds the infrastructure layer needs.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CuratorError {
    /// Missing or invalid configuration (e.g. no API base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad credentials, or an expired/absent token
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// A user action that cannot proceed (nothing changed)
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP response from the remote service
    #[error("{message}")]
    Remote {
        status: Option<u16>,
        message: String,
    },

    /// Transport-level failure (connect, timeout, malformed response)
    #[error("Network error: {0}")]
    Network(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CuratorError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Remote error
    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for failures the user can retry by re-triggering the action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Network(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CuratorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CuratorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CuratorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CuratorError>`.
pub type Result<T> = std::result::Result<T, CuratorError>;
