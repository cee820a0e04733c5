//! Domain layer for Curator.
//!
//! Holds the staged-photo and decision models, the per-page
//! [`DecisionStore`](decision::DecisionStore), the session model, and the
//! traits the outer layers implement (`StagingApi`, `SessionRepository`).
//! Nothing in this crate performs I/O.

pub mod api;
pub mod config;
pub mod decision;
pub mod error;
pub mod photo;
pub mod session;

// Re-export common error type
pub use error::{CuratorError, Result};
