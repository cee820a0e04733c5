//! Application layer for Curator.
//!
//! Use cases that coordinate the decision store, the session and the remote
//! staging API.

pub mod auth_service;
pub mod bootstrap;
pub mod review_usecase;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::{AuthService, LogoutOutcome};
pub use bootstrap::CuratorApp;
pub use review_usecase::{EMPTY_SUBMISSION_MESSAGE, ReviewUseCase, SubmitOutcome, SubmitReport};
