//! Session domain module.
//!
//! - `model`: `Session`, `SessionHandle`, `AuthUser` and login payloads
//! - `repository`: `SessionRepository`, the durable storage contract

mod model;
mod repository;

pub use model::{AuthResponse, AuthUser, LoginCredentials, Session, SessionHandle};
pub use repository::SessionRepository;
