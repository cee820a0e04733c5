//! Hand-written mocks shared by the use case tests.

use async_trait::async_trait;
use curator_core::api::StagingApi;
use curator_core::decision::BatchDecision;
use curator_core::error::{CuratorError, Result};
use curator_core::photo::{StagedPhoto, StagingPage};
use curator_core::session::{AuthResponse, AuthUser, LoginCredentials, Session, SessionRepository};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn photo(ulid: &str) -> StagedPhoto {
    StagedPhoto {
        ulid: ulid.to_string(),
        path: format!("staging/{}.jpg", ulid),
        filename: format!("{}.jpg", ulid),
        url: format!("https://cdn.example.com/staging/{}.jpg", ulid),
        size: 1_572_864,
    }
}

pub fn page(ulids: &[&str]) -> StagingPage {
    StagingPage {
        photos: ulids.iter().map(|u| photo(u)).collect(),
        total_remaining: ulids.len() as u64,
    }
}

pub fn user() -> AuthUser {
    AuthUser {
        id: 7,
        name: "Reviewer".to_string(),
        email: "reviewer@example.com".to_string(),
    }
}

#[derive(Default)]
pub struct MockStagingApi {
    pub pages: Mutex<VecDeque<Result<StagingPage>>>,
    pub submitted: Mutex<Vec<Vec<BatchDecision>>>,
    pub submit_error: Mutex<Option<CuratorError>>,
    pub submit_gate: Option<Arc<Notify>>,
    pub login_result: Mutex<Option<Result<AuthResponse>>>,
    pub logout_error: Mutex<Option<CuratorError>>,
    pub current_user: Mutex<Option<AuthUser>>,
    pub logout_calls: Mutex<usize>,
}

impl MockStagingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: Vec<Result<StagingPage>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<Vec<BatchDecision>> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StagingApi for MockStagingApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<AuthResponse> {
        self.login_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(CuratorError::authentication("Invalid credentials")))
    }

    async fn logout(&self) -> Result<()> {
        *self.logout_calls.lock().unwrap() += 1;
        match self.logout_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn fetch_current_user(&self) -> Result<AuthUser> {
        self.current_user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CuratorError::authentication("Unauthenticated."))
    }

    async fn fetch_staging(&self) -> Result<StagingPage> {
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(StagingPage::default()))
    }

    async fn submit_batch(&self, decisions: &[BatchDecision]) -> Result<()> {
        if let Some(gate) = &self.submit_gate {
            gate.notified().await;
        }
        if let Some(err) = self.submit_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.submitted.lock().unwrap().push(decisions.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockSessionRepository {
    pub stored: Mutex<Option<Session>>,
    pub clear_calls: Mutex<usize>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            stored: Mutex::new(Some(session)),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<Session> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, token: &str, user: &AuthUser) -> Result<()> {
        *self.stored.lock().unwrap() = Some(Session::signed_in(token, user.clone()));
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.clear_calls.lock().unwrap() += 1;
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}
