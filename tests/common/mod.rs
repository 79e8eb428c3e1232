//! Common Test Utilities
//!
//! In-memory repositories behind the real services, and a `TestApp` that
//! drives the router without binding a socket.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use chrono::Utc;
use fake::{faker::internet::en::SafeEmail, Fake};
use serde_json::Value;
use tower::ServiceExt;

use studybuddy_backend::application::services::{
    JwtTokenIssuer, SubjectServiceImpl, UserServiceImpl,
};
use studybuddy_backend::config::JwtSettings;
use studybuddy_backend::domain::{
    NewUser, Question, Subject, SubjectRepository, User, UserRepository,
};
use studybuddy_backend::presentation::http::routes::create_router;
use studybuddy_backend::shared::error::AppError;
use studybuddy_backend::startup::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-that-is-long-enough";

#[derive(Default)]
struct StoreInner {
    users: Vec<User>,
    subjects: Vec<Subject>,
    enrollments: Vec<(i64, i64)>,
    next_id: i64,
}

/// In-memory stand-in for PostgreSQL implementing both repositories.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn find_id_by_email(&self, email: &str) -> Option<i64> {
        let inner = self.inner.lock().unwrap();
        inner.users.iter().find(|u| u.email == email).map(|u| u.id)
    }

    /// Add a subject with one question per listed author.
    pub fn add_subject(&self, name: &str, authors: &[i64]) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let subject_id = inner.next_id;

        let mut questions = Vec::new();
        for tutor_id in authors {
            inner.next_id += 1;
            questions.push(Question {
                id: inner.next_id,
                subject_id,
                tutor_id: *tutor_id,
                content: format!("A question about {}", name),
                tutor_name: None,
            });
        }

        inner.subjects.push(Subject {
            id: subject_id,
            name: name.to_string(),
            questions,
        });
        subject_id
    }

    pub fn enroll(&self, user_id: i64, subject_id: i64) {
        self.inner
            .lock()
            .unwrap()
            .enrollments
            .push((user_id, subject_id));
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> Result<User, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::EmailExists);
        }

        inner.next_id += 1;
        let created = User {
            id: inner.next_id,
            email: user.email.clone(),
            password_hash: password_hash.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.clone(),
            subjects: Vec::new(),
            created_at: Utc::now(),
        };
        inner.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_role(&self, role: &str) -> Result<Vec<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .iter()
            .filter(|u| u.role.eq_ignore_ascii_case(role))
            .cloned()
            .collect())
    }

    async fn subjects_for_user(&self, user_id: i64) -> Result<Vec<Subject>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .subjects
            .iter()
            .filter(|s| inner.enrollments.contains(&(user_id, s.id)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SubjectRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Subject>, AppError> {
        Ok(self.inner.lock().unwrap().subjects.clone())
    }
}

/// Store whose every call fails with a detailed internal error.
pub struct BrokenStore;

pub const BROKEN_STORE_DETAIL: &str = "could not connect to server at 10.1.2.3:5432";

#[async_trait]
impl UserRepository for BrokenStore {
    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }

    async fn email_exists(&self, _email: &str) -> Result<bool, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }

    async fn create(&self, _user: &NewUser, _hash: &str) -> Result<User, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }

    async fn find_by_role(&self, _role: &str) -> Result<Vec<User>, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }

    async fn subjects_for_user(&self, _user_id: i64) -> Result<Vec<Subject>, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }
}

#[async_trait]
impl SubjectRepository for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Subject>, AppError> {
        Err(AppError::Internal(BROKEN_STORE_DETAIL.into()))
    }
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_JWT_SECRET.into(),
        access_token_expiry_minutes: 60,
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub tokens: JwtTokenIssuer,
}

impl TestApp {
    /// Real services over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let tokens = JwtTokenIssuer::new(jwt_settings());
        let state = AppState::new(
            Arc::new(UserServiceImpl::new(store.clone())),
            Arc::new(SubjectServiceImpl::new(store.clone())),
            Arc::new(tokens.clone()),
        );

        Self {
            router: create_router(state),
            store,
            tokens,
        }
    }

    /// Real services over a store that always fails
    pub fn broken() -> Router {
        let store = Arc::new(BrokenStore);
        let state = AppState::new(
            Arc::new(UserServiceImpl::new(store.clone())),
            Arc::new(SubjectServiceImpl::new(store)),
            Arc::new(JwtTokenIssuer::new(jwt_settings())),
        );
        create_router(state)
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> (u16, Value) {
        send(&self.router, "GET", uri, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> (u16, Value) {
        send(&self.router, "POST", uri, Some(body.to_string())).await
    }

    /// Register through the API and return the new user's id
    pub async fn register(&self, email: &str, password: &str, role: &str) -> i64 {
        let (status, body) = self
            .post_json(
                "/app/user/register",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "firstName": "Test",
                    "lastName": role,
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, 200, "registration failed: {}", body);
        self.store
            .find_id_by_email(email)
            .expect("registered user is stored")
    }
}

/// Send a request and decode the JSON body
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<String>) -> (u16, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("Content-Type", "application/json");
    }
    let request = request
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Generate a unique test email
pub fn unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", uuid::Uuid::new_v4().simple(), email)
}
