//! User Service
//!
//! Credential checks, registration and user lookups backing the user endpoints.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserRepository, TUTOR_ROLE};
use crate::shared::error::AppError;

/// User service trait for dependency injection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user by email and check the password.
    ///
    /// Returns `Ok(None)` for an unknown email or a wrong password; the two
    /// cases are deliberately indistinguishable to callers.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, UserError>;

    /// Display name of the tutor with the given id, empty if unknown.
    async fn find_tutor_name_by_id(&self, tutor_id: i64) -> Result<String, UserError>;

    /// Check if an email address is already registered.
    async fn check_exist_by_email(&self, email: &str) -> Result<bool, UserError>;

    /// Store a new user. `Ok(false)` means the store rejected it.
    async fn register(&self, user: &NewUser) -> Result<bool, UserError>;

    /// All users with the tutor role.
    async fn find_tutors(&self) -> Result<Vec<User>, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    /// Create a new UserServiceImpl
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Hash a password using Argon2id
    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, UserError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| UserError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, UserError> {
        let Some(mut user) = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
        else {
            return Ok(None);
        };

        if !self.verify_password(password, &user.password_hash)? {
            return Ok(None);
        }

        user.subjects = self
            .user_repo
            .subjects_for_user(user.id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(Some(user))
    }

    async fn find_tutor_name_by_id(&self, tutor_id: i64) -> Result<String, UserError> {
        let tutor = self
            .user_repo
            .find_by_id(tutor_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(tutor.map(|t| t.full_name()).unwrap_or_default())
    }

    async fn check_exist_by_email(&self, email: &str) -> Result<bool, UserError> {
        self.user_repo
            .email_exists(email)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))
    }

    async fn register(&self, user: &NewUser) -> Result<bool, UserError> {
        let password_hash = self.hash_password(&user.password)?;

        match self.user_repo.create(user, &password_hash).await {
            Ok(created) => {
                tracing::debug!(user_id = created.id, "User stored");
                Ok(true)
            }
            // Lost a race against a concurrent registration of the same email
            Err(AppError::EmailExists) => {
                tracing::warn!(email = %user.email, "Insert rejected by unique constraint");
                Ok(false)
            }
            Err(e) => Err(UserError::Internal(e.to_string())),
        }
    }

    async fn find_tutors(&self) -> Result<Vec<User>, UserError> {
        self.user_repo
            .find_by_role(TUTOR_ROLE)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))
    }
}
