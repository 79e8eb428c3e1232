//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::subject::Subject;
use crate::shared::error::AppError;

/// Role string that unlocks the full subject catalog at login.
pub const TUTOR_ROLE: &str = "tutor";

/// Represents a StudyBuddy account, either a student or a tutor.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - first_name: VARCHAR(100) NOT NULL
/// - last_name: VARCHAR(100) NOT NULL
/// - role: VARCHAR(32) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `subjects` is not a column; it is filled from `user_subjects` (students)
/// or from the whole catalog (tutors, at login).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    /// Free-form role string, "tutor" or anything else
    pub role: String,

    #[serde(default)]
    pub subjects: Vec<Subject>,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Tutor check; the role match ignores case.
    pub fn is_tutor(&self) -> bool {
        self.role.eq_ignore_ascii_case(TUTOR_ROLE)
    }

    /// "First Last", trimmed when either part is blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Copy of the user suitable for token claims: the subject list is
    /// dropped so the nested catalog never ends up inside a token.
    pub fn token_view(&self) -> User {
        User {
            subjects: Vec::new(),
            ..self.clone()
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            email: String::new(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: String::new(),
            subjects: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Fields of a user about to be registered. The password is the raw value
/// supplied by the caller; hashing happens in the user service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Insert a new user with an already hashed password.
    ///
    /// A duplicate email surfaces as `AppError::EmailExists`.
    async fn create(&self, user: &NewUser, password_hash: &str) -> Result<User, AppError>;

    /// All users whose role matches `role`, ignoring case, in id order.
    async fn find_by_role(&self, role: &str) -> Result<Vec<User>, AppError>;

    /// Subjects (with their questions) a user is enrolled in.
    async fn subjects_for_user(&self, user_id: i64) -> Result<Vec<Subject>, AppError>;
}
