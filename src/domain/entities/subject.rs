//! Subject and Question entities.
//!
//! Maps to the `subjects` and `questions` tables. A question belongs to one
//! subject and is authored by one tutor.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A subject in the tutoring catalog, with the questions posted under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A question authored by a tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    pub subject_id: i64,

    /// Author (a user with the tutor role)
    pub tutor_id: i64,

    pub content: String,

    /// Display name of the author, resolved at login. Never stored.
    #[serde(default)]
    pub tutor_name: Option<String>,
}

/// Repository trait for the subject catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Every subject with its questions, ordered by subject id.
    async fn find_all(&self) -> Result<Vec<Subject>, AppError>;
}
