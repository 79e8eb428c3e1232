//! Subject Service
//!
//! Read access to the subject catalog.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Subject, SubjectRepository};

/// Subject service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectService: Send + Sync {
    /// The whole catalog, each subject with its questions.
    async fn find_all(&self) -> Result<Vec<Subject>, SubjectError>;
}

/// Subject service errors
#[derive(Debug, thiserror::Error)]
pub enum SubjectError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// SubjectService implementation
pub struct SubjectServiceImpl<S>
where
    S: SubjectRepository,
{
    subject_repo: Arc<S>,
}

impl<S> SubjectServiceImpl<S>
where
    S: SubjectRepository,
{
    pub fn new(subject_repo: Arc<S>) -> Self {
        Self { subject_repo }
    }
}

#[async_trait]
impl<S> SubjectService for SubjectServiceImpl<S>
where
    S: SubjectRepository + 'static,
{
    async fn find_all(&self) -> Result<Vec<Subject>, SubjectError> {
        self.subject_repo
            .find_all()
            .await
            .map_err(|e| SubjectError::Internal(e.to_string()))
    }
}
