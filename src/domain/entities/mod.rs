//! # Domain Entities
//!
//! Core domain entities of the tutoring marketplace.
//!
//! - **User**: account with credentials, role and enrolled subjects
//! - **Subject**: a catalog entry grouping questions
//! - **Question**: a question posted by a tutor under a subject
//!
//! Each aggregate has a repository trait implemented in the infrastructure layer.

mod subject;
mod user;

pub use subject::{Question, Subject, SubjectRepository};
pub use user::{NewUser, User, UserRepository, TUTOR_ROLE};

#[cfg(test)]
pub use subject::MockSubjectRepository;
#[cfg(test)]
pub use user::MockUserRepository;
