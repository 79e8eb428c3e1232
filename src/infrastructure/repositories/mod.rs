//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgSubjectRepository, PgUserRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let subject_repo = PgSubjectRepository::new(pool);
//! }
//! ```

pub mod subject_repository;
pub mod user_repository;

pub use subject_repository::PgSubjectRepository;
pub use user_repository::PgUserRepository;
