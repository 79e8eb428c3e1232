//! Application Services
//!
//! The collaborators the HTTP handlers delegate to.
//!
//! ## Available Services
//!
//! - **UserService**: credential checks, registration, user lookups
//! - **SubjectService**: the subject catalog
//! - **TokenIssuer**: signed access tokens

pub mod auth_service;
pub mod subject_service;
pub mod user_service;

pub use auth_service::{AuthError, Claims, JwtTokenIssuer, TokenIssuer};
pub use subject_service::{SubjectError, SubjectService, SubjectServiceImpl};
pub use user_service::{UserError, UserService, UserServiceImpl};
