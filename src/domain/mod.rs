//! # Domain Layer
//!
//! The domain layer holds the entities of the tutoring marketplace and the
//! repository contracts used to load and store them.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior (role checks, token views)

pub mod entities;

pub use entities::*;
