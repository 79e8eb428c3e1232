//! # StudyBuddy Backend
//!
//! REST backend for a tutoring marketplace: login, registration and the
//! tutor listing.
//!
//! Every endpoint answers with the same envelope: a result code (`"00"` on
//! success), a human-readable description and an optional payload.
//!
//! ## Module Structure
//!
//! ```text
//! studybuddy_backend/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Delegate services and DTOs
//! +-- infrastructure/ PostgreSQL repositories, metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Errors, status mapping, validation
//! ```

// Configuration module
pub mod config;

// Domain layer - entities and repository contracts
pub mod domain;

// Application layer - delegate services
pub mod application;

// Infrastructure layer - external implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
