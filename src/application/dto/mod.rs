//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterUserRequest};
pub use response::{
    Envelope, LoginPayload, RegisterPayload, TutorsPayload, UserResponse, PASSWORD_MASK,
};
