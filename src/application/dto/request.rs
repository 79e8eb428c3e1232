//! Request DTOs
//!
//! Data structures for API request bodies. Every field is optional so that a
//! missing field reaches the validator and yields the proper "01" envelope
//! instead of a deserialization failure.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}
