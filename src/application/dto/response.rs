//! Response DTOs
//!
//! The envelope returned by every endpoint and the payloads it can carry.

use serde::{Deserialize, Serialize};

use crate::domain::{NewUser, Subject, User};
use crate::shared::error::{ResponseCode, SUCCESS_DESC};

/// Shown in place of any password echoed back to a caller.
pub const PASSWORD_MASK: &str = "******";

/// Uniform response wrapper.
///
/// `code` is "00" only when the operation fully succeeded. The payload fields
/// are flattened next to `code` and `desc` and omitted on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: String,

    #[serde(rename = "desc")]
    pub description: String,

    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Self {
            code: ResponseCode::Success.as_str().to_string(),
            description: SUCCESS_DESC.to_string(),
            payload: Some(payload),
        }
    }

    pub fn failure(code: ResponseCode, description: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            description: description.into(),
            payload: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success.as_str()
    }
}

/// User as rendered in any response. The password is always the mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Absent for a freshly registered user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub subjects: Vec<Subject>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email,
            password: PASSWORD_MASK.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            subjects: user.subjects,
        }
    }
}

impl From<NewUser> for UserResponse {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            email: user.email,
            password: PASSWORD_MASK.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            subjects: Vec::new(),
        }
    }
}

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub user: UserResponse,
    pub access_token: String,
}

/// Payload of a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub user: UserResponse,
}

/// Payload of the tutor listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorsPayload {
    pub tutors: Vec<UserResponse>,
}
