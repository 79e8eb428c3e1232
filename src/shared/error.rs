//! Application Error Types
//!
//! Every non-success outcome of a handler is an `AppError`. Converting it into
//! a response yields the uniform envelope (`code`, `desc`, no payload) and the
//! matching HTTP status, so nothing escapes a handler as a raw fault.

use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::response::Envelope;
use crate::infrastructure::metrics;

/// Machine-readable result code carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// "00": the operation fully succeeded
    Success,
    /// "01": a required field is missing or malformed
    Validation,
    /// "02": bad credentials or duplicate email
    Conflict,
    /// "03": the store rejected the registration
    RegisterFailed,
    /// "99": unexpected failure
    System,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::Validation => "01",
            Self::Conflict => "02",
            Self::RegisterFailed => "03",
            Self::System => "99",
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SUCCESS_DESC: &str = "Success";
pub const WRONG_CREDENTIALS_DESC: &str = "Wrong email or password";
pub const EMAIL_EXISTS_DESC: &str = "Email have existed";
pub const REGISTER_FAILED_DESC: &str = "Register failed. Please try again";
pub const SYSTEM_ERROR_DESC: &str = "System error. Please try again";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Wrong email or password")]
    WrongCredentials,

    #[error("Email already registered")]
    EmailExists,

    #[error("Registration rejected")]
    RegisterFailed,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// The fixed outcome table: code, description and transport status.
    pub fn parts(&self) -> (ResponseCode, Cow<'_, str>, StatusCode) {
        match self {
            Self::Validation(msg) => (
                ResponseCode::Validation,
                Cow::Borrowed(msg.as_str()),
                StatusCode::BAD_REQUEST,
            ),
            Self::WrongCredentials => (
                ResponseCode::Conflict,
                Cow::Borrowed(WRONG_CREDENTIALS_DESC),
                StatusCode::BAD_REQUEST,
            ),
            Self::EmailExists => (
                ResponseCode::Conflict,
                Cow::Borrowed(EMAIL_EXISTS_DESC),
                StatusCode::BAD_REQUEST,
            ),
            Self::RegisterFailed => (
                ResponseCode::RegisterFailed,
                Cow::Borrowed(REGISTER_FAILED_DESC),
                StatusCode::BAD_REQUEST,
            ),
            Self::Internal(_) | Self::Database(_) => (
                ResponseCode::System,
                Cow::Borrowed(SYSTEM_ERROR_DESC),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        }
    }

    /// Build an internal error from any failure and log its detail.
    ///
    /// The detail stays in the server log; the caller only ever sees the
    /// generic "99" description.
    pub fn system(context: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!(context, error = %err, "Unexpected failure");
        Self::Internal(format!("{}: {}", context, err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }

        let (code, desc, status) = self.parts();
        metrics::record_envelope(code);

        let body = Envelope::<()>::failure(code, desc.into_owned());
        (status, Json(body)).into_response()
    }
}
