//! Validation Utilities
//!
//! Field checks for request bodies. Each check either passes or fails with an
//! `AppError::Validation` carrying the message shown to the caller. The
//! request-level validators run their checks in a fixed order and stop at the
//! first failure.

use validator::ValidateEmail;

use super::error::AppError;
use crate::application::dto::request::{LoginRequest, RegisterUserRequest};

pub const INVALID_EMAIL_DESC: &str = "Invalid format email";

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Fails with "Please enter your <field>" when the value is absent or empty.
pub fn require_non_empty(field: &str, value: Option<&str>) -> Result<(), AppError> {
    if is_blank(value) {
        return Err(AppError::Validation(format!("Please enter your {}", field)));
    }
    Ok(())
}

/// Fails with "Please enter your <field>" when any of the values is absent or
/// empty. Used to check several inputs as one unit (first + last name).
pub fn require_all_non_empty(field: &str, values: &[Option<&str>]) -> Result<(), AppError> {
    if values.iter().any(|v| is_blank(*v)) {
        return Err(AppError::Validation(format!("Please enter your {}", field)));
    }
    Ok(())
}

/// Email shape check: exactly one `@`, something on both sides, and a dot
/// inside the domain part.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let has_inner_dot = domain
        .split('.')
        .filter(|label| !label.is_empty())
        .count()
        >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    has_inner_dot && value.validate_email()
}

/// Fails with "Invalid format email" when the value is not email-shaped.
pub fn require_email_format(value: &str) -> Result<(), AppError> {
    if !is_valid_email(value) {
        return Err(AppError::Validation(INVALID_EMAIL_DESC.into()));
    }
    Ok(())
}

fn require_email(email: Option<&str>) -> Result<(), AppError> {
    require_non_empty("email", email)?;
    require_email_format(email.unwrap_or_default())
}

/// Login order: email present, email format, password present.
pub fn validate_login(request: &LoginRequest) -> Result<(), AppError> {
    require_email(request.email.as_deref())?;
    require_non_empty("password", request.password.as_deref())
}

/// Registration order: email present, email format, password present,
/// first + last name present, role present.
pub fn validate_registration(request: &RegisterUserRequest) -> Result<(), AppError> {
    require_email(request.email.as_deref())?;
    require_non_empty("password", request.password.as_deref())?;
    require_all_non_empty(
        "name",
        &[request.first_name.as_deref(), request.last_name.as_deref()],
    )?;
    require_non_empty("role", request.role.as_deref())
}
