//! User Handlers
//!
//! Login, registration and tutor listing under `/app/user`.
//!
//! Each handler validates its input, calls the delegate services and ends in
//! exactly one envelope: `Ok` renders the "00" envelope with HTTP 200, `Err`
//! renders the failure envelope through `AppError`'s status mapping.

use std::collections::HashMap;

use axum::{extract::State, Json};

use crate::application::dto::request::{LoginRequest, RegisterUserRequest};
use crate::application::dto::response::{
    Envelope, LoginPayload, RegisterPayload, TutorsPayload, UserResponse,
};
use crate::application::services::UserService;
use crate::domain::{NewUser, Subject};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::EnvelopeJson;
use crate::shared::error::{AppError, ResponseCode};
use crate::shared::validation::{validate_login, validate_registration};
use crate::startup::AppState;

fn success<T>(payload: T) -> Json<Envelope<T>> {
    metrics::record_envelope(ResponseCode::Success);
    Json(Envelope::success(payload))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    EnvelopeJson(body): EnvelopeJson<LoginRequest>,
) -> Result<Json<Envelope<LoginPayload>>, AppError> {
    validate_login(&body)?;
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let mut user = state
        .users
        .authenticate(&email, &password)
        .await
        .map_err(|e| AppError::system("login: authenticate", e))?
        .ok_or_else(|| {
            tracing::info!(email = %email, "Login rejected");
            AppError::WrongCredentials
        })?;

    // Tutors see the whole catalog, not only the subjects they are enrolled in
    if user.is_tutor() {
        user.subjects = state
            .subjects
            .find_all()
            .await
            .map_err(|e| AppError::system("login: load subject catalog", e))?;
    }

    attach_tutor_names(state.users.as_ref(), &mut user.subjects).await?;

    let access_token = state
        .tokens
        .generate_token(&user.token_view())
        .map_err(|e| AppError::system("login: issue token", e))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(success(LoginPayload {
        user: UserResponse::from(user),
        access_token,
    }))
}

/// Resolve the author name of every question. Each tutor is looked up once
/// per request.
async fn attach_tutor_names(
    users: &dyn UserService,
    subjects: &mut [Subject],
) -> Result<(), AppError> {
    let mut names: HashMap<i64, String> = HashMap::new();

    for question in subjects.iter_mut().flat_map(|s| s.questions.iter_mut()) {
        let name = match names.get(&question.tutor_id).cloned() {
            Some(name) => name,
            None => {
                let name = users
                    .find_tutor_name_by_id(question.tutor_id)
                    .await
                    .map_err(|e| AppError::system("login: resolve tutor name", e))?;
                names.insert(question.tutor_id, name.clone());
                name
            }
        };
        question.tutor_name = Some(name);
    }

    Ok(())
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    EnvelopeJson(body): EnvelopeJson<RegisterUserRequest>,
) -> Result<Json<Envelope<RegisterPayload>>, AppError> {
    validate_registration(&body)?;

    let new_user = NewUser {
        email: body.email.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
        first_name: body.first_name.unwrap_or_default(),
        last_name: body.last_name.unwrap_or_default(),
        role: body.role.unwrap_or_default(),
    };

    let exists = state
        .users
        .check_exist_by_email(&new_user.email)
        .await
        .map_err(|e| AppError::system("register: check email", e))?;
    if exists {
        tracing::info!(email = %new_user.email, "Registration with existing email");
        return Err(AppError::EmailExists);
    }

    let stored = state
        .users
        .register(&new_user)
        .await
        .map_err(|e| AppError::system("register: store user", e))?;
    if !stored {
        tracing::warn!(email = %new_user.email, "Registration rejected by store");
        return Err(AppError::RegisterFailed);
    }

    tracing::info!(email = %new_user.email, role = %new_user.role, "User registered");

    Ok(success(RegisterPayload {
        user: UserResponse::from(new_user),
    }))
}

/// List all tutors, in the order the store returns them
pub async fn find_tutors(
    State(state): State<AppState>,
) -> Result<Json<Envelope<TutorsPayload>>, AppError> {
    let tutors = state
        .users
        .find_tutors()
        .await
        .map_err(|e| AppError::system("tutors: list", e))?;

    tracing::debug!(count = tutors.len(), "Tutors listed");

    Ok(success(TutorsPayload {
        tutors: tutors.into_iter().map(UserResponse::from).collect(),
    }))
}
