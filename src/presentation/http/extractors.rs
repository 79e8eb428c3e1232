//! Custom Extractors
//!
//! Axum extractors whose rejections are rendered as envelopes.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::shared::error::AppError;

pub const INVALID_BODY_DESC: &str = "Invalid request body";

/// JSON body extractor that answers unreadable bodies (bad syntax, wrong
/// content type) with a "01" envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeJson<T>(pub T);

impl<S, T> FromRequest<S> for EnvelopeJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::Validation(INVALID_BODY_DESC.into()))
            }
        }
    }
}
