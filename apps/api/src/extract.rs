//! Request extractors whose rejections use the `AppError` body.

use axum::extract::{rejection::PathRejection, FromRequestParts};

use crate::errors::AppError;

/// `Path` that rejects malformed segments (e.g. a non-UUID id) with a
/// `VALIDATION_ERROR` instead of axum's plain-text 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
