use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::models::ContentError;

/// The only error message ever shown to callers.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate content";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to the same opaque 500 body; the kind is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::MalformedBody(_) => "MALFORMED_BODY",
            AppError::Content(e) => e.kind(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            AppError::MalformedBody(_)
            | AppError::Content(ContentError::Validation(_) | ContentError::Cancelled) => {
                tracing::warn!(code, "Content request rejected: {}", self);
            }
            AppError::Content(ContentError::Generation(e)) => {
                tracing::error!(code, "LLM error: {e}");
            }
            AppError::Content(ContentError::Parse(msg)) => {
                tracing::error!(code, "Could not parse LLM completion: {msg}");
            }
        }

        let body = Json(json!({ "error": GENERIC_FAILURE_MESSAGE }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
