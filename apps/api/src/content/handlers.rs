//! Axum route handlers for the Content API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::content::models::{ContentRequest, ContentResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/generate-content
///
/// Generates a caption, hashtags and an image prompt for the given brand and platform.
/// Body rejections are folded into `AppError` so every failure has the same shape.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<Json<ContentResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    let span = info_span!(
        "generate_content",
        request_id = %Uuid::new_v4(),
        platform = %request.platform,
        content_type = %request.content_type,
    );
    let cancel = state.shutdown.child_token();

    let result = state
        .generator
        .generate(&request, &cancel)
        .instrument(span)
        .await?;

    Ok(Json(result))
}
