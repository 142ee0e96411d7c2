use axum::{Json, extract::State, response::IntoResponse};
use db::models::feedback::Model as FeedbackModel;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};

/// GET /api/feedback
///
/// Every piece of feedback, newest first, each with its author's name and email.
pub async fn list_feedback(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let feedback = FeedbackModel::list_with_authors(app_state.db())
        .await
        .map_err(|e| ApiError::store("Failed to fetch feedback", e))?;

    Ok(Json(ApiResponse::success(
        feedback,
        "Feedback retrieved successfully",
    )))
}
