use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::feedback::Model as FeedbackModel;
use util::state::AppState;

use super::common::CreateFeedbackRequest;
use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::common::validate_request,
};

/// POST /api/feedback
///
/// ### Request Body
/// ```json
/// { "subject": "Quick fix", "message": "Sorted within the hour", "rating": 5 }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored feedback
/// - `400 Bad Request` for an empty subject or message, or a rating outside 1..=5
pub async fn create_feedback(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_request(&req)?;

    let feedback = FeedbackModel::create(
        app_state.db(),
        &claims.sub,
        &req.subject,
        &req.message,
        req.rating,
    )
    .await
    .map_err(|e| ApiError::store("Failed to create feedback", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(feedback, "Feedback submitted successfully")),
    ))
}
