use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::notification::Model as NotificationModel;
use serde::Serialize;
use util::state::AppState;

use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
};

/// PUT /api/notifications/{notification_id}/read
///
/// ### Responses
/// - `200 OK` with the updated notification
/// - `404 Not Found` if it does not exist or belongs to someone else
pub async fn mark_read(
    State(app_state): State<AppState>,
    Path(notification_id): Path<String>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = NotificationModel::mark_read(app_state.db(), &notification_id, &claims.sub)
        .await
        .map_err(|e| ApiError::store("Error updating notification", e))?
        .ok_or_else(|| ApiError::NotFound("Notification not found".into()))?;

    Ok(Json(ApiResponse::success(
        notification,
        "Notification marked as read",
    )))
}

#[derive(Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

/// PUT /api/notifications/read-all
///
/// Marks every unread notification of the caller as read.
pub async fn mark_all_read(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = NotificationModel::mark_all_read(app_state.db(), &claims.sub)
        .await
        .map_err(|e| ApiError::store("Error updating notifications", e))?;

    Ok(Json(ApiResponse::success(
        MarkAllReadResponse { updated },
        "All notifications marked as read",
    )))
}
