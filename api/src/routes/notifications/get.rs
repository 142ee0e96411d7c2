use axum::{Extension, Json, extract::State, response::IntoResponse};
use db::models::notification::Model as NotificationModel;
use util::state::AppState;

use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
};

/// GET /api/notifications
///
/// The caller's notifications, newest first.
pub async fn get_notifications(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let notifications = NotificationModel::find_for_user(app_state.db(), &claims.sub)
        .await
        .map_err(|e| ApiError::store("Error fetching notifications", e))?;

    Ok(Json(ApiResponse::success(
        notifications,
        "Notifications retrieved successfully",
    )))
}
