use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};

/// DELETE /api/users/{user_id}
///
/// Removes the account along with the tickets, messages, notifications and
/// feedback it owns. Tickets assigned to it fall back to unassigned.
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = UserModel::delete_by_id(app_state.db(), &user_id)
        .await
        .map_err(|e| ApiError::store("Error deleting user", e))?;

    if !deleted {
        return Err(ApiError::NotFound("User not found".into()));
    }
    tracing::info!(user_id = %user_id, "User deleted");
    Ok(Json(ApiResponse::<()>::success((), "User deleted successfully")))
}
