use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::{Model as UserModel, Role};
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};

/// GET /api/users
///
/// Accounts with the `USER` role, oldest first.
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = UserModel::find_by_role(app_state.db(), Role::User)
        .await
        .map_err(|e| ApiError::store("Error fetching users", e))?;

    Ok(Json(ApiResponse::success(users, "Users retrieved successfully")))
}

/// GET /api/users/technicians
///
/// Accounts with the `TECHNICIAN` role; these are the valid `assignedToId`
/// values for a ticket update.
pub async fn list_technicians(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let technicians = UserModel::find_by_role(app_state.db(), Role::Technician)
        .await
        .map_err(|e| ApiError::store("Error fetching technicians", e))?;

    Ok(Json(ApiResponse::success(
        technicians,
        "Technicians retrieved successfully",
    )))
}
