use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::user::{Model as UserModel, Role};
use serde::Deserialize;
use std::str::FromStr;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    /// One of `USER`, `TECHNICIAN`, `ADMIN`.
    pub role: String,
}

/// PUT /api/users/{user_id}/role
///
/// ### Request Body
/// ```json
/// { "role": "TECHNICIAN" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request` (`"Invalid role"`)
/// - `404 Not Found` (`"User not found"`)
///
/// Tokens already issued keep the role they were signed with until they expire.
pub async fn update_role(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = Role::from_str(req.role.trim())
        .map_err(|_| ApiError::Validation("Invalid role".into()))?;

    let user = UserModel::set_role(app_state.db(), &user_id, role)
        .await
        .map_err(|e| ApiError::store("Error updating user role", e))?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    tracing::info!(user_id = %user.id, role = %user.role, "User role changed");
    Ok(Json(ApiResponse::success(user, "User role updated successfully")))
}
