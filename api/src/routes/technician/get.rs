use axum::{Extension, Json, extract::State, response::IntoResponse};
use db::models::tickets::Model as TicketModel;
use util::state::AppState;

use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::tickets::common::with_people,
};

/// GET /api/technician/tickets
///
/// Tickets assigned to the caller that are `ASSIGNED` or `IN_PROGRESS`, newest first.
/// Technicians only; anyone else gets `403`.
pub async fn get_assigned_tickets(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Error fetching assigned tickets";
    let db = app_state.db();

    let tickets = TicketModel::find_active_for_assignee(db, &claims.sub)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;
    let tickets = with_people(db, tickets)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        tickets,
        "Assigned tickets retrieved successfully",
    )))
}

/// GET /api/technician/completed-tickets
///
/// The caller's `CLOSED` tickets, most recently resolved first.
pub async fn get_completed_tickets(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Error fetching completed tickets";
    let db = app_state.db();

    let tickets = TicketModel::find_completed_for_assignee(db, &claims.sub)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;
    let tickets = with_people(db, tickets)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        tickets,
        "Completed tickets retrieved successfully",
    )))
}
