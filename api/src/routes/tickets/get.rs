use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::tickets::Model as TicketModel;
use util::state::AppState;

use super::common::{one_with_people, with_people};
use crate::response::{ApiError, ApiResponse};

/// GET /api/tickets
///
/// Every ticket, newest first, with `createdBy` and `assignedTo` summaries.
pub async fn list_tickets(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to retrieve tickets";
    let db = app_state.db();

    let tickets = TicketModel::find_all(db)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;
    let tickets = with_people(db, tickets)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        tickets,
        "Tickets retrieved successfully",
    )))
}

/// GET /api/tickets/{ticket_id}
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` (`"Ticket not found"`)
pub async fn get_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to retrieve ticket";
    let db = app_state.db();

    let ticket = TicketModel::find_by_id(db, &ticket_id)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?
        .ok_or_else(|| ApiError::NotFound("Ticket not found".into()))?;
    let ticket = one_with_people(db, ticket)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        ticket,
        "Ticket retrieved successfully",
    )))
}
