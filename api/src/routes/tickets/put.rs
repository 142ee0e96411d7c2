use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::{
    tickets::{Model as TicketModel, TicketChanges, TicketStatus},
    user::Model as UserModel,
};
use sea_orm::DbErr;
use std::str::FromStr;
use util::state::AppState;

use super::common::{UpdateTicketRequest, one_with_people};
use crate::{
    response::{ApiError, ApiResponse},
    routes::common::validate_request,
};

/// PUT /api/tickets/{ticket_id}
///
/// Updates any of `title`, `description`, `status` and `assignedToId`.
///
/// - Moving into `CLOSED` stamps `resolvedAt` the first time.
/// - Assigning an `OPEN`, unassigned ticket moves it to `ASSIGNED` unless
///   the same request sets `status`.
///
/// ### Responses
/// - `200 OK` with the updated ticket
/// - `400 Bad Request` for an empty field, an unknown status or an unknown assignee
/// - `404 Not Found` (`"Ticket not found"`)
/// - `500 Internal Server Error` (`"Failed to update ticket"`)
pub async fn update_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
    Json(req): Json<UpdateTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to update ticket";
    let db = app_state.db();

    validate_request(&req)?;

    let status = req
        .status
        .as_deref()
        .map(TicketStatus::from_str)
        .transpose()
        .map_err(|_| ApiError::Validation("Invalid ticket status".into()))?;

    if let Some(assignee) = req.assigned_to_id.as_deref() {
        let exists = UserModel::find_by_id(db, assignee)
            .await
            .map_err(|e| ApiError::store(FAILURE, e))?
            .is_some();
        if !exists {
            return Err(ApiError::Validation("Assignee not found".into()));
        }
    }

    let changes = TicketChanges {
        title: req.title,
        description: req.description,
        status,
        assigned_to_id: req.assigned_to_id,
    };

    let ticket = match TicketModel::apply_changes(db, &ticket_id, changes).await {
        Ok(ticket) => ticket,
        Err(DbErr::RecordNotFound(_)) => {
            return Err(ApiError::NotFound("Ticket not found".into()));
        }
        Err(e) => return Err(ApiError::store(FAILURE, e)),
    };
    let ticket = one_with_people(db, ticket)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        ticket,
        "Ticket updated successfully",
    )))
}
