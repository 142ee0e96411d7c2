use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::tickets::Model as TicketModel;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};

/// DELETE /api/tickets/{ticket_id}
///
/// Removes the ticket together with its chat history and notifications.
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = TicketModel::delete_by_id(app_state.db(), &ticket_id)
        .await
        .map_err(|e| ApiError::store("Failed to delete ticket", e))?;

    if !deleted {
        return Err(ApiError::NotFound("Ticket not found".into()));
    }
    Ok(Json(ApiResponse::<()>::success((), "Ticket deleted successfully")))
}
