use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{notification::Model as NotificationModel, tickets::Model as TicketModel};
use util::state::AppState;

use super::common::{CreateTicketRequest, one_with_people};
use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::common::validate_request,
};

/// POST /api/tickets
///
/// Opens a ticket owned by the caller and tells every admin and technician
/// about it through a notification. A failure to notify is logged and does
/// not undo the ticket.
///
/// ### Request Body
/// ```json
/// { "title": "Printer jammed", "description": "Floor 3, again" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new `OPEN` ticket
/// - `400 Bad Request` if `title` or `description` is empty
/// - `500 Internal Server Error` (`"Failed to create ticket"`)
pub async fn create_ticket(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to create ticket";
    let db = app_state.db();

    validate_request(&req)?;

    let ticket = TicketModel::create(db, &claims.sub, &req.title, &req.description)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    match NotificationModel::notify_staff_of_new_ticket(db, &ticket).await {
        Ok(sent) => tracing::debug!(ticket = %ticket.id, sent, "Staff notified of new ticket"),
        Err(e) => tracing::warn!(ticket = %ticket.id, error = %e, "Failed to notify staff of new ticket"),
    }

    let ticket = one_with_people(db, ticket)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ticket, "Ticket created successfully")),
    ))
}
