use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::chat_message::Model as ChatMessageModel;
use util::state::AppState;

use super::common::authorize_chat;
use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
};

/// GET /api/chat/{ticket_id}
///
/// Full message history of a ticket, oldest first, each message carrying its
/// sender's `{id, name, role}`.
///
/// ### Responses
/// - `200 OK` with the ordered history
/// - `403 Forbidden` if the caller is neither the ticket's creator nor its assignee
/// - `404 Not Found` if the ticket does not exist
/// - `500 Internal Server Error` (`"Failed to fetch chat messages"`)
pub async fn get_chat_messages(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to fetch chat messages";
    let db = app_state.db();

    authorize_chat(db, &ticket_id, &claims.sub, FAILURE).await?;

    let messages = ChatMessageModel::list_by_ticket(db, &ticket_id)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok(Json(ApiResponse::success(
        messages,
        "Chat messages retrieved successfully",
    )))
}
