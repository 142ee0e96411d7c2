use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::chat_message::Model as ChatMessageModel;
use util::state::AppState;

use super::common::authorize_chat;
use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
};

/// POST /api/chat/{ticket_id}
///
/// Appends a message from the caller. Live connections in the ticket's room
/// are not told about it; they see it on their next history fetch.
///
/// ### Request Body
/// ```json
/// { "message": "Have you tried turning it off and on again?" }
/// ```
///
/// ### Responses
/// - `201 Created` with the enriched message
/// - `400 Bad Request` if `message` is missing or blank
/// - `403 Forbidden` / `404 Not Found` as for `GET`
/// - `500 Internal Server Error` (`"Failed to create chat message"`)
pub async fn create_chat_message(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    const FAILURE: &str = "Failed to create chat message";
    let db = app_state.db();

    authorize_chat(db, &ticket_id, &claims.sub, FAILURE).await?;

    let message = match req.get("message").and_then(|v| v.as_str()) {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(ApiError::Validation("Message is required".into())),
    };

    let saved = ChatMessageModel::append(db, &ticket_id, &claims.sub, message)
        .await
        .map_err(|e| ApiError::store(FAILURE, e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(saved, "Chat message created successfully")),
    ))
}
