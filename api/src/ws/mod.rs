use axum::{Router, routing::get};
use util::state::AppState;

use crate::ws::chat::handlers::chat_ws_handler;

pub mod chat;

/// Live-channel routes mounted under `/ws`.
///
/// `/ws/chat` is not behind `allow_authenticated`: the room and user are taken
/// from the client's `join` event as sent.
pub fn ws_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", get(chat_ws_handler))
        .with_state(app_state)
}
