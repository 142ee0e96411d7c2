use std::sync::Arc;

use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use util::state::AppState;
use util::ws::axum_adapter::ws_route;
use util::ws::serve::WsServerOptions;

use super::ws_handlers::ChatWsHandler;

/// GET /ws/chat
///
/// Upgrades to the chat live channel.
pub async fn chat_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    let handler = Arc::new(ChatWsHandler::new(app_state.db_clone()));
    ws_route(ws, app_state.chat_clone(), handler, WsServerOptions::from_config())
}
