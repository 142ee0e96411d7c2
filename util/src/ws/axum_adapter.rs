// util/ws/axum_adapter.rs
use std::sync::Arc;
use axum::{extract::{WebSocketUpgrade, ws::WebSocket}, response::IntoResponse};
use super::registry::ChatRegistry;
use super::serve::{serve_connection, WsServerOptions};
use super::handler_trait::WsHandler;

/// Completes a websocket upgrade and hands the socket to `handler`.
pub fn ws_route<H>(
    ws: WebSocketUpgrade,
    registry: ChatRegistry,
    handler: Arc<H>,
    opts: WsServerOptions,
) -> impl IntoResponse
where
    H: WsHandler,
{
    ws.on_upgrade(move |socket: WebSocket| async move {
        serve_connection(socket, registry, handler, opts).await;
    })
}
