use super::registry::{ChatRegistry, ConnectionHandle, ConnectionId, DeliveryFault};
use axum::extract::ws::Message;

/// Per-connection view handed to a `WsHandler`.
pub struct WsContext {
    pub conn: ConnectionHandle,
    pub registry: ChatRegistry,
}

impl WsContext {
    pub fn new(conn: ConnectionHandle, registry: ChatRegistry) -> Self {
        Self { conn, registry }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.conn.id()
    }

    /// Send a WS-level pong to this client
    pub async fn reply_pong(&self, payload: bytes::Bytes) -> Result<(), DeliveryFault> {
        self.conn.send(Message::Pong(payload)).await
    }
}
