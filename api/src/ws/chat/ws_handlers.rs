use db::models::chat_message::Model as ChatMessageModel;
use sea_orm::DatabaseConnection;
use util::ws::handler_trait::WsHandler;
use util::ws::runtime::WsContext;
use util::ws::{Membership, emit};

use super::payload::ChatEvent;

pub struct ChatWsHandler {
    db: DatabaseConnection,
}

impl ChatWsHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists `message` for the connection's room and fans it out.
    ///
    /// The room gate is held from insert to broadcast so members see messages
    /// in the order they were stored.
    async fn relay(&self, ctx: &WsContext, message: String) {
        let conn_id = ctx.connection_id();
        let Some(membership) = ctx.registry.membership_of(conn_id).await else {
            tracing::debug!(connection_id = conn_id, "Dropping chat from unjoined connection");
            return;
        };

        let gate = ctx.registry.room_gate(&membership.room_id);
        {
            let _turn = gate.lock().await;
            self.store_and_emit(ctx, &membership, &message).await;
        }
        ctx.registry.release_gate(&membership.room_id, gate).await;
    }

    async fn store_and_emit(&self, ctx: &WsContext, membership: &Membership, message: &str) {
        let conn_id = ctx.connection_id();
        let saved = match ChatMessageModel::append(
            &self.db,
            &membership.room_id,
            &membership.user_id,
            message,
        )
        .await
        {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!(
                    connection_id = conn_id,
                    room_id = %membership.room_id,
                    user_id = %membership.user_id,
                    error = %e,
                    "Failed to persist chat message"
                );
                return;
            }
        };

        let report = emit(&ctx.registry, &membership.room_id, "chat", &saved).await;
        tracing::debug!(
            room_id = %membership.room_id,
            delivered = report.delivered,
            failed = report.failed,
            "Chat message broadcast"
        );
    }
}

impl WsHandler for ChatWsHandler {
    type In = ChatEvent;

    async fn on_message(&self, ctx: &WsContext, msg: Self::In) {
        match msg {
            ChatEvent::Join { room_id, user_id } => {
                let previous = ctx.registry.join(&ctx.conn, room_id.clone(), user_id.clone()).await;
                tracing::info!(
                    connection_id = ctx.connection_id(),
                    room_id = %room_id,
                    user_id = %user_id,
                    rejoined = previous.is_some(),
                    "Joined chat room"
                );
            }
            ChatEvent::Chat { message } => self.relay(ctx, message).await,
            ChatEvent::Malformed { reason } => {
                tracing::warn!(connection_id = ctx.connection_id(), "Dropping malformed frame: {reason}");
            }
        }
    }

    async fn on_close(&self, ctx: &WsContext) {
        if let Some(m) = ctx.registry.leave(ctx.connection_id()).await {
            tracing::info!(room_id = %m.room_id, user_id = %m.user_id, "Left chat room");
        }
    }
}
