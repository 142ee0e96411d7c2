use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::{sync::mpsc, time};

use super::handler_trait::{WsHandler, WsInbound};
use super::registry::{ChatRegistry, ConnectionHandle};
use super::runtime::WsContext;
use crate::config;

pub struct WsServerOptions {
    /// Seconds between WS-level pings; `0` disables them.
    pub ws_ping_sec: u64,
    /// Capacity of the bounded outbound queue of each connection.
    pub outbound_queue: usize,
}

impl Default for WsServerOptions {
    fn default() -> Self {
        Self {
            ws_ping_sec: 30,
            outbound_queue: 64,
        }
    }
}

impl WsServerOptions {
    pub fn from_config() -> Self {
        Self {
            ws_ping_sec: config::ws_ping_seconds(),
            outbound_queue: config::ws_outbound_queue(),
        }
    }
}

/// Drives one accepted socket until it closes.
///
/// Outbound frames (replies and room broadcasts) go through a bounded queue
/// drained by a dedicated writer task, so a slow client only ever fills its own
/// queue. Inbound frames are handled one at a time, in order.
pub async fn serve_connection<H: WsHandler>(
    socket: WebSocket,
    registry: ChatRegistry,
    handler: Arc<H>,
    opts: WsServerOptions,
) {
    let (mut sink, mut socket_rx) = socket.split();

    let (out_tx, mut out_rx) = mpsc::channel::<Message>(opts.outbound_queue.max(1));
    let writer_task = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    let conn = ConnectionHandle::new(out_tx.clone());
    let conn_id = conn.id();
    let ctx = WsContext::new(conn, registry);

    // WS-level periodic ping
    let ping_task = (opts.ws_ping_sec > 0).then(|| {
        let out_tx = out_tx.clone();
        let every = std::time::Duration::from_secs(opts.ws_ping_sec);
        tokio::spawn(async move {
            loop {
                time::sleep(every).await;
                if out_tx.send(Message::Ping(Bytes::new())).await.is_err() {
                    break;
                }
            }
        })
    });
    drop(out_tx);

    tracing::debug!(connection_id = conn_id, "WS connection opened");
    handler.on_open(&ctx).await;

    // C→S: parse & dispatch
    while let Some(frame) = socket_rx.next().await {
        let msg = match frame {
            Ok(msg) => msg,
            Err(e) => {
                tracing::info!(connection_id = conn_id, "WS read error: {e}");
                break;
            }
        };
        match msg {
            Message::Text(text) => {
                let event = H::In::parse(text.as_str());
                handler.on_message(&ctx, event).await;
            }
            Message::Ping(payload) => {
                let _ = ctx.reply_pong(payload).await;
            }
            Message::Pong(_) => {}
            Message::Binary(_) => {
                tracing::warn!(connection_id = conn_id, "Ignoring binary frame");
            }
            Message::Close(_) => break,
        }
    }

    handler.on_close(&ctx).await;
    // The registry holds a clone of this connection's queue sender; release it
    // whatever the handler did.
    ctx.registry.leave(conn_id).await;

    if let Some(task) = ping_task {
        task.abort();
    }
    // Dropping the last queue sender lets the writer drain and stop.
    drop(ctx);
    let _ = writer_task.await;
    tracing::info!(connection_id = conn_id, "WS session ended");
}
