// util/src/ws/mod.rs
pub mod axum_adapter;
pub mod broadcast;
pub mod handler_trait;
pub mod registry;
pub mod runtime;
pub mod serve;

pub use broadcast::{BroadcastReport, broadcast};
pub use registry::{ChatRegistry, ConnectionHandle, ConnectionId, DeliveryFault, Membership};

use serde::Serialize;

/// Outbound frame shape of the live channel: `{"type": ..., "data": ...}`.
#[derive(Serialize)]
pub struct OutboundFrame<'a, T> {
    #[serde(rename = "type")]
    pub r#type: &'a str,
    pub data: &'a T,
}

/// Serializes `data` into an `OutboundFrame` and fans it out to `room_id`.
///
/// A payload that cannot be serialized is logged and nothing is sent.
pub async fn emit<T: Serialize>(
    registry: &ChatRegistry,
    room_id: &str,
    kind: &str,
    data: &T,
) -> BroadcastReport {
    let frame = OutboundFrame { r#type: kind, data };
    match serde_json::to_string(&frame) {
        Ok(json) => broadcast(registry, room_id, &json).await,
        Err(e) => {
            tracing::error!(room_id, "failed to serialize '{kind}' frame: {e}");
            BroadcastReport::default()
        }
    }
}
