// api/src/ws/chat/payload.rs
use serde::Deserialize;
use util::ws::handler_trait::WsInbound;

/// Wire shape of inbound frames: `{"type": "...", "payload": {...}}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
enum Frame {
    Join {
        #[serde(rename = "roomId")]
        room_id: String,
        #[serde(rename = "userId")]
        user_id: String,
    },
    Chat {
        message: String,
    },
}

/// One parsed inbound event of a chat connection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    Join { room_id: String, user_id: String },
    Chat { message: String },
    /// Not JSON, an unknown `type`, or a payload missing its fields.
    Malformed { reason: String },
}

impl WsInbound for ChatEvent {
    fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Frame>(raw) {
            Ok(Frame::Join { room_id, user_id }) => ChatEvent::Join { room_id, user_id },
            Ok(Frame::Chat { message }) => ChatEvent::Chat { message },
            Err(e) => ChatEvent::Malformed {
                reason: e.to_string(),
            },
        }
    }
}
