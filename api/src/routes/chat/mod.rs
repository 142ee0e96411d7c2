//! `/api/chat/{ticket_id}`: ticket chat history and REST posting.
//!
//! Both verbs run the chat access check first. Posting here persists only;
//! live members of the room are not notified.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_chat_messages;
use post::create_chat_message;

pub fn chat_routes() -> Router<AppState> {
    Router::new().route(
        "/{ticket_id}",
        get(get_chat_messages).post(create_chat_message),
    )
}
