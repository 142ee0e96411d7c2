//! `/api/notifications`: the caller's inbox.

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

pub mod get;
pub mod put;

use get::get_notifications;
use put::{mark_all_read, mark_read};

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_notifications))
        .route("/read-all", put(mark_all_read))
        .route("/{notification_id}/read", put(mark_read))
}
