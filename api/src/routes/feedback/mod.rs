//! `/api/feedback`: service feedback from signed-in users.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::list_feedback;
use post::create_feedback;

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/", get(list_feedback).post(create_feedback))
}
