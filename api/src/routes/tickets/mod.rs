//! `/api/tickets`: ticket intake, listing, updates and removal.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_ticket;
use get::{get_ticket, list_tickets};
use post::create_ticket;
use put::update_ticket;

pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route(
            "/{ticket_id}",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
}
