//! `/api/technician`: the calling technician's own work queues.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::{get_assigned_tickets, get_completed_tickets};

pub fn technician_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(get_assigned_tickets))
        .route("/completed-tickets", get(get_completed_tickets))
}
