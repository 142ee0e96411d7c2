//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/chat` → Ticket chat history and posting (authenticated, ticket participants only)
//! - `/tickets` → Ticket intake and updates (authenticated)
//! - `/technician` → Technician work queues (technicians only)
//! - `/notifications` → Caller's notification inbox (authenticated)
//! - `/users` → User and technician listing, role changes, removal (admins only)
//! - `/feedback` → Service feedback (authenticated)

use crate::auth::guards::{allow_admin, allow_authenticated, allow_technician};
use crate::routes::{
    chat::chat_routes, feedback::feedback_routes, health::health_routes,
    notifications::notification_routes, technician::technician_routes, tickets::ticket_routes,
    users::user_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod chat;
pub mod common;
pub mod feedback;
pub mod health;
pub mod notifications;
pub mod technician;
pub mod tickets;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// State is bound here, so the returned router is ready to be nested under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/chat",
            chat_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/tickets",
            ticket_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/technician",
            technician_routes().route_layer(from_fn(allow_technician)),
        )
        .nest(
            "/notifications",
            notification_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/users", user_routes().route_layer(from_fn(allow_admin)))
        .nest(
            "/feedback",
            feedback_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
