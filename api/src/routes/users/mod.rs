//! `/api/users`: account listing and administration (admins only).

use axum::{
    Router,
    routing::{delete, get, put},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod put;

use delete::delete_user;
use get::{list_technicians, list_users};
use put::update_role;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/technicians", get(list_technicians))
        .route("/{user_id}/role", put(update_role))
        .route("/{user_id}", delete(delete_user))
}
