use axum::{Router, routing::get, Json, response::IntoResponse};
use crate::response::ApiResponse;
use util::state::AppState;

/// Builds the `/health` route group.
///
/// A single public `GET /health` endpoint for uptime probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Reports that the API process is up. Does not touch the database.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
