use api::{auth::generate_jwt, routes::routes, ws::ws_routes};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::models::{
    tickets::{Model as TicketModel, TicketChanges},
    user::{Model as UserModel, Role},
};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

/// Full router over a fresh in-memory database, as `main` assembles it.
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::set_jwt_secret("test-secret");

    let db = setup_test_db().await;
    let app_state = AppState::new(db);

    let router = Router::new()
        .nest("/api", routes(app_state.clone()))
        .nest("/ws", ws_routes(app_state.clone()));

    (router, app_state)
}

/// `Authorization` header value for `user`.
pub fn bearer(user: &UserModel) -> String {
    let (token, _) = generate_jwt(&user.id, user.role).expect("token");
    format!("Bearer {token}")
}

pub struct TestData {
    pub owner: UserModel,
    pub tech: UserModel,
    pub outsider: UserModel,
    pub admin: UserModel,
    /// Created by `owner`, assigned to `tech`.
    pub ticket: TicketModel,
}

pub async fn seed(db: &DatabaseConnection) -> TestData {
    let owner = UserModel::create(db, "Olivia Owner", "owner@test.com", Role::User).await.unwrap();
    let tech = UserModel::create(db, "Terry Tech", "tech@test.com", Role::Technician).await.unwrap();
    let outsider = UserModel::create(db, "Uma Outsider", "outsider@test.com", Role::Technician)
        .await
        .unwrap();
    let admin = UserModel::create(db, "Adrian Admin", "admin@test.com", Role::Admin).await.unwrap();

    let ticket = TicketModel::create(db, &owner.id, "Laptop won't boot", "Black screen").await.unwrap();
    let ticket = TicketModel::apply_changes(
        db,
        &ticket.id,
        TicketChanges {
            assigned_to_id: Some(tech.id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    TestData {
        owner,
        tech,
        outsider,
        admin,
        ticket,
    }
}

/// Sends one request through `app` and returns the status and JSON body.
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    auth: Option<String>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        req = req.header(header::AUTHORIZATION, auth);
    }
    let req = match body {
        Some(json) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
