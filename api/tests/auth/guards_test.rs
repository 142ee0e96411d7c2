#[cfg(test)]
mod tests {
    use api::auth::{
        AuthUser, generate_jwt,
        guards::{allow_admin, allow_authenticated, allow_technician},
    };
    use axum::{
        Extension, Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        middleware::from_fn,
        routing::get,
    };
    use db::models::user::Role;
    use serde_json::Value;
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    async fn whoami(Extension(AuthUser(claims)): Extension<AuthUser>) -> String {
        claims.sub
    }

    fn app() -> Router {
        Router::new()
            .route("/any", get(whoami).route_layer(from_fn(allow_authenticated)))
            .route("/tech", get(whoami).route_layer(from_fn(allow_technician)))
            .route("/admin", get(whoami).route_layer(from_fn(allow_admin)))
    }

    async fn get_with(uri: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut req = Request::builder().uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = app().oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    #[serial]
    async fn authenticated_caller_reaches_the_handler() {
        AppConfig::set_jwt_secret("guard-secret");
        let (token, _) = generate_jwt("user-42", Role::User).unwrap();

        let (status, body) = get_with("/any", Some(token.as_str())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user-42");
    }

    #[tokio::test]
    #[serial]
    async fn token_signed_with_another_secret_is_rejected() {
        AppConfig::set_jwt_secret("first-secret");
        let (token, _) = generate_jwt("user-42", Role::User).unwrap();
        AppConfig::set_jwt_secret("second-secret");

        let (status, body) = get_with("/any", Some(token.as_str())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid or expired token");
    }

    #[tokio::test]
    #[serial]
    async fn technician_guard_checks_the_role() {
        AppConfig::set_jwt_secret("guard-secret");
        let (tech, _) = generate_jwt("tech-1", Role::Technician).unwrap();
        let (admin, _) = generate_jwt("admin-1", Role::Admin).unwrap();

        assert_eq!(get_with("/tech", Some(tech.as_str())).await.0, StatusCode::OK);
        assert_eq!(get_with("/tech", Some(admin.as_str())).await.0, StatusCode::FORBIDDEN);
        assert_eq!(get_with("/tech", None).await.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn admin_guard_checks_the_role() {
        AppConfig::set_jwt_secret("guard-secret");
        let (admin, _) = generate_jwt("admin-1", Role::Admin).unwrap();
        let (tech, _) = generate_jwt("tech-1", Role::Technician).unwrap();

        assert_eq!(get_with("/admin", Some(admin.as_str())).await.0, StatusCode::OK);
        let (status, body) = get_with("/admin", Some(tech.as_str())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "Admin access required");
    }
}
