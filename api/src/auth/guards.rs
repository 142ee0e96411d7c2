use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use db::models::user::Role;
use axum::{
    body::Body,
    extract::FromRequestParts,
    http::Request,
    middleware::Next,
    response::Response,
};

/// Helper to extract and validate the user, then insert it back into the request
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
///
/// Downstream handlers read the caller with `Extension<AuthUser>`.
pub async fn allow_authenticated(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Role-based access guard.
///
/// Rejects authenticated callers whose role is not in `allowed` with `403`.
async fn allow_roles(
    req: Request<Body>,
    next: Next,
    allowed: &[Role],
    denial: &str,
) -> Result<Response, ApiError> {
    let (req, AuthUser(claims)) = extract_and_insert_authuser(req).await?;

    if !allowed.contains(&claims.role) {
        return Err(ApiError::Forbidden(denial.to_owned()));
    }
    Ok(next.run(req).await)
}

/// Technician-only guard for the technician work queues.
pub async fn allow_technician(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    allow_roles(req, next, &[Role::Technician], "Technician access required").await
}

/// Admin-only guard for user management.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    allow_roles(req, next, &[Role::Admin], "Admin access required").await
}
