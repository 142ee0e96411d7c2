use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;

use super::ApiResponse;

/// Every failure a REST handler can report.
///
/// Each variant maps to one HTTP status; the display string becomes the
/// `message` of the JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Persistence failure. Only `context` is shown to the caller.
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: DbErr,
    },
}

impl ApiError {
    pub fn store(context: impl Into<String>, source: DbErr) -> Self {
        ApiError::Store {
            context: context.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store { context, source } = &self {
            tracing::error!(error = %source, "{context}");
        }
        (self.status(), Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
