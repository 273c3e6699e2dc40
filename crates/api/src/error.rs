use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sarthi_core::StoreError;
use serde_json::json;

/// API error type rendered as a JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// "<Label> not found", as reported for a missing entity.
    pub fn missing(label: &str) -> Self {
        ApiError::NotFound(format!("{label} not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "notFound", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "badRequest", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internalError",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Store(err) => match err {
                StoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "notFound", err.to_string())
                }
                StoreError::InvalidIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "badRequest", err.to_string())
                }
                StoreError::EmptyUpdate => (
                    StatusCode::BAD_REQUEST,
                    "badRequest",
                    "No update data provided".to_string(),
                ),
                _ => {
                    tracing::error!("Store error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internalError",
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": {
                "type": error_type,
                "message": message,
                "statusCode": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
