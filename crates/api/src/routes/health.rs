use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Welcome and health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the CCOS Scrapesarthi API" }))
}

/// Full health check: verifies the document store answers.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::Internal(format!("store health check failed: {e}")))?;

    let backend = if state.config().database_url.is_some() {
        "postgres"
    } else {
        "memory"
    };
    Ok(Json(json!({
        "status": "ok",
        "store": backend,
    })))
}

/// Lightweight ping, no store access.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
