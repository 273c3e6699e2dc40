//! CRUD routes, instantiated once per entity family.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sarthi_core::{Entity, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Routes for one family under `/{family}`. The collection path also answers
/// with a trailing slash.
pub fn routes<E: Entity>(family: &str) -> Router<AppState> {
    let collection = format!("/{family}");
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&format!("{collection}/"), get(list::<E>).post(create::<E>))
        .route(
            &format!("{collection}/{{id}}"),
            get(fetch::<E>).put(update::<E>).delete(remove::<E>),
        )
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn create<E: Entity>(
    State(state): State<AppState>,
    payload: Result<Json<E::Draft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<E>)> {
    let draft = body(payload)?;
    let entity = state.repository::<E>().create(draft).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

async fn list<E: Entity>(State(state): State<AppState>) -> ApiResult<Json<Vec<E>>> {
    Ok(Json(state.repository::<E>().find_all().await?))
}

async fn fetch<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<E>> {
    state
        .repository::<E>()
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::missing(E::LABEL))
}

async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<E::Patch>, JsonRejection>,
) -> ApiResult<Json<E>> {
    let patch = body(payload)?;
    match state.repository::<E>().update(&id, patch).await {
        Ok(entity) => Ok(Json(entity)),
        Err(StoreError::NotFound { .. }) => Err(ApiError::missing(E::LABEL)),
        Err(e) => Err(e.into()),
    }
}

async fn remove<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.repository::<E>().delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::missing(E::LABEL))
    }
}
