pub mod entities;
pub mod health;

use axum::Router;
use sarthi_core::{DigitalService, GeoRegion, GovJobPost, SchemePost, Sector};

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/api/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(entities::routes::<GeoRegion>("states-and-cities"))
        .merge(entities::routes::<Sector>("sectors"))
        .merge(entities::routes::<SchemePost>("scheme-posts"))
        .merge(entities::routes::<GovJobPost>("gov-jobs-posts"))
        .merge(entities::routes::<DigitalService>("digital-services"))
}
