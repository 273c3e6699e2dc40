use std::sync::Arc;

use sarthi_core::{DocumentStore, Entity, Repository};

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: Arc<dyn DocumentStore>,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { store, config }),
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    /// Repository for one entity family, bound to the shared store.
    pub fn repository<E: Entity>(&self) -> Repository<E> {
        Repository::open(self.store())
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
