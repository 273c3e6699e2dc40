//! Document-store handles the repository talks to.
//!
//! A [`DocumentStore`] hands out one [`DocumentCollection`] per entity family.
//! Every collection call is a single round trip; atomicity is per document
//! and concurrent writers to the same key resolve last-writer-wins.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::document::{ObjectKey, StoredDocument};
use crate::error::StoreResult;

pub use memory::{MemoryCollection, MemoryStore};
pub use postgres::{PgCollection, PgStore};

/// One logical collection of documents keyed by [`ObjectKey`].
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> &str;

    /// Insert, or replace the whole document stored under `key`.
    async fn upsert(&self, key: ObjectKey, content: Map<String, Value>) -> StoreResult<()>;

    async fn find_one(&self, key: ObjectKey) -> StoreResult<Option<StoredDocument>>;

    /// Every document in the collection, in backend order.
    async fn find_all(&self) -> StoreResult<Vec<StoredDocument>>;

    /// Remove the document under `key`, returning how many were removed.
    async fn delete(&self, key: ObjectKey) -> StoreResult<u64>;
}

/// Source of collection handles.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn collection(&self, name: &'static str) -> Arc<dyn DocumentCollection>;

    /// Cheap connectivity check used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
