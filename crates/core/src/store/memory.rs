use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::{DocumentCollection, DocumentStore};
use crate::document::{ObjectKey, StoredDocument};
use crate::error::StoreResult;

/// Process-local collection. Contents are lost on drop.
#[derive(Debug)]
pub struct MemoryCollection {
    name: String,
    documents: RwLock<HashMap<ObjectKey, Map<String, Value>>>,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn upsert(&self, key: ObjectKey, content: Map<String, Value>) -> StoreResult<()> {
        self.documents.write().await.insert(key, content);
        Ok(())
    }

    async fn find_one(&self, key: ObjectKey) -> StoreResult<Option<StoredDocument>> {
        let documents = self.documents.read().await;
        Ok(documents.get(&key).map(|content| StoredDocument {
            key,
            content: content.clone(),
        }))
    }

    async fn find_all(&self) -> StoreResult<Vec<StoredDocument>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(key, content)| StoredDocument {
                key: *key,
                content: content.clone(),
            })
            .collect())
    }

    async fn delete(&self, key: ObjectKey) -> StoreResult<u64> {
        let removed = self.documents.write().await.remove(&key);
        Ok(u64::from(removed.is_some()))
    }
}

/// In-memory store used by tests and by the server when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<&'static str, Arc<MemoryCollection>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed handle to a collection, created on first use.
    pub fn memory_collection(&self, name: &'static str) -> Arc<MemoryCollection> {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        collections
            .entry(name)
            .or_insert_with(|| Arc::new(MemoryCollection::new(name)))
            .clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn collection(&self, name: &'static str) -> Arc<dyn DocumentCollection> {
        self.memory_collection(name)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
