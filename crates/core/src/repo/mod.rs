//! Generic entity repository.
//!
//! One [`Repository`] implementation serves every entity family; the family
//! only contributes its collection name, serde representation and patch type.
//! The 12-byte storage key never leaves this module and the store layer.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::document::{EntityId, ObjectKey, StoredDocument};
use crate::error::{StoreError, StoreResult};
use crate::model::{Entity, Patch};
use crate::store::{DocumentCollection, DocumentStore};

pub struct Repository<E> {
    collection: Arc<dyn DocumentCollection>,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    /// Wrap an already selected collection handle.
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self {
            collection,
            entity: PhantomData,
        }
    }

    /// Repository over the entity's own collection in `store`.
    pub fn open(store: &dyn DocumentStore) -> Self {
        Self::new(store.collection(E::COLLECTION))
    }

    /// Name of the backing collection.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Upsert keyed by the entity id: full replacement if the document exists.
    pub async fn save(&self, entity: &E) -> StoreResult<()> {
        let document = StoredDocument::encode(E::COLLECTION, entity)?;
        tracing::debug!(collection = self.collection.name(), id = %entity.id(), "saving document");
        self.collection.upsert(document.key, document.content).await
    }

    /// `Ok(None)` when no document has this id.
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        let key = parse_key(id)?;
        tracing::debug!(collection = self.collection.name(), id, "finding document");
        match self.collection.find_one(key).await? {
            Some(document) => document.decode(E::COLLECTION).map(Some),
            None => Ok(None),
        }
    }

    /// Every stored entity, in whatever order the backend returns them.
    pub async fn find_all(&self) -> StoreResult<Vec<E>> {
        let documents = self.collection.find_all().await?;
        tracing::debug!(
            collection = self.collection.name(),
            count = documents.len(),
            "listing documents"
        );
        documents
            .into_iter()
            .map(|document| document.decode(E::COLLECTION))
            .collect()
    }

    /// Remove by id. Returns `false` when nothing matched.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let key = parse_key(id)?;
        let removed = self.collection.delete(key).await?;
        tracing::debug!(collection = self.collection.name(), id, removed, "deleted document");
        Ok(removed > 0)
    }

    /// Build a new entity under a fresh id and persist it.
    pub async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        let entity = E::create(draft);
        self.save(&entity).await?;
        tracing::info!(collection = self.collection.name(), id = %entity.id(), "created document");
        Ok(entity)
    }

    /// Apply a partial update to a stored entity and persist the result.
    ///
    /// Fails with `NotFound` if the id is unknown and `EmptyUpdate` if the
    /// patch names no field. Sequence fields are replaced, never merged.
    pub async fn update(&self, id: &str, patch: E::Patch) -> StoreResult<E> {
        let mut entity = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                collection: E::COLLECTION,
                id: id.to_string(),
            })?;
        patch.apply(&mut entity)?;
        self.save(&entity).await?;
        tracing::info!(collection = self.collection.name(), id = %entity.id(), "updated document");
        Ok(entity)
    }
}

fn parse_key(id: &str) -> StoreResult<ObjectKey> {
    ObjectKey::from_id(&EntityId::parse(id)?)
}
