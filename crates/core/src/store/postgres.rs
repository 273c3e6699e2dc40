use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::migrate::Migrator;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{DocumentCollection, DocumentStore};
use crate::document::{ObjectKey, StoredDocument};
use crate::error::{StoreError, StoreResult};

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// PostgreSQL-backed store. All collections share the `documents` table,
/// partitioned by the `collection` column; content lives in JSONB.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    fn collection(&self, name: &'static str) -> Arc<dyn DocumentCollection> {
        Arc::new(PgCollection {
            pool: self.pool.clone(),
            name,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Handle to one collection inside the `documents` table.
#[derive(Debug, Clone)]
pub struct PgCollection {
    pool: PgPool,
    name: &'static str,
}

type DocumentRow = (Vec<u8>, Json<Map<String, Value>>);

impl PgCollection {
    fn to_document(&self, (id, Json(content)): DocumentRow) -> StoreResult<StoredDocument> {
        let key = ObjectKey::from_slice(&id).ok_or_else(|| StoreError::Malformed {
            collection: self.name,
            reason: format!("stored key has {} bytes, expected 12", id.len()),
        })?;
        Ok(StoredDocument { key, content })
    }
}

#[async_trait]
impl DocumentCollection for PgCollection {
    fn name(&self) -> &str {
        self.name
    }

    async fn upsert(&self, key: ObjectKey, content: Map<String, Value>) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO documents (collection, id, content)
             VALUES ($1, $2, $3)
             ON CONFLICT (collection, id)
             DO UPDATE SET content = EXCLUDED.content, updated_at = now()",
        )
        .bind(self.name)
        .bind(key.bytes().to_vec())
        .bind(Json(content))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_one(&self, key: ObjectKey) -> StoreResult<Option<StoredDocument>> {
        let row: Option<DocumentRow> =
            sqlx::query_as("SELECT id, content FROM documents WHERE collection = $1 AND id = $2")
                .bind(self.name)
                .bind(key.bytes().to_vec())
                .fetch_optional(&self.pool)
                .await?;
        row.map(|row| self.to_document(row)).transpose()
    }

    async fn find_all(&self) -> StoreResult<Vec<StoredDocument>> {
        let rows: Vec<DocumentRow> =
            sqlx::query_as("SELECT id, content FROM documents WHERE collection = $1")
                .bind(self.name)
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(|row| self.to_document(row)).collect()
    }

    async fn delete(&self, key: ObjectKey) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(self.name)
            .bind(key.bytes().to_vec())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
