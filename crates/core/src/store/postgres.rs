use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::{new_revision, CollectionStore, StoreError, StoredCollection};

/// PostgreSQL-backed store. One row per parent document in `collections`.
#[derive(Debug, Clone)]
pub struct PgCollectionStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct CollectionRow {
    key: String,
    items: Json<Value>,
    revision: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CollectionRow> for StoredCollection {
    fn from(row: CollectionRow) -> Self {
        StoredCollection {
            key: row.key,
            items: row.items.0,
            revision: row.revision,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgCollectionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CollectionStore for PgCollectionStore {
    async fn load(&self, key: &str) -> Result<Option<StoredCollection>, StoreError> {
        let row = sqlx::query_as::<_, CollectionRow>(
            "SELECT key, items, revision, created_at, updated_at
             FROM collections
             WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredCollection::from))
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        items: Value,
    ) -> Result<StoredCollection, StoreError> {
        let inserted = sqlx::query_as::<_, CollectionRow>(
            "INSERT INTO collections (key, items, revision, created_at, updated_at)
             VALUES ($1, $2, $3, now(), now())
             ON CONFLICT (key) DO NOTHING
             RETURNING key, items, revision, created_at, updated_at",
        )
        .bind(key)
        .bind(Json(items))
        .bind(new_revision())
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(row) => {
                tracing::debug!(collection = key, "inserted parent document");
                Ok(row.into())
            }
            // Lost the race to another writer; hand back theirs.
            None => self
                .load(key)
                .await?
                .ok_or_else(|| StoreError::Vanished(key.to_string())),
        }
    }

    async fn save(
        &self,
        key: &str,
        expected_revision: &str,
        items: Value,
    ) -> Result<Option<StoredCollection>, StoreError> {
        let row = sqlx::query_as::<_, CollectionRow>(
            "UPDATE collections
             SET items = $1, revision = $2, updated_at = now()
             WHERE key = $3 AND revision = $4
             RETURNING key, items, revision, created_at, updated_at",
        )
        .bind(Json(items))
        .bind(new_revision())
        .bind(key)
        .bind(expected_revision)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredCollection::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
