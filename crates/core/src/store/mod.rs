//! Persistence for parent documents.
//!
//! A parent document is stored as one row/entry keyed by its content type,
//! holding the children as a JSON array plus a revision string. Writers must
//! present the revision they read; a save against a stale revision is refused
//! and the caller decides whether to replay.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgCollectionStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored collection {key} is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("collection {0} has no order value left for a new item")]
    OrderExhausted(String),

    #[error("collection {0} disappeared during insert")]
    Vanished(String),
}

/// Snapshot of one parent document as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCollection {
    pub key: String,
    /// Children as a JSON array.
    pub items: Value,
    pub revision: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch the parent document, if it was ever created.
    async fn load(&self, key: &str) -> Result<Option<StoredCollection>, StoreError>;

    /// Create the parent document with `items` unless it already exists.
    /// Returns whatever is stored once the call completes.
    async fn insert_if_absent(&self, key: &str, items: Value)
        -> Result<StoredCollection, StoreError>;

    /// Replace the children if the stored revision still equals `expected_revision`.
    /// `None` means the revision moved (or the document is gone) and nothing was written.
    async fn save(
        &self,
        key: &str,
        expected_revision: &str,
        items: Value,
    ) -> Result<Option<StoredCollection>, StoreError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for health output.
    fn backend(&self) -> &'static str;
}

/// Fresh opaque revision string.
pub fn new_revision() -> String {
    Uuid::new_v4().simple().to_string()
}
