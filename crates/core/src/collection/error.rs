use thiserror::Error;

use crate::document::{ItemId, ValidationError};
use crate::store::StoreError;

/// Why a reorder request was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("id {0} is not in the collection")]
    Unknown(ItemId),
    #[error("id {0} appears more than once")]
    Duplicate(ItemId),
    #[error("id {0} is missing from the new order")]
    Missing(ItemId),
}

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{collection} item {id} not found")]
    NotFound { collection: String, id: ItemId },

    #[error("reorder rejected for {collection}: {source}")]
    ReorderMismatch {
        collection: String,
        #[source]
        source: ReorderError,
    },

    #[error("{collection} was modified concurrently; gave up after {attempts} attempts")]
    Conflict { collection: String, attempts: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
