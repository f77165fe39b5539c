use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::ItemId;

/// What a successful write did to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionAction {
    Seeded,
    Created,
    Updated,
    Deleted,
    Reordered,
}

/// Emitted after every committed write, consumed by SSE listeners.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEvent {
    pub collection: String,
    pub action: CollectionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    pub revision: String,
    pub timestamp: DateTime<Utc>,
}
