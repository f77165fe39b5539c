use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// One child of a parent document: identity and position, plus the content
/// type's own fields flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<F> {
    pub id: ItemId,
    pub order: u32,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Item<F> {
    pub fn new(id: ItemId, order: u32, fields: F) -> Self {
        Self { id, order, fields }
    }
}
