//! Generic repository for one parent document holding ordered children.
//!
//! Every write loads the parent, applies the change to the decoded children,
//! and saves against the revision it loaded. A refused save means someone
//! else committed in between, so the change is replayed on fresh data.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::error::CollectionError;
use super::ordering::{apply_reorder, next_order, renumber, sort_by_order};
use crate::content::ContentKind;
use crate::document::validate::{reject_unknown_fields, validate_required_fields};
use crate::document::{Item, ItemId, ValidationError};
use crate::events::{CollectionAction, CollectionEvent, EventBus};
use crate::store::{CollectionStore, StoreError, StoredCollection};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

pub struct OrderedCollection<K: ContentKind> {
    store: Arc<dyn CollectionStore>,
    events: EventBus,
    seed: Vec<K::Fields>,
    max_attempts: u32,
    _kind: PhantomData<K>,
}

impl<K: ContentKind> OrderedCollection<K> {
    pub fn new(store: Arc<dyn CollectionStore>, events: EventBus) -> Self {
        Self {
            store,
            events,
            seed: K::seed(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            _kind: PhantomData,
        }
    }

    /// Replace the built-in seed used when the parent document is first created.
    pub fn with_seed(mut self, seed: Vec<K::Fields>) -> Self {
        self.seed = seed;
        self
    }

    /// How many times a write is tried before giving up with `Conflict`.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// All children, sorted by order. Creates the parent from seed on first use.
    pub async fn get_all(&self) -> Result<Vec<Item<K::Fields>>, CollectionError> {
        let stored = self.load_or_seed().await?;
        decode::<K>(&stored)
    }

    pub async fn get(&self, id: &ItemId) -> Result<Item<K::Fields>, CollectionError> {
        self.get_all()
            .await?
            .into_iter()
            .find(|item| item.id == *id)
            .ok_or_else(|| not_found::<K>(id))
    }

    /// Append a child after the current last one.
    pub async fn create(&self, fields: K::Fields) -> Result<Item<K::Fields>, CollectionError> {
        K::validate(&fields)?;
        let id = ItemId::generate();

        self.mutate(CollectionAction::Created, Some(&id), |items| {
            let order =
                next_order(items).ok_or_else(|| StoreError::OrderExhausted(K::KEY.to_string()))?;
            let item = Item::new(id.clone(), order, fields.clone());
            items.push(item.clone());
            Ok(item)
        })
        .await
    }

    /// Shallow-merge `patch` over the child's fields. `id` and `order` in the
    /// patch are ignored; keys the content type does not have are rejected.
    pub async fn update(
        &self,
        id: &ItemId,
        patch: Map<String, Value>,
    ) -> Result<Item<K::Fields>, CollectionError> {
        self.mutate(CollectionAction::Updated, Some(id), |items| {
            let item = items
                .iter_mut()
                .find(|item| item.id == *id)
                .ok_or_else(|| not_found::<K>(id))?;
            let merged = merge::<K>(item, &patch)?;
            *item = merged.clone();
            Ok(merged)
        })
        .await
    }

    /// Remove a child and close the gap it leaves.
    pub async fn delete(&self, id: &ItemId) -> Result<(), CollectionError> {
        self.mutate(CollectionAction::Deleted, Some(id), |items| {
            let position = items
                .iter()
                .position(|item| item.id == *id)
                .ok_or_else(|| not_found::<K>(id))?;
            items.remove(position);
            renumber(items);
            Ok(())
        })
        .await
    }

    /// Give each child the order of its position in `ids`, which must list
    /// every current child exactly once.
    pub async fn reorder(&self, ids: &[ItemId]) -> Result<Vec<Item<K::Fields>>, CollectionError> {
        self.mutate(CollectionAction::Reordered, None, |items| {
            apply_reorder(items, ids).map_err(|source| CollectionError::ReorderMismatch {
                collection: K::KEY.to_string(),
                source,
            })?;
            Ok(items.clone())
        })
        .await
    }

    async fn mutate<R, M>(
        &self,
        action: CollectionAction,
        item_id: Option<&ItemId>,
        mut apply: M,
    ) -> Result<R, CollectionError>
    where
        M: FnMut(&mut Vec<Item<K::Fields>>) -> Result<R, CollectionError>,
    {
        for attempt in 1..=self.max_attempts {
            let stored = self.load_or_seed().await?;
            let mut items = decode::<K>(&stored)?;
            let result = apply(&mut items)?;

            match self
                .store
                .save(K::KEY, &stored.revision, encode::<K>(&items)?)
                .await?
            {
                Some(saved) => {
                    tracing::debug!(
                        collection = K::KEY,
                        ?action,
                        revision = %saved.revision,
                        "collection updated"
                    );
                    self.publish(action, item_id.cloned(), &saved);
                    return Ok(result);
                }
                None => {
                    tracing::warn!(
                        collection = K::KEY,
                        attempt,
                        "revision changed during write, retrying"
                    );
                }
            }
        }

        Err(CollectionError::Conflict {
            collection: K::KEY.to_string(),
            attempts: self.max_attempts,
        })
    }

    async fn load_or_seed(&self) -> Result<StoredCollection, CollectionError> {
        if let Some(stored) = self.store.load(K::KEY).await? {
            return Ok(stored);
        }

        let seeded: Vec<_> = self
            .seed
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, fields)| Item::new(ItemId::generate(), index as u32, fields))
            .collect();
        let encoded = encode::<K>(&seeded)?;

        let stored = self.store.insert_if_absent(K::KEY, encoded.clone()).await?;
        // Fresh ids make the payload unique, so equality means our insert won.
        if stored.items == encoded {
            tracing::info!(collection = K::KEY, count = seeded.len(), "seeded collection");
            self.publish(CollectionAction::Seeded, None, &stored);
        }
        Ok(stored)
    }

    fn publish(&self, action: CollectionAction, item_id: Option<ItemId>, saved: &StoredCollection) {
        self.events.publish(CollectionEvent {
            collection: K::KEY.to_string(),
            action,
            item_id,
            revision: saved.revision.clone(),
            timestamp: saved.updated_at,
        });
    }
}

impl<K: ContentKind> Clone for OrderedCollection<K> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            events: self.events.clone(),
            seed: self.seed.clone(),
            max_attempts: self.max_attempts,
            _kind: PhantomData,
        }
    }
}

fn not_found<K: ContentKind>(id: &ItemId) -> CollectionError {
    CollectionError::NotFound {
        collection: K::KEY.to_string(),
        id: id.clone(),
    }
}

fn decode<K: ContentKind>(stored: &StoredCollection) -> Result<Vec<Item<K::Fields>>, CollectionError> {
    let mut items: Vec<Item<K::Fields>> = serde_json::from_value(stored.items.clone())
        .map_err(|source| StoreError::Malformed {
            key: stored.key.clone(),
            source,
        })?;
    sort_by_order(&mut items);
    Ok(items)
}

fn encode<K: ContentKind>(items: &[Item<K::Fields>]) -> Result<Value, CollectionError> {
    serde_json::to_value(items).map_err(|source| {
        StoreError::Malformed {
            key: K::KEY.to_string(),
            source,
        }
        .into()
    })
}

fn merge<K: ContentKind>(
    item: &Item<K::Fields>,
    patch: &Map<String, Value>,
) -> Result<Item<K::Fields>, CollectionError> {
    let mut changes = patch.clone();
    changes.remove("id");
    changes.remove("order");
    reject_unknown_fields(&changes, K::FIELDS)?;

    let mut record = match serde_json::to_value(item) {
        Ok(Value::Object(record)) => record,
        Ok(_) => return Err(ValidationError::NotAnObject.into()),
        Err(err) => return Err(ValidationError::Malformed(err.to_string()).into()),
    };
    record.extend(changes);
    validate_required_fields(&record, K::REQUIRED)?;

    let merged: Item<K::Fields> = serde_json::from_value(Value::Object(record))
        .map_err(|err| ValidationError::Malformed(err.to_string()))?;
    K::validate(&merged.fields)?;
    Ok(merged)
}
