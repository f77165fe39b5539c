use std::sync::Arc;

use rayob_core::auth::TokenKeys;
use rayob_core::collection::OrderedCollection;
use rayob_core::content::ContentKind;
use rayob_core::events::EventBus;
use rayob_core::store::CollectionStore;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: Arc<dyn CollectionStore>,
    config: AppConfig,
    event_bus: EventBus,
    token_keys: TokenKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn CollectionStore>, config: AppConfig, event_bus: EventBus) -> Self {
        let token_keys = TokenKeys::from_secret(config.jwt_secret.as_bytes());
        Self {
            inner: Arc::new(InnerState {
                store,
                config,
                event_bus,
                token_keys,
            }),
        }
    }

    pub fn store(&self) -> &dyn CollectionStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.event_bus
    }

    pub fn token_keys(&self) -> &TokenKeys {
        &self.inner.token_keys
    }

    /// Repository for one content type over the shared store.
    pub fn collection<K: ContentKind>(&self) -> OrderedCollection<K> {
        OrderedCollection::new(self.inner.store.clone(), self.inner.event_bus.clone())
            .with_max_attempts(self.inner.config.write_max_attempts)
    }
}

#[cfg(test)]
impl AppState {
    pub fn for_tests() -> Self {
        Self::for_tests_with(Arc::new(rayob_core::store::MemoryStore::new()))
    }

    pub fn for_tests_with(store: Arc<dyn CollectionStore>) -> Self {
        Self::new(store, AppConfig::for_tests(), EventBus::new(64))
    }
}
