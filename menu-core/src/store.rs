//! Storage abstraction for menu items.
//!
//! # Design
//! `ItemStore` is the narrow seam between the service and whatever holds the
//! data: exactly five operations, all keyed by the item id. The default
//! implementation is an in-memory map guarded by an async `RwLock`; per-call
//! atomicity is the only guarantee, so concurrent writes to the same id race
//! and the last write wins.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::item::Item;

/// Process-lifetime mapping from id to [`Item`].
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert or overwrite a batch of items. Used to seed defaults at startup.
    async fn save_all(&self, items: Vec<Item>) -> Result<(), StoreError>;

    /// Insert or overwrite the item at its id; returns the stored item.
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Every stored item; iteration order is unspecified.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Remove the entry if present. Absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

/// In-memory [`ItemStore`]. State lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<i64, Item>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn save_all(&self, items: Vec<Item>) -> Result<(), StoreError> {
        let mut map = self.items.write().await;
        for item in items {
            map.insert(item.id, item);
        }
        Ok(())
    }

    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.items.write().await.remove(&id);
        Ok(())
    }
}
