use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemId};

/// Item persistence.
///
/// Every list is ordered by ascending id. `delete` succeeds whether or not the
/// id exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert an item; the storage assigns the id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    async fn get_all(&self) -> ItemResult<Vec<Item>>;

    /// Items whose name equals `name` exactly (case-sensitive)
    async fn get_by_name(&self, name: &str) -> ItemResult<Vec<Item>>;

    /// Items with `price < max_price`
    async fn get_cheaper_than(&self, max_price: Decimal) -> ItemResult<Vec<Item>>;

    async fn delete(&self, id: ItemId) -> ItemResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    items: BTreeMap<ItemId, Item>,
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&Item) -> bool) -> Vec<Item> {
        let store = self.store.read().await;
        store
            .items
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let item = Item::new(ItemId(store.last_id), input.name, input.price);
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.select(|_| true).await)
    }

    async fn get_by_name(&self, name: &str) -> ItemResult<Vec<Item>> {
        Ok(self.select(|item| item.name == name).await)
    }

    async fn get_cheaper_than(&self, max_price: Decimal) -> ItemResult<Vec<Item>> {
        Ok(self.select(|item| item.price < max_price).await)
    }

    async fn delete(&self, id: ItemId) -> ItemResult<()> {
        let mut store = self.store.write().await;

        if store.items.remove(&id).is_some() {
            tracing::info!(item_id = %id, "Deleted item");
        }
        Ok(())
    }
}
