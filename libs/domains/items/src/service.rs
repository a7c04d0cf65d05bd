//! Item Service - business logic layer

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::events::{EventSubscriber, ItemEvent, LoggingSubscriber};
use crate::models::{CreateItem, Item, ItemFilter, ItemId};
use crate::repository::ItemRepository;

/// Reads pass straight through to the repository; mutations publish an
/// [`ItemEvent`] once the repository call has succeeded.
///
/// Cloning is cheap, so one instance can back both the REST and GraphQL APIs.
#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    subscriber: Arc<dyn EventSubscriber>,
}

impl ItemService {
    /// Service publishing to a [`LoggingSubscriber`]
    pub fn new(repository: impl ItemRepository + 'static) -> Self {
        Self::with_subscriber(repository, LoggingSubscriber)
    }

    pub fn with_subscriber(
        repository: impl ItemRepository + 'static,
        subscriber: impl EventSubscriber + 'static,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            subscriber: Arc::new(subscriber),
        }
    }

    /// Validate, insert, then publish `ItemAdded` with the stored item.
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn add_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let item = self.repository.create(input).await?;
        self.publish(ItemEvent::ItemAdded(item.clone())).await;
        Ok(item)
    }

    /// Delete, then publish `ItemDeleted`, whether or not the item existed.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<()> {
        self.repository.delete(id).await?;
        self.publish(ItemEvent::ItemDeleted(id)).await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Option<Item>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn all_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn items_by_name(&self, name: &str) -> ItemResult<Vec<Item>> {
        self.repository.get_by_name(name).await
    }

    #[instrument(skip(self))]
    pub async fn items_cheaper_than(&self, max_price: Decimal) -> ItemResult<Vec<Item>> {
        self.repository.get_cheaper_than(max_price).await
    }

    /// Dispatch a list query to the matching repository lookup.
    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        match (filter.name, filter.cheaper_than) {
            (None, None) => self.all_items().await,
            (Some(name), None) => self.items_by_name(&name).await,
            (None, Some(max_price)) => self.items_cheaper_than(max_price).await,
            (Some(name), Some(max_price)) => {
                let mut items = self.items_by_name(&name).await?;
                items.retain(|item| item.price < max_price);
                Ok(items)
            }
        }
    }

    async fn publish(&self, event: ItemEvent) {
        if let Err(e) = self.subscriber.notify(&event).await {
            tracing::warn!(error = %e, event = %event, "Event subscriber failed");
        }
    }
}
