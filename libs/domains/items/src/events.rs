//! Domain events published after item mutations.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, PartialEq)]
pub enum ItemEvent {
    ItemAdded(Item),
    ItemDeleted(ItemId),
}

impl fmt::Display for ItemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemEvent::ItemAdded(item) => write!(f, "Item added: {}", item),
            ItemEvent::ItemDeleted(id) => write!(f, "Item deleted: {}", id),
        }
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event delivery failed: {0}")]
    Delivery(String),
}

/// Receives every [`ItemEvent`]. Failures are reported back but never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    async fn notify(&self, event: &ItemEvent) -> Result<(), EventError>;
}

/// Writes one log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubscriber;

#[async_trait]
impl EventSubscriber for LoggingSubscriber {
    async fn notify(&self, event: &ItemEvent) -> Result<(), EventError> {
        tracing::info!(target: "item_events", "{}", event);
        Ok(())
    }
}
