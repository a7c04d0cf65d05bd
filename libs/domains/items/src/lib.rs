//! Items Domain
//!
//! ```text
//! ┌──────────────────────┐
//! │ Handlers / GraphQL   │  ← REST endpoints and GraphQL resolvers
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Service              │  ← validation, event publishing
//! └─────┬──────────┬─────┘
//!       │          │
//! ┌─────▼──────┐ ┌─▼──────────────┐
//! │ Repository │ │ EventSubscriber│
//! └────────────┘ └────────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_items::{InMemoryItemRepository, ItemService, graphql, handlers};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let router = handlers::router(service.clone());
//! let schema = graphql::build_schema(service);
//! ```

pub mod entity;
pub mod error;
pub mod events;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use events::{EventError, EventSubscriber, ItemEvent, LoggingSubscriber};
pub use graphql::{ItemSchema, build_schema};
pub use models::{CreateItem, Item, ItemFilter, ItemId};
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
