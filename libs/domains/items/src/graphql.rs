//! GraphQL schema over [`ItemService`].
//!
//! ```graphql
//! type Query {
//!   allItems: [Item!]!
//!   item(value: Int!): Item
//!   itemByName(name: String!): [Item!]!
//!   cheaperThan(price: Decimal!): [Item!]!
//! }
//!
//! type Mutation {
//!   addItem(name: String!, price: Decimal!): Int!
//!   deleteItem(value: Int!): Boolean
//! }
//! ```

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use rust_decimal::Decimal;

use crate::error::ItemError;
use crate::models::{CreateItem, Item, ItemId};
use crate::service::ItemService;

pub type ItemSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema with `service` available to every resolver
pub fn build_schema(service: ItemService) -> ItemSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Resolver error carrying only the display message; storage detail is logged.
fn resolver_error(err: ItemError) -> async_graphql::Error {
    if let ItemError::Database(source) = &err {
        tracing::error!(error = ?source, "Storage failure in GraphQL resolver");
    }
    async_graphql::Error::new(err.to_string())
}

#[Object]
impl Item {
    async fn id(&self) -> i64 {
        self.id.0
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn price(&self) -> Decimal {
        self.price
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_items(&self, ctx: &Context<'_>) -> Result<Vec<Item>> {
        Ok(ctx.data::<ItemService>()?.all_items().await.map_err(resolver_error)?)
    }

    /// `null` when no item has this id
    async fn item(&self, ctx: &Context<'_>, value: i64) -> Result<Option<Item>> {
        Ok(ctx.data::<ItemService>()?.get_item(ItemId(value)).await.map_err(resolver_error)?)
    }

    async fn item_by_name(&self, ctx: &Context<'_>, name: String) -> Result<Vec<Item>> {
        Ok(ctx.data::<ItemService>()?.items_by_name(&name).await.map_err(resolver_error)?)
    }

    async fn cheaper_than(&self, ctx: &Context<'_>, price: Decimal) -> Result<Vec<Item>> {
        Ok(ctx.data::<ItemService>()?.items_cheaper_than(price).await.map_err(resolver_error)?)
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Returns the new item's id
    async fn add_item(&self, ctx: &Context<'_>, name: String, price: Decimal) -> Result<i64> {
        let item = ctx
            .data::<ItemService>()?
            .add_item(CreateItem { name, price })
            .await
            .map_err(resolver_error)?;
        Ok(item.id.0)
    }

    /// Always resolves to `null`
    async fn delete_item(&self, ctx: &Context<'_>, value: i64) -> Result<Option<bool>> {
        ctx.data::<ItemService>()?
            .delete_item(ItemId(value))
            .await
            .map_err(resolver_error)?;
        Ok(None)
    }
}
