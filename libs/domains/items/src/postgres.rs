use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::instrument;

use crate::{
    entity,
    error::ItemResult,
    models::{CreateItem, Item, ItemId},
    repository::ItemRepository,
};

/// SeaORM-backed ItemRepository; each operation is a single statement.
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list(&self, query: sea_orm::Select<entity::Entity>) -> ItemResult<Vec<Item>> {
        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Item::from).collect())
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let model = entity::ActiveModel::from(input).insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        self.list(entity::Entity::find()).await
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> ItemResult<Vec<Item>> {
        self.list(entity::Entity::find().filter(entity::Column::Name.eq(name)))
            .await
    }

    #[instrument(skip(self))]
    async fn get_cheaper_than(&self, max_price: Decimal) -> ItemResult<Vec<Item>> {
        self.list(entity::Entity::find().filter(entity::Column::Price.lt(max_price)))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ItemId) -> ItemResult<()> {
        let result = entity::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = %id, "Deleted item");
        }
        Ok(())
    }
}
