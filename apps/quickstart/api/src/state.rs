//! Shared application state.

use database::postgres::{DatabaseConnection, HealthCheckService};
use domain_items::{ItemService, PgItemRepository};

/// Cloned into each router; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool, closed during shutdown
    pub db: DatabaseConnection,
    pub items: ItemService,
    pub health: HealthCheckService,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: DatabaseConnection) -> Self {
        let items = ItemService::new(PgItemRepository::new(db.clone()));
        let health = HealthCheckService::new(db.clone());

        Self {
            config,
            db,
            items,
            health,
        }
    }
}
