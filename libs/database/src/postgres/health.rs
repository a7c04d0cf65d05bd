use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::DatabaseError;

/// Run `SELECT 1` against the database.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    Ok(())
}

/// Database reachability as reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatabaseHealth {
    Up,
    Down,
}

impl DatabaseHealth {
    pub fn is_up(&self) -> bool {
        matches!(self, DatabaseHealth::Up)
    }
}

/// Probes the connection pool on demand.
///
/// Never fails: any error while probing is logged and reported as
/// [`DatabaseHealth::Down`].
#[derive(Clone)]
pub struct HealthCheckService {
    db: DatabaseConnection,
}

impl HealthCheckService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn check(&self) -> DatabaseHealth {
        match check_health(&self.db).await {
            Ok(()) => DatabaseHealth::Up,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                DatabaseHealth::Down
            }
        }
    }
}
