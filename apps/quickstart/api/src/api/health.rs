//! Database health endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use database::postgres::{DatabaseHealth, HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `UP` or `DOWN`
    #[schema(value_type = String, example = "UP")]
    pub status: DatabaseHealth,
}

pub fn router(health: HealthCheckService) -> Router {
    Router::new()
        .route("/health", get(self::health))
        .with_state(health)
}

/// Report whether the database answers a trivial query
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(
    State(health): State<HealthCheckService>,
) -> (StatusCode, Json<HealthResponse>) {
    let status = health.check().await;
    let code = if status.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(HealthResponse { status }))
}
