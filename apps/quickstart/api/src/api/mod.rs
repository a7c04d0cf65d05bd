use axum::Router;

pub mod graphql;
pub mod health;

/// All application routes, state already applied.
///
/// REST item routes come from `domain_items`; GraphQL and health are local.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(domain_items::handlers::router(state.items.clone()))
        .merge(graphql::router(state.items.clone()))
        .merge(health::router(state.health.clone()))
}
