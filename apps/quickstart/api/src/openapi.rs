use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::{Modify, OpenApi};

/// Pulls the item endpoints, which carry absolute paths, into the root document.
struct ItemsDoc;

impl Modify for ItemsDoc {
    fn modify(&self, openapi: &mut OpenApiSpec) {
        openapi.merge(domain_items::handlers::ApiDoc::openapi());
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items Quickstart API",
        version = "0.1.0",
        description = "REST and GraphQL access to a catalogue of priced items"
    ),
    paths(crate::api::health::health),
    components(schemas(axum_helpers::ErrorResponse, crate::api::health::HealthResponse)),
    tags((name = "health", description = "Service health")),
    modifiers(&ItemsDoc)
)]
pub struct ApiDoc;
