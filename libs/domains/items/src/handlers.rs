use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, IdPath, QueryParams, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, ItemId};
use crate::service::ItemService;

const TAG: &str = "items";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, delete_item),
    components(
        schemas(Item, CreateItem, ItemFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// `/items` and `/items/{id}` routes
pub fn router(service: ItemService) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .with_state(service)
}

/// List items, optionally by exact name and/or maximum price
#[utoipa::path(
    get,
    path = "/items",
    tag = TAG,
    params(ItemFilter),
    responses(
        (status = 200, description = "Items ordered by id", body = Vec<Item>),
        (status = 400, description = "Unparsable query string", body = ErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items(
    State(service): State<ItemService>,
    QueryParams(filter): QueryParams<ItemFilter>,
) -> ItemResult<Json<Vec<Item>>> {
    Ok(Json(service.list_items(filter).await?))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item(
    State(service): State<ItemService>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<(StatusCode, Json<Item>)> {
    let item = service.add_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item(
    State(service): State<ItemService>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let id = ItemId(id);
    service
        .get_item(id)
        .await?
        .map(Json)
        .ok_or(ItemError::NotFound(id))
}

/// Delete an item; succeeds whether or not it exists
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted or already absent"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item(
    State(service): State<ItemService>,
    IdPath(id): IdPath,
) -> ItemResult<StatusCode> {
    service.delete_item(ItemId(id)).await?;
    Ok(StatusCode::OK)
}
