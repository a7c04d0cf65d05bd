//! `/graphql`: POST executes queries, GET serves GraphiQL.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use domain_items::{ItemService, build_schema};

const ENDPOINT: &str = "/graphql";

pub fn router(service: ItemService) -> Router {
    let schema = build_schema(service);
    Router::new().route(ENDPOINT, get(graphiql).post_service(GraphQL::new(schema)))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use domain_items::InMemoryItemRepository;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(ItemService::new(InMemoryItemRepository::new()))
    }

    async fn post_query(app: Router, body: Value) -> Value {
        let response = app
            .oneshot(
                Request::post(ENDPOINT)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() {
        let response = app()
            .oneshot(Request::get(ENDPOINT).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("graphiql"));
    }

    #[tokio::test]
    async fn test_mutation_then_query_over_http() {
        let app = app();

        let added = post_query(
            app.clone(),
            json!({ "query": r#"mutation { addItem(name: "Apple", price: "10") }"# }),
        )
        .await;
        let id = added["data"]["addItem"].as_i64().unwrap();

        let found = post_query(
            app,
            json!({
                "query": "query($id: Int!) { item(value: $id) { id name } }",
                "variables": { "id": id }
            }),
        )
        .await;

        assert_eq!(found["data"]["item"]["id"], id);
        assert_eq!(found["data"]["item"]["name"], "Apple");
    }

    #[tokio::test]
    async fn test_missing_item_resolves_to_null() {
        let result = post_query(app(), json!({ "query": "{ item(value: 99) { id } }" })).await;

        assert!(result["data"]["item"].is_null());
        assert!(result.get("errors").is_none());
    }
}
