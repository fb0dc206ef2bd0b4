use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Item API",
        version = "0.1.0",
        description = "Inventory items: list, fetch, create, partial update and delete",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::items::list_items,
        crate::handlers::items::get_item,
        crate::handlers::items::create_item,
        crate::handlers::items::update_item,
        crate::handlers::items::delete_item,
    ),
    components(
        schemas(
            crate::models::Item,
            crate::models::CreateItemInput,
            crate::models::UpdateItemInput,
            crate::handlers::health::HealthStatus,
            crate::handlers::health::ItemStoreHealth,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "items", description = "Inventory items")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
