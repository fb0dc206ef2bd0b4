use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};
use validator::Validate;

use super::extractors::ValidatedId;
use crate::{
    error::Result,
    models::{CreateItemInput, Item, UpdateItemInput},
    AppState,
};

/// Build item routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item)) // GET, POST /items
        .route(
            "/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        ) // GET, PATCH, DELETE /items/{id}
}

fn parse_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<i64> {
    let Path(raw_id) = path?;
    ValidatedId::parse(&raw_id)
}

/// List all items
/// GET /items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items, ordered by id", body = Vec<Item>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    let items = state.item_service.list_items().await?;
    debug!(count = items.len(), "Listed items");
    Ok(Json(items))
}

/// Fetch a single item
/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Item>> {
    let id = parse_id(path)?;
    let item = state.item_service.get_item(id).await?;
    Ok(Json(item))
}

/// Create an item
/// POST /items
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemInput,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Malformed body or failed validation"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>)> {
    let Json(input) = body?;
    input.validate()?;

    let item = state.item_service.create_item(input).await?;

    info!(item_id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Partially update an item
/// PATCH /items/{id}
///
/// The id is checked before the body is decoded, and the body is validated
/// before the item service is called.
#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    request_body = UpdateItemInput,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid id, malformed body or failed validation"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Json<UpdateItemInput>, JsonRejection>,
) -> Result<Json<Item>> {
    let id = parse_id(path)?;

    let Json(input) = body?;
    input.validate()?;

    debug!(item_id = id, fields = ?input, "Updating item");

    let item = state.item_service.update_item(id, input).await?;

    info!(item_id = item.id, "Item updated");
    Ok(Json(item))
}

/// Delete an item
/// DELETE /items/{id}
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<StatusCode> {
    let id = parse_id(path)?;
    state.item_service.delete_item(id).await?;

    info!(item_id = id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
