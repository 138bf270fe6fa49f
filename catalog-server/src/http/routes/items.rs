//! Item endpoints
//!
//! Resource paths over the `items` table. Handlers go through
//! [`ItemService`], which reports a missing row as NotFound.

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{Item, ItemUpdate, NewItem};
use crate::http::error::ApiError;
use crate::http::extractors::{AppJson, DbSession, ValidId};
use crate::http::server::AppState;
use crate::service::ItemService;

/// PATCH /items/{id} - update only the supplied fields
async fn update_item(
    ValidId(id): ValidId,
    mut session: DbSession,
    AppJson(req): AppJson<ItemUpdate>,
) -> Result<Json<Item>, ApiError> {
    let item = ItemService::new(&mut session)
        .update_item(id.get(), req)
        .await?;

    Ok(Json(item))
}

/// POST /items - create an item
async fn create_item(
    mut session: DbSession,
    AppJson(req): AppJson<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = ItemService::new(&mut session).create_item(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items - list all items
async fn list_items(mut session: DbSession) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemService::new(&mut session).list_items().await?;
    Ok(Json(items))
}

/// GET /items/{id} - get a single item
async fn get_item(ValidId(id): ValidId, mut session: DbSession) -> Result<Json<Item>, ApiError> {
    let item = ItemService::new(&mut session).get_item(id.get()).await?;
    Ok(Json(item))
}

/// DELETE /items/{id} - delete an item
async fn delete_item(ValidId(id): ValidId, mut session: DbSession) -> Result<StatusCode, ApiError> {
    let deleted = ItemService::new(&mut session).delete_item(id.get()).await?;
    tracing::info!(item_id = deleted, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
}
