//! Product endpoints
//!
//! Verb-prefixed paths over the `products` table; PUT replaces both fields.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::db::repos::{DbError, NewProduct, Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AppJson, DbSession, ValidId};
use crate::http::server::AppState;

/// POST /add_products/ - create a product
async fn create_product(
    mut session: DbSession,
    AppJson(req): AppJson<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&mut session).create(req).await?;
    Ok(Json(product))
}

/// GET /get_products/ - list all products
async fn list_products(mut session: DbSession) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&mut session).list().await?;
    Ok(Json(products))
}

/// GET /get_products/{id} - get a single product
async fn get_product(
    ValidId(id): ValidId,
    mut session: DbSession,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&mut session)
        .get(id.get())
        .await?
        .ok_or_else(|| DbError::not_found("product", id.get()))?;

    Ok(Json(product))
}

/// PUT /update_products/{id} - overwrite name and description
async fn update_product(
    ValidId(id): ValidId,
    mut session: DbSession,
    AppJson(req): AppJson<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&mut session)
        .update(id.get(), req)
        .await?
        .ok_or_else(|| DbError::not_found("product", id.get()))?;

    Ok(Json(product))
}

/// DELETE /delete_products/{id} - delete a product
async fn delete_product(
    ValidId(id): ValidId,
    mut session: DbSession,
) -> Result<Json<String>, ApiError> {
    let deleted = ProductRepo::new(&mut session).delete(id.get()).await?;
    tracing::info!(product_id = deleted, "product deleted");
    Ok(Json(format!("Deleted product ID: {}", deleted)))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_products/", post(create_product))
        .route("/get_products/", get(list_products))
        .route("/get_products/{id}", get(get_product))
        .route("/update_products/{id}", put(update_product))
        .route("/delete_products/{id}", delete(delete_product))
}
