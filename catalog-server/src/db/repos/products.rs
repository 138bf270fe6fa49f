//! Product repository
//!
//! Backs the verb-prefixed products service:
//! - update: overwrites both text columns unconditionally
//! - delete: returns the removed id, NotFound when nothing matched

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};

use super::DbError;

/// Product record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: String,
}

/// Body for create and full-replace update
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

/// Product repository
pub struct ProductRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ProductRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a product and return it with its generated id.
    #[tracing::instrument(skip(self, product))]
    pub async fn create(&mut self, product: NewProduct) -> Result<Product, DbError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description)
            VALUES (?, ?)
            RETURNING product_id, name, description
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(product_id = row.product_id, "product created");
        Ok(row)
    }

    /// All products in primary-key order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&mut self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT product_id, name, description FROM products ORDER BY product_id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }

    /// Point lookup; `None` when no row has this id.
    #[tracing::instrument(skip(self))]
    pub async fn get(&mut self, product_id: i64) -> Result<Option<Product>, DbError> {
        let row = sqlx::query_as::<_, Product>(
            "SELECT product_id, name, description FROM products WHERE product_id = ?",
        )
        .bind(product_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    /// Overwrite name and description; `None` when no row has this id.
    #[tracing::instrument(skip(self, product))]
    pub async fn update(
        &mut self,
        product_id: i64,
        product: NewProduct,
    ) -> Result<Option<Product>, DbError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?, description = ?
            WHERE product_id = ?
            RETURNING product_id, name, description
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    /// Delete a product, returning the id that was removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&mut self, product_id: i64) -> Result<i64, DbError> {
        let deleted: (i64,) = sqlx::query_as(
            "DELETE FROM products WHERE product_id = ? RETURNING product_id",
        )
        .bind(product_id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("product", product_id))?;

        Ok(deleted.0)
    }
}
