//! Item repository
//!
//! Backs the items service. Updates are partial: only the fields present
//! in [`ItemUpdate`] are written, the rest keep their stored values.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};

use super::DbError;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Body for item creation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

/// Partial update; `None` leaves the column untouched.
///
/// An explicit JSON `null` is treated the same as an omitted field since
/// both columns are NOT NULL.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemUpdate {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Item repository
pub struct ItemRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ItemRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    #[tracing::instrument(skip(self, item))]
    pub async fn create(&mut self, item: NewItem) -> Result<Item, DbError> {
        let row = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(item_id = row.id, "item created");
        Ok(row)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let rows = sqlx::query_as::<_, Item>("SELECT id, name, description FROM items ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&mut self, id: i64) -> Result<Option<Item>, DbError> {
        let row = sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row)
    }

    /// Apply the fields present in `update`; `None` when no row has this id.
    ///
    /// A single `UPDATE` with `COALESCE` so an absent field keeps its
    /// current value without a prior read.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&mut self, id: i64, update: ItemUpdate) -> Result<Option<Item>, DbError> {
        let row = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = COALESCE(?, name),
                description = COALESCE(?, description)
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(update.name.as_deref())
        .bind(update.description.as_deref())
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    /// Delete an item, returning the id that was removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&mut self, id: i64) -> Result<i64, DbError> {
        let deleted: (i64,) = sqlx::query_as("DELETE FROM items WHERE id = ? RETURNING id")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("item", id))?;

        Ok(deleted.0)
    }
}
