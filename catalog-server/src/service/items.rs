//! Item service - forwards to [`ItemRepo`] and maps absence to NotFound

use sqlx::SqliteConnection;

use crate::db::repos::{DbError, Item, ItemRepo, ItemUpdate, NewItem};

/// Item service bound to one request's connection
pub struct ItemService<'c> {
    repo: ItemRepo<'c>,
}

impl<'c> ItemService<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            repo: ItemRepo::new(conn),
        }
    }

    /// Partially update an item.
    ///
    /// # Errors
    ///
    /// `DbError::NotFound` when no item has this id.
    pub async fn update_item(&mut self, id: i64, update: ItemUpdate) -> Result<Item, DbError> {
        if update.is_empty() {
            tracing::debug!(item_id = id, "patch carries no fields, returning current row");
        }

        self.repo
            .update(id, update)
            .await?
            .ok_or_else(|| DbError::not_found("item", id))
    }

    pub async fn create_item(&mut self, item: NewItem) -> Result<Item, DbError> {
        self.repo.create(item).await
    }

    pub async fn list_items(&mut self) -> Result<Vec<Item>, DbError> {
        self.repo.list().await
    }

    pub async fn get_item(&mut self, id: i64) -> Result<Item, DbError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DbError::not_found("item", id))
    }

    pub async fn delete_item(&mut self, id: i64) -> Result<i64, DbError> {
        self.repo.delete(id).await
    }
}
