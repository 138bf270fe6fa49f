//! Repository implementations for database access
//!
//! Each repository borrows one connection for its lifetime:
//! - absent rows come back as `None`, never as an error
//! - delete reports `DbError::NotFound` when nothing was removed

pub mod items;
pub mod products;

pub use items::{Item, ItemRepo, ItemUpdate, NewItem};
pub use products::{NewProduct, Product, ProductRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
