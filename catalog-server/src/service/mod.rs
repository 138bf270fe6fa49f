//! Business layer over the repositories
//!
//! Services turn absent rows into `DbError::NotFound` so transport code
//! only ever sees a row or an error.

pub mod items;

pub use items::ItemService;
