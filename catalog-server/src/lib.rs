//! catalog-server: CRUD HTTP services over a single-table catalog
//!
//! Two services share one storage handle:
//! - products: verb-prefixed paths with full-replace updates
//! - items: resource paths with a service layer and partial updates
//!
//! Each request holds one pooled connection for its whole lifetime
//! (see [`http::extractors::DbSession`]).

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServiceSelection};
