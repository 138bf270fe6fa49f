//! Custom Axum extractors

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use super::error::ApiError;
use super::server::AppState;
use crate::db::repos::DbError;
use crate::models::{RecordId, ValidationError};

/// One pooled connection held for the lifetime of a request.
///
/// The connection goes back to the pool when this value is dropped, which
/// happens when the handler returns, errors, or is cancelled.
pub struct DbSession(PoolConnection<Sqlite>);

impl FromRequestParts<Arc<AppState>> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let conn = state
            .pool
            .acquire()
            .await
            .map_err(|e| ApiError::Database(DbError::Sqlx(e)))?;

        tracing::trace!("session acquired");
        Ok(Self(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}

/// Extract and validate an integer row id from path
pub struct ValidId(pub RecordId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(RecordId::parse(&id)?))
    }
}

/// JSON body whose rejections use the `{"detail": ...}` error shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
