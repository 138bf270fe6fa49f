//! Database layer - connection pool, schema, and repositories
//!
//! - One `SqlitePool` per process, constructed by the caller and passed down
//! - Repositories borrow a single connection; they never reach for the pool
//! - Every write is one statement using `RETURNING`, no read-then-write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    /// Migrated database in a temporary directory; removed on drop.
    pub(crate) struct TestDb {
        pub pool: SqlitePool,
        _dir: TempDir,
    }

    pub(crate) async fn test_db() -> TestDb {
        test_db_with_connections(5).await
    }

    pub(crate) async fn test_db_with_connections(max_connections: u32) -> TestDb {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
        let pool = super::create_pool_with_options(&url, max_connections)
            .await
            .expect("pool");
        super::migrations::run(&pool).await.expect("migrations");
        TestDb { pool, _dir: dir }
    }
}
