//! Schema setup for the catalog tables
//!
//! Runs at startup; every statement is `IF NOT EXISTS` so restarts are no-ops.

use sqlx::SqlitePool;

/// Create the `products` and `items` tables and their indexes.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running catalog migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Secondary indexes on the text columns
    for statement in [
        "CREATE INDEX IF NOT EXISTS ix_products_name ON products (name)",
        "CREATE INDEX IF NOT EXISTS ix_products_description ON products (description)",
        "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)",
        "CREATE INDEX IF NOT EXISTS ix_items_description ON items (description)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Catalog migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
        let pool = create_pool(&url).await.expect("pool");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('products', 'items') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("query");

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["items".to_string(), "products".to_string()]);
    }
}
