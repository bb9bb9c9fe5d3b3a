use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use tracing::log::LevelFilter;

async fn execute_pragmas(pool: &SqlitePool, pragmas: &[&str]) -> Result<()> {
    for &pragma in pragmas {
        sqlx::query(pragma).execute(pool).await?;
    }

    Ok(())
}

/// Applied on every read-write connection.
const WRITE_PRAGMAS: [&str; 6] = [
    "PRAGMA journal_mode = WAL",
    "PRAGMA busy_timeout = 5000",
    "PRAGMA synchronous = NORMAL",
    "PRAGMA cache_size = -20000",
    "PRAGMA foreign_keys = true",
    "PRAGMA temp_store = memory",
];

/// Read-only connections cannot change the journal or sync mode.
const READ_PRAGMAS: [&str; 3] = [
    "PRAGMA busy_timeout = 5000",
    "PRAGMA cache_size = -20000",
    "PRAGMA temp_store = memory",
];

/// Create a read-only connection pool for report queries
///
/// The database file must already exist, run `migrate` first.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    execute_pragmas(&pool, &READ_PRAGMAS).await?;

    tracing::info!(
        "Created read-only pool with {} max connections",
        max_connections
    );

    Ok(pool)
}

/// Create a standard read-write pool
///
/// Used by commands that write (migrate, import) and by tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    execute_pragmas(&pool, &WRITE_PRAGMAS).await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let pool = create_pool(":memory:", 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "memory"); // WAL doesn't apply to :memory:

        let foreign_keys: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(foreign_keys.0, 1);

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2); // 2 = memory
    }

    #[tokio::test]
    async fn test_read_pool_is_read_only_and_keeps_writer_journal() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("pupuk.sqlite3");
        let url = format!("sqlite:{}?mode=rwc", path.to_str().unwrap());

        let pool = create_pool(&url, 1).await.unwrap();
        sqlx::query("CREATE TABLE estate (name TEXT)")
            .execute(&pool)
            .await
            .unwrap();

        let read_pool = create_read_pool(&format!("sqlite:{}", path.to_str().unwrap()), 1)
            .await
            .unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&read_pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "wal");

        let busy_timeout: (i32,) = sqlx::query_as("PRAGMA busy_timeout")
            .fetch_one(&read_pool)
            .await
            .unwrap();
        assert_eq!(busy_timeout.0, 5000);

        let insert = sqlx::query("INSERT INTO estate (name) VALUES ('Kebun A')")
            .execute(&read_pool)
            .await;
        assert!(insert.is_err());

        read_pool.close().await;
        pool.close().await;
    }
}
