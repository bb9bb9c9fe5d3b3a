use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

#[tokio::test]
async fn test_migrator_creates_fertilization_tables() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let mut conn = pool.acquire().await?;
    pupuk_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    // applying twice is a no-op
    pupuk_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let tables = sqlx::query_as::<_, (String,)>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'fertilization_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;

    assert_eq!(
        tables.into_iter().map(|t| t.0).collect::<Vec<_>>(),
        vec!["fertilization_actual", "fertilization_plan"]
    );

    let indexes = sqlx::query_as::<_, (String,)>(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_fertilization_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;

    assert_eq!(indexes.len(), 2);

    Ok(())
}
