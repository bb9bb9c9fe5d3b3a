use std::{path::PathBuf, str::FromStr};

use pupuk_fertilization::{Command, ImportInput, RecordInput};
use pupuk_shared::Category;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    pupuk_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn record(
    estate: &str,
    category: Category,
    round: Option<i64>,
    quantity_kg: Option<f64>,
    applied_on: Option<&str>,
) -> RecordInput {
    RecordInput {
        estate: estate.to_owned(),
        category,
        round,
        quantity_kg,
        applied_on: applied_on.map(ToOwned::to_owned),
    }
}

#[allow(dead_code)]
pub async fn seed(
    pool: &SqlitePool,
    planned: Vec<RecordInput>,
    actual: Vec<RecordInput>,
) -> anyhow::Result<()> {
    Command(pool.clone())
        .import(ImportInput { planned, actual })
        .await?;

    Ok(())
}
