use std::path::PathBuf;

use anyhow::{Context, Result};
use pupuk::Config;
use pupuk_fertilization::{Command, ImportInput};

pub async fn run(config: Config, file: PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let input: ImportInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let pool = pupuk::db::create_pool(&config.database.url, 1).await?;
    let result = Command(pool.clone()).import(input).await;
    pool.close().await;

    let summary = result?;

    tracing::info!(
        "Imported {} planned and {} actual records from {}",
        summary.planned,
        summary.actual,
        file.display()
    );

    Ok(())
}
