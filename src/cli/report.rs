use anyhow::Result;
use pupuk::{Config, report::OutputFormat};
use pupuk_fertilization::{Aggregator, SqliteRecordStore};
use pupuk_shared::{Category, parse_date};

pub async fn run(
    config: Config,
    category: Option<Category>,
    date: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let category = match category {
        Some(category) => category,
        None => config.report.category().map_err(|e| anyhow::anyhow!(e))?,
    };

    let today = date.as_deref().map(parse_date).transpose()?;

    let pool =
        pupuk::db::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let aggregator = Aggregator::new(
        SqliteRecordStore(pool.clone()),
        config.report.timezone.to_owned(),
    );

    let rows = match today {
        Some(today) => aggregator.report_on(category, today).await,
        None => aggregator.report(category, None).await,
    };

    pool.close().await;

    let rows = rows?;
    if rows.is_empty() && format == OutputFormat::Table {
        tracing::warn!("no fertilization records for {category}");
    }

    println!("{}", pupuk::report::render(&rows, format)?);

    Ok(())
}
