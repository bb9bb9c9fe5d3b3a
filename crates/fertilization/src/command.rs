use pupuk_db::table::{FertilizationActual, FertilizationPlan};
use pupuk_shared::{Category, format_date, parse_date};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordInput {
    #[serde(alias = "kebun")]
    #[validate(length(min = 1, message = "estate must not be empty"))]
    pub estate: String,
    #[serde(alias = "kategori")]
    pub category: Category,
    #[serde(default, alias = "aplikasi")]
    pub round: Option<i64>,
    #[serde(default, alias = "kg")]
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity_kg: Option<f64>,
    #[serde(default, alias = "tanggal")]
    pub applied_on: Option<String>,
}

/// Planned and actual records loaded together.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ImportInput {
    #[serde(default, alias = "rencana")]
    #[validate(nested)]
    pub planned: Vec<RecordInput>,
    #[serde(default, alias = "realisasi")]
    #[validate(nested)]
    pub actual: Vec<RecordInput>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub planned: usize,
    pub actual: usize,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Inserts every record of `input` in a single transaction.
    ///
    /// Nothing is written when any record fails validation or carries a date
    /// that is not `YYYY-MM-DD`.
    pub async fn import(&self, input: ImportInput) -> pupuk_shared::Result<ImportSummary> {
        input.validate()?;

        let planned = normalize_dates(input.planned)?;
        let actual = normalize_dates(input.actual)?;

        let mut tx = self.0.begin().await?;

        for record in &planned {
            let statement = Query::insert()
                .into_table(FertilizationPlan::Table)
                .columns([
                    FertilizationPlan::Estate,
                    FertilizationPlan::Category,
                    FertilizationPlan::Round,
                    FertilizationPlan::QuantityKg,
                    FertilizationPlan::AppliedOn,
                ])
                .values_panic([
                    record.estate.to_owned().into(),
                    record.category.to_string().into(),
                    record.round.into(),
                    record.quantity_kg.into(),
                    record.applied_on.to_owned().into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        for record in &actual {
            let statement = Query::insert()
                .into_table(FertilizationActual::Table)
                .columns([
                    FertilizationActual::Estate,
                    FertilizationActual::Category,
                    FertilizationActual::Round,
                    FertilizationActual::QuantityKg,
                    FertilizationActual::AppliedOn,
                ])
                .values_panic([
                    record.estate.to_owned().into(),
                    record.category.to_string().into(),
                    record.round.into(),
                    record.quantity_kg.into(),
                    record.applied_on.to_owned().into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            planned = planned.len(),
            actual = actual.len(),
            "fertilization records imported"
        );

        Ok(ImportSummary {
            planned: planned.len(),
            actual: actual.len(),
        })
    }
}

/// Rewrites dates to their canonical `YYYY-MM-DD` form and trims estate names.
fn normalize_dates(records: Vec<RecordInput>) -> pupuk_shared::Result<Vec<RecordInput>> {
    records
        .into_iter()
        .map(|mut record| {
            record.estate = record.estate.trim().to_owned();
            if record.estate.is_empty() {
                pupuk_shared::bail!("estate must not be empty");
            }

            record.applied_on = match record.applied_on.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(value) => match parse_date(value) {
                    Ok(date) => Some(format_date(date)?),
                    Err(_) => pupuk_shared::bail!(
                        "invalid date '{}' for estate {}, expected YYYY-MM-DD",
                        value,
                        record.estate
                    ),
                },
            };

            Ok(record)
        })
        .collect()
}
