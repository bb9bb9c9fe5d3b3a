use pupuk_db::table::{FertilizationActual, FertilizationPlan};
use pupuk_shared::{Category, parse_date};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::ApplicationRecord;

/// Read side the aggregator loads its two record series from.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Planned applications (rencana) of `category`.
    async fn planned(&self, category: Category) -> pupuk_shared::Result<Vec<ApplicationRecord>>;

    /// Actual applications (realisasi) of `category`.
    async fn actual(&self, category: Category) -> pupuk_shared::Result<Vec<ApplicationRecord>>;
}

#[derive(Clone)]
pub struct SqliteRecordStore(pub SqlitePool);

#[derive(Debug, FromRow)]
struct RecordRow {
    estate: String,
    round: Option<i64>,
    quantity_kg: Option<f64>,
    applied_on: Option<String>,
}

impl From<RecordRow> for ApplicationRecord {
    fn from(row: RecordRow) -> Self {
        let applied_on = row.applied_on.as_deref().and_then(|value| {
            parse_date(value)
                .inspect_err(|e| {
                    tracing::warn!(estate = %row.estate, value, "ignoring unreadable date: {e}")
                })
                .ok()
        });

        ApplicationRecord {
            estate: row.estate,
            round: row.round,
            quantity_kg: row.quantity_kg,
            applied_on,
        }
    }
}

impl SqliteRecordStore {
    async fn fetch(
        &self,
        statement: SelectStatement,
    ) -> pupuk_shared::Result<Vec<ApplicationRecord>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecordRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(ApplicationRecord::from).collect())
    }
}

#[async_trait::async_trait]
impl RecordStore for SqliteRecordStore {
    async fn planned(&self, category: Category) -> pupuk_shared::Result<Vec<ApplicationRecord>> {
        let statement = Query::select()
            .columns([
                FertilizationPlan::Estate,
                FertilizationPlan::Round,
                FertilizationPlan::QuantityKg,
                FertilizationPlan::AppliedOn,
            ])
            .from(FertilizationPlan::Table)
            .and_where(Expr::col(FertilizationPlan::Category).eq(category.to_string()))
            .order_by(FertilizationPlan::Id, Order::Asc)
            .to_owned();

        self.fetch(statement).await
    }

    async fn actual(&self, category: Category) -> pupuk_shared::Result<Vec<ApplicationRecord>> {
        let statement = Query::select()
            .columns([
                FertilizationActual::Estate,
                FertilizationActual::Round,
                FertilizationActual::QuantityKg,
                FertilizationActual::AppliedOn,
            ])
            .from(FertilizationActual::Table)
            .and_where(Expr::col(FertilizationActual::Category).eq(category.to_string()))
            .order_by(FertilizationActual::Id, Order::Asc)
            .to_owned();

        self.fetch(statement).await
    }
}
