use std::collections::HashMap;

use pupuk_shared::Category;
use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{ApplicationRecord, RecordStore, ReportWindow};

/// Per-estate line of the plan versus actual report.
///
/// Serialized keys follow the names the dashboard already renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "no")]
    pub seq: usize,
    #[serde(rename = "kebun")]
    pub estate: String,
    #[serde(rename = "app1_rencana")]
    pub round1_planned: f64,
    #[serde(rename = "app1_real")]
    pub round1_actual: f64,
    #[serde(rename = "app1_pct")]
    pub round1_percent: f64,
    #[serde(rename = "app2_rencana")]
    pub round2_planned: f64,
    #[serde(rename = "app2_real")]
    pub round2_actual: f64,
    #[serde(rename = "app2_pct")]
    pub round2_percent: f64,
    #[serde(rename = "app3_rencana")]
    pub round3_planned: f64,
    #[serde(rename = "app3_real")]
    pub round3_actual: f64,
    #[serde(rename = "app3_pct")]
    pub round3_percent: f64,
    #[serde(rename = "renc_sekarang")]
    pub today_planned: f64,
    #[serde(rename = "real_sekarang")]
    pub today_actual: f64,
    #[serde(rename = "renc_besok")]
    pub tomorrow_planned: f64,
    #[serde(rename = "jumlah_rencana2025")]
    pub total_planned: f64,
    #[serde(rename = "jumlah_real_5hari")]
    pub trailing_actual: f64,
    #[serde(rename = "jumlah_pct")]
    pub trailing_percent: f64,
}

impl SummaryRow {
    /// `(planned, actual, percent)` for rounds 1 to 3.
    pub fn rounds(&self) -> [(f64, f64, f64); 3] {
        [
            (self.round1_planned, self.round1_actual, self.round1_percent),
            (self.round2_planned, self.round2_actual, self.round2_percent),
            (self.round3_planned, self.round3_actual, self.round3_percent),
        ]
    }
}

/// `100 * actual / planned`, or 0 when nothing was planned.
pub fn percent(actual: f64, planned: f64) -> f64 {
    if planned == 0.0 {
        return 0.0;
    }

    100.0 * actual / planned
}

#[derive(Default)]
struct EstateAccumulator {
    estate: String,
    planned: [f64; 3],
    actual: [f64; 3],
    today_planned: f64,
    today_actual: f64,
    tomorrow_planned: f64,
    trailing_actual: f64,
}

impl EstateAccumulator {
    fn into_row(self, seq: usize) -> SummaryRow {
        let total_planned: f64 = self.planned.iter().sum();

        SummaryRow {
            seq,
            estate: self.estate,
            round1_planned: self.planned[0],
            round1_actual: self.actual[0],
            round1_percent: percent(self.actual[0], self.planned[0]),
            round2_planned: self.planned[1],
            round2_actual: self.actual[1],
            round2_percent: percent(self.actual[1], self.planned[1]),
            round3_planned: self.planned[2],
            round3_actual: self.actual[2],
            round3_percent: percent(self.actual[2], self.planned[2]),
            today_planned: self.today_planned,
            today_actual: self.today_actual,
            tomorrow_planned: self.tomorrow_planned,
            total_planned,
            trailing_actual: self.trailing_actual,
            trailing_percent: percent(self.trailing_actual, total_planned),
        }
    }
}

/// Estates in the order they were first seen.
#[derive(Default)]
struct Accumulation<'a> {
    positions: HashMap<&'a str, usize>,
    estates: Vec<EstateAccumulator>,
}

impl<'a> Accumulation<'a> {
    fn estate(&mut self, estate: &'a str) -> &mut EstateAccumulator {
        let position = *self.positions.entry(estate).or_insert_with(|| {
            self.estates.push(EstateAccumulator {
                estate: estate.to_owned(),
                ..Default::default()
            });
            self.estates.len() - 1
        });

        &mut self.estates[position]
    }

    fn add_planned(&mut self, record: &'a ApplicationRecord, window: &ReportWindow) {
        let Some(round) = record.round_index() else {
            return;
        };

        let kg = record.kg();
        let acc = self.estate(&record.estate);
        acc.planned[round] += kg;

        if window.is_today(record.applied_on) {
            acc.today_planned += kg;
        }

        if window.is_tomorrow(record.applied_on) {
            acc.tomorrow_planned += kg;
        }
    }

    fn add_actual(&mut self, record: &'a ApplicationRecord, window: &ReportWindow) {
        let Some(round) = record.round_index() else {
            return;
        };

        let kg = record.kg();
        let acc = self.estate(&record.estate);
        acc.actual[round] += kg;

        if window.is_today(record.applied_on) {
            acc.today_actual += kg;
        }

        if window.is_trailing(record.applied_on) {
            acc.trailing_actual += kg;
        }
    }
}

/// Groups both series by estate and derives one summary row per estate.
///
/// Planned records are accumulated before actual ones, so an estate's sequence
/// number is the position it first appears at across `planned` then `actual`.
/// Records whose round is not 1, 2 or 3 are skipped entirely.
pub fn aggregate(
    planned: &[ApplicationRecord],
    actual: &[ApplicationRecord],
    window: &ReportWindow,
) -> Vec<SummaryRow> {
    let mut accumulation = Accumulation::default();

    for record in planned {
        accumulation.add_planned(record, window);
    }

    for record in actual {
        accumulation.add_actual(record, window);
    }

    accumulation
        .estates
        .into_iter()
        .enumerate()
        .map(|(i, acc)| acc.into_row(i + 1))
        .collect()
}

/// Loads both series from a [`RecordStore`] and aggregates them.
pub struct Aggregator<S> {
    store: S,
    timezone: String,
}

impl<S: RecordStore> Aggregator<S> {
    pub fn new(store: S, timezone: impl Into<String>) -> Self {
        Self {
            store,
            timezone: timezone.into(),
        }
    }

    /// Report for the day `reference` falls on in the configured zone, now when `None`.
    pub async fn report(
        &self,
        category: Category,
        reference: Option<OffsetDateTime>,
    ) -> pupuk_shared::Result<Vec<SummaryRow>> {
        let reference = reference.unwrap_or_else(OffsetDateTime::now_utc);

        self.build(
            category,
            ReportWindow::from_reference(reference, &self.timezone),
        )
        .await
    }

    /// Report with `today` taken as the given calendar day.
    pub async fn report_on(
        &self,
        category: Category,
        today: Date,
    ) -> pupuk_shared::Result<Vec<SummaryRow>> {
        self.build(category, ReportWindow::new(today)).await
    }

    #[tracing::instrument(skip(self, window), fields(today = %window.today()))]
    async fn build(
        &self,
        category: Category,
        window: ReportWindow,
    ) -> pupuk_shared::Result<Vec<SummaryRow>> {
        let (planned, actual) =
            futures::try_join!(self.store.planned(category), self.store.actual(category))?;

        tracing::debug!(
            planned = planned.len(),
            actual = actual.len(),
            "fertilization records loaded"
        );

        let rows = aggregate(&planned, &actual, &window);

        tracing::info!(rows = rows.len(), "fertilization report built");

        Ok(rows)
    }
}
