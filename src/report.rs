//! Text and JSON rendering of fertilization summary rows.

use clap::ValueEnum;
use pupuk_fertilization::SummaryRow;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One printed line of the text report.
#[derive(Tabled)]
struct ReportLine {
    #[tabled(rename = "No")]
    seq: usize,
    #[tabled(rename = "Kebun")]
    estate: String,
    #[tabled(rename = "App1 Renc")]
    round1_planned: String,
    #[tabled(rename = "App1 Real")]
    round1_actual: String,
    #[tabled(rename = "App1 %")]
    round1_percent: String,
    #[tabled(rename = "App2 Renc")]
    round2_planned: String,
    #[tabled(rename = "App2 Real")]
    round2_actual: String,
    #[tabled(rename = "App2 %")]
    round2_percent: String,
    #[tabled(rename = "App3 Renc")]
    round3_planned: String,
    #[tabled(rename = "App3 Real")]
    round3_actual: String,
    #[tabled(rename = "App3 %")]
    round3_percent: String,
    #[tabled(rename = "Renc Hari Ini")]
    today_planned: String,
    #[tabled(rename = "Real Hari Ini")]
    today_actual: String,
    #[tabled(rename = "Renc Besok")]
    tomorrow_planned: String,
    #[tabled(rename = "Jml Renc")]
    total_planned: String,
    #[tabled(rename = "Real 5 Hari")]
    trailing_actual: String,
    #[tabled(rename = "%")]
    trailing_percent: String,
}

fn kg(value: f64) -> String {
    format!("{value:.2}")
}

fn pct(value: f64) -> String {
    format!("{value:.1}")
}

impl From<&SummaryRow> for ReportLine {
    fn from(row: &SummaryRow) -> Self {
        Self {
            seq: row.seq,
            estate: row.estate.to_owned(),
            round1_planned: kg(row.round1_planned),
            round1_actual: kg(row.round1_actual),
            round1_percent: pct(row.round1_percent),
            round2_planned: kg(row.round2_planned),
            round2_actual: kg(row.round2_actual),
            round2_percent: pct(row.round2_percent),
            round3_planned: kg(row.round3_planned),
            round3_actual: kg(row.round3_actual),
            round3_percent: pct(row.round3_percent),
            today_planned: kg(row.today_planned),
            today_actual: kg(row.today_actual),
            tomorrow_planned: kg(row.tomorrow_planned),
            total_planned: kg(row.total_planned),
            trailing_actual: kg(row.trailing_actual),
            trailing_percent: pct(row.trailing_percent),
        }
    }
}

pub fn render(rows: &[SummaryRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Table with one line per estate, estate left-aligned and figures right-aligned.
pub fn render_table(rows: &[SummaryRow]) -> String {
    let mut table = Table::new(rows.iter().map(ReportLine::from));
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(..)).with(Alignment::right()))
        .with(Modify::new(Columns::new(1..2)).with(Alignment::left()));

    table.to_string()
}
