use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pupuk::report::OutputFormat;
use pupuk_shared::Category;

mod cli;

/// pupuk - Fertilization plan versus actual per estate
#[derive(Parser)]
#[command(name = "pupuk")]
#[command(about = "Fertilization plan versus actual reports per estate", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-estate plan versus actual summary
    Report {
        /// Crop category (oil_palm, rubber), defaults to report.category
        #[arg(long)]
        category: Option<Category>,

        /// Day to treat as today (YYYY-MM-DD), defaults to the current day
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Load planned and actual records from a JSON file
    Import {
        /// JSON document with "planned" and "actual" arrays
        file: PathBuf,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pupuk::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pupuk::observability::init_observability(
        "pupuk",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Report {
            category,
            date,
            format,
        } => cli::report::run(config, category, date, format).await,
        Commands::Import { file } => cli::import::run(config, file).await,
        Commands::Migrate => cli::migrate::migrate(config).await,
        Commands::Reset => cli::migrate::reset(config).await,
    }
}
