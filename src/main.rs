//! Feeder Bar Repository - Replay Entry Point
//!
//! Loads bars for one query through the feeder repository and prints
//! them as JSON lines on stdout.
//!
//! Usage:
//!   feeder-bar-repository <config.toml> <symbol> <exchange> <interval> <start> <end>
//!
//! `start` and `end` are RFC 3339 timestamps; `interval` is one of
//! `1m`, `1h`, `d`, `w`.
//!
//! Wiring sequence:
//! 1. Load config + validate
//! 2. Init tracing (JSON structured logging, stderr)
//! 3. Create JsonlFeeder (implements FeederService port)
//! 4. Create FeederRepository (implements BarDatabase port)
//! 5. Run the query and print bars

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use feeder_bar_repository::adapters::feeder::JsonlFeeder;
use feeder_bar_repository::adapters::repository::FeederRepository;
use feeder_bar_repository::config;
use feeder_bar_repository::domain::market::{Exchange, Interval};
use feeder_bar_repository::domain::period::PeriodTable;
use feeder_bar_repository::ports::database::BarDatabase;

/// Replay bars for one symbol through the feeder repository.
#[derive(Parser, Debug)]
#[command(name = "feeder-bar-repository", version)]
#[command(about = "Load bars from the feeder and print them as JSON lines", long_about = None)]
struct Query {
    /// Path to the TOML configuration file.
    config_path: String,

    /// Exchange-local symbol code (e.g. 600001).
    symbol: String,

    /// Exchange code (SSE, SZSE, ...).
    exchange: Exchange,

    /// Bar interval (1m, 1h, d, w).
    interval: Interval,

    /// Range start, RFC 3339.
    #[arg(value_parser = parse_time)]
    start: DateTime<Utc>,

    /// Range end, RFC 3339.
    #[arg(value_parser = parse_time)]
    end: DateTime<Utc>,
}

fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

#[tokio::main]
async fn main() -> Result<()> {
    let query = Query::parse();

    // ── 1. Load configuration ───────────────────────────────
    let config = config::loader::load_config(&query.config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.repository.log_level)
                }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        name = %config.repository.name,
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.feeder.data_dir,
        "Starting feeder bar repository"
    );

    // ── 3. Feeder port ──────────────────────────────────────
    let feeder = Arc::new(JsonlFeeder::new(&config.feeder.data_dir));

    // ── 4. Repository port ──────────────────────────────────
    let repository = FeederRepository::new(feeder)
        .with_classifier(config.classifier())
        .with_periods(PeriodTable::default())
        .with_interval_tag(config.repository.interval_tag);

    // ── 5. Query + output ───────────────────────────────────
    let bars = repository
        .load_bar_data(
            &query.symbol,
            query.exchange,
            query.interval,
            query.start,
            query.end,
        )
        .await?;

    let mut out = std::io::stdout().lock();
    for bar in &bars {
        serde_json::to_writer(&mut out, bar)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(count = bars.len(), "Done");
    Ok(())
}
