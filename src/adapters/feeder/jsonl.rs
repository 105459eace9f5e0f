//! JSONL Feeder - File-backed Feeder Service Replay
//!
//! Serves feeder rows captured to JSON Lines files, one file per
//! (endpoint, catalog, code):
//! - `minute/{catalog}/{code}.jsonl` for minute-time rows
//! - `bars/{period}/{catalog}/{code}.jsonl` for OHLCV rows
//!
//! Rows are returned in file order, filtered to the inclusive
//! `[start, end]` range.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use crate::domain::market::{BarPeriod, Catalog};
use crate::ports::feeder::{BarRow, FeederService, MinuteTimeRow};

/// Rows that carry a timestamp for range filtering.
trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for MinuteTimeRow {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for BarRow {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Feeder service replaying rows from JSONL files.
pub struct JsonlFeeder {
    /// Root directory of the captured rows.
    data_dir: PathBuf,
}

impl JsonlFeeder {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the minute-time file for a code.
    pub fn minute_path(&self, catalog: Catalog, code: &str) -> Result<PathBuf> {
        check_code(code)?;
        Ok(self
            .data_dir
            .join("minute")
            .join(catalog.to_string())
            .join(format!("{code}.jsonl")))
    }

    /// Path of the bar file for a code and period.
    pub fn bar_path(&self, period: BarPeriod, catalog: Catalog, code: &str) -> Result<PathBuf> {
        check_code(code)?;
        Ok(self
            .data_dir
            .join("bars")
            .join(period.to_string())
            .join(catalog.to_string())
            .join(format!("{code}.jsonl")))
    }

    /// Append minute-time rows to the file for `code`.
    pub async fn append_minute_rows(
        &self,
        catalog: Catalog,
        code: &str,
        rows: &[MinuteTimeRow],
    ) -> Result<()> {
        let path = self.minute_path(catalog, code)?;
        append_rows(&path, rows).await
    }

    /// Append OHLCV rows to the file for `code` and `period`.
    pub async fn append_bar_rows(
        &self,
        period: BarPeriod,
        catalog: Catalog,
        code: &str,
        rows: &[BarRow],
    ) -> Result<()> {
        let path = self.bar_path(period, catalog, code)?;
        append_rows(&path, rows).await
    }
}

#[async_trait]
impl FeederService for JsonlFeeder {
    #[instrument(skip(self))]
    async fn get_minute_time_data(
        &self,
        catalog: Catalog,
        code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MinuteTimeRow>> {
        let path = self.minute_path(catalog, code)?;
        read_rows(&path, start, end).await
    }

    #[instrument(skip(self))]
    async fn get_bar_data(
        &self,
        period: BarPeriod,
        catalog: Catalog,
        code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BarRow>> {
        let path = self.bar_path(period, catalog, code)?;
        read_rows(&path, start, end).await
    }
}

/// Codes become file names; keep them to plain alphanumerics.
fn check_code(code: &str) -> Result<()> {
    anyhow::ensure!(
        !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric()),
        "Invalid feeder code: {code:?}"
    );
    Ok(())
}

async fn read_rows<T>(path: &Path, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Timestamped,
{
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(file = %path.display(), "No feeder file, returning no rows");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: T = serde_json::from_str(line)
            .with_context(|| format!("Malformed row at {}:{}", path.display(), idx + 1))?;
        let ts = row.timestamp();
        if ts >= start && ts <= end {
            rows.push(row);
        }
    }

    debug!(file = %path.display(), count = rows.len(), "Read feeder rows");
    Ok(rows)
}

async fn append_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut buf = String::new();
    for row in rows {
        buf.push_str(&serde_json::to_string(row).context("Failed to serialize feeder row")?);
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    file.write_all(buf.as_bytes())
        .await
        .context("Failed to write feeder rows")?;
    file.flush().await.context("Failed to flush feeder file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn minute(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 1, 30, 0).unwrap() + Duration::minutes(n)
    }

    #[tokio::test]
    async fn test_minute_rows_filtered_inclusive() {
        let dir = tempfile::tempdir().unwrap();
        let feeder = JsonlFeeder::new(dir.path());
        let rows: Vec<MinuteTimeRow> = (0..5)
            .map(|n| MinuteTimeRow { timestamp: minute(n), price: 10.0 + n as f64, volume: 1.0 })
            .collect();
        feeder
            .append_minute_rows(Catalog::Index, "399002", &rows)
            .await
            .unwrap();

        let got = feeder
            .get_minute_time_data(Catalog::Index, "399002", minute(1), minute(3))
            .await
            .unwrap();

        assert_eq!(got, rows[1..=3].to_vec());
    }

    #[tokio::test]
    async fn test_bar_rows_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let feeder = JsonlFeeder::new(dir.path());
        let late = BarRow { timestamp: minute(10), open: 2.0, high: 2.0, low: 2.0, close: 2.0, volume: 1.0 };
        let early = BarRow { timestamp: minute(0), open: 1.0, high: 1.0, low: 1.0, close: 1.0, volume: 1.0 };
        feeder
            .append_bar_rows(BarPeriod::Day, Catalog::Stock, "600001", &[late.clone(), early.clone()])
            .await
            .unwrap();

        let got = feeder
            .get_bar_data(BarPeriod::Day, Catalog::Stock, "600001", minute(0), minute(10))
            .await
            .unwrap();

        assert_eq!(got, vec![late, early]);
    }

    #[tokio::test]
    async fn test_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let feeder = JsonlFeeder::new(dir.path());

        let got = feeder
            .get_bar_data(BarPeriod::Week, Catalog::Stock, "000002", minute(0), minute(1))
            .await
            .unwrap();

        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_line_fails_whole_request() {
        let dir = tempfile::tempdir().unwrap();
        let feeder = JsonlFeeder::new(dir.path());
        let path = feeder.minute_path(Catalog::Index, "399006").unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let good = serde_json::to_string(&MinuteTimeRow {
            timestamp: minute(0),
            price: 1.0,
            volume: 1.0,
        })
        .unwrap();
        std::fs::write(&path, format!("{good}\n{{not json}}\n")).unwrap();

        let err = feeder
            .get_minute_time_data(Catalog::Index, "399006", minute(0), minute(5))
            .await
            .unwrap_err();

        assert!(err.to_string().contains(":2"));
    }

    #[test]
    fn test_paths_and_code_check() {
        let feeder = JsonlFeeder::new("/data");
        assert_eq!(
            feeder.bar_path(BarPeriod::Hour, Catalog::Stock, "600001").unwrap(),
            PathBuf::from("/data/bars/1h/stock/600001.jsonl")
        );
        assert!(feeder.minute_path(Catalog::Index, "39999/../x").is_err());
        assert!(feeder.minute_path(Catalog::Index, "").is_err());
    }
}
