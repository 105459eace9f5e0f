//! Feeder Port - External Market Data Service Interface
//!
//! Defines the trait the repository needs from the proprietary feeder
//! service. The feeder returns tabular rows; converting them into
//! platform records is the repository's job.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::market::{BarPeriod, Catalog};

/// One row of intraday minute-time data (index minute line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteTimeRow {
  /// Row timestamp.
  pub timestamp: DateTime<Utc>,
  /// Traded price for the minute.
  pub price: f64,
  /// Volume traded during the minute.
  pub volume: f64,
}

/// One OHLCV row from the generic bar endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRow {
  /// Row timestamp.
  pub timestamp: DateTime<Utc>,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: f64,
}

/// Trait for feeder service clients.
///
/// Rows come back in the order the feeder produces them
/// (chronological ascending); callers must not rely on any other order.
#[async_trait]
pub trait FeederService: Send + Sync + 'static {
  /// Fetch minute-time rows for `code` between `start` and `end`.
  async fn get_minute_time_data(
    &self,
    catalog: Catalog,
    code: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> anyhow::Result<Vec<MinuteTimeRow>>;

  /// Fetch OHLCV rows of the given period for `code` between `start` and `end`.
  async fn get_bar_data(
    &self,
    period: BarPeriod,
    catalog: Catalog,
    code: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> anyhow::Result<Vec<BarRow>>;
}
