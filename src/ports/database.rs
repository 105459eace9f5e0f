//! Bar Database Port - Platform Market Data Storage Interface
//!
//! The storage contract the trading platform programs against.
//! Implementations may be full databases or read-only bridges to a
//! remote service; unsupported operations return a typed error instead
//! of silently doing nothing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::market::{BarData, BarStatistics, Exchange, Interval, TickData};
use crate::error::Result;

/// Trait for market data storage providers.
#[async_trait]
pub trait BarDatabase: Send + Sync + 'static {
  /// Load bars for a symbol between `start` and `end`.
  async fn load_bar_data(
    &self,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<Vec<BarData>>;

  /// Load ticks for a symbol between `start` and `end`.
  async fn load_tick_data(
    &self,
    symbol: &str,
    exchange: Exchange,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<Vec<TickData>>;

  /// Persist bars.
  async fn save_bar_data(&self, bars: &[BarData]) -> Result<()>;

  /// Persist ticks.
  async fn save_tick_data(&self, ticks: &[TickData]) -> Result<()>;

  /// Most recent stored bar, if any.
  async fn get_newest_bar_data(
    &self,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
  ) -> Result<Option<BarData>>;

  /// Oldest stored bar, if any.
  async fn get_oldest_bar_data(
    &self,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
  ) -> Result<Option<BarData>>;

  /// Most recent stored tick, if any.
  async fn get_newest_tick_data(
    &self,
    symbol: &str,
    exchange: Exchange,
  ) -> Result<Option<TickData>>;

  /// Per-interval bar counts and ranges for a symbol.
  async fn get_bar_data_statistics(
    &self,
    symbol: &str,
    exchange: Exchange,
  ) -> Result<Vec<BarStatistics>>;

  /// Delete stored bars; returns the number of bars removed.
  async fn delete_bar_data(
    &self,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
  ) -> Result<u64>;

  /// Drop any cached state for a symbol.
  async fn clean(&self, symbol: &str) -> Result<()>;
}
