//! Feeder Repository - Read-only `BarDatabase` over the Feeder Port
//!
//! Classifies the requested symbol, maps the platform interval to a
//! feeder period, calls the feeder and converts its rows into bars.
//! Index minute requests go to the minute-time endpoint; everything else
//! goes to the generic bar endpoint.
//!
//! Writes are rejected and most secondary reads are not provided.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use super::convert::{bar_rows_to_bars, minute_rows_to_bars};
use crate::domain::classifier::SymbolClassifier;
use crate::domain::market::{
    BarData, BarPeriod, BarStatistics, Catalog, Exchange, Interval, TickData,
};
use crate::domain::period::{IntervalTag, PeriodTable};
use crate::error::{RepositoryError, Result};
use crate::ports::database::BarDatabase;
use crate::ports::feeder::FeederService;

/// Read-only bar repository backed by a feeder service.
pub struct FeederRepository<F: FeederService> {
    /// Feeder port.
    feeder: Arc<F>,
    /// Symbol to catalog rules.
    classifier: SymbolClassifier,
    /// Interval to period table.
    periods: PeriodTable,
    /// Interval stamped on returned bars.
    interval_tag: IntervalTag,
}

impl<F: FeederService> FeederRepository<F> {
    /// Create a repository with the default rule and period tables.
    pub fn new(feeder: Arc<F>) -> Self {
        Self {
            feeder,
            classifier: SymbolClassifier::default(),
            periods: PeriodTable::default(),
            interval_tag: IntervalTag::default(),
        }
    }

    /// Replace the symbol classification rules.
    #[must_use]
    pub fn with_classifier(mut self, classifier: SymbolClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the interval to period table.
    #[must_use]
    pub fn with_periods(mut self, periods: PeriodTable) -> Self {
        self.periods = periods;
        self
    }

    #[must_use]
    pub fn with_interval_tag(mut self, interval_tag: IntervalTag) -> Self {
        self.interval_tag = interval_tag;
        self
    }

    fn reject_write(operation: &'static str) -> RepositoryError {
        warn!(operation, "Write rejected on read-only feeder repository");
        RepositoryError::UnsupportedOperation(operation)
    }
}

#[async_trait]
impl<F: FeederService> BarDatabase for FeederRepository<F> {
    #[instrument(skip(self))]
    async fn load_bar_data(
        &self,
        symbol: &str,
        exchange: Exchange,
        interval: Interval,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BarData>> {
        let classification = self.classifier.classify(symbol, exchange)?;
        let period = self.periods.period_for(interval)?;
        let tag = self.interval_tag.tag_for(interval);

        let bars = if classification.catalog == Catalog::Index && period == BarPeriod::Minute1 {
            debug!(code = %classification.code, "Loading index minute-time data");
            let rows = self
                .feeder
                .get_minute_time_data(classification.catalog, &classification.code, start, end)
                .await?;
            minute_rows_to_bars(rows, symbol, exchange, tag)
        } else {
            debug!(
                code = %classification.code,
                catalog = %classification.catalog,
                %period,
                "Loading feeder bar data"
            );
            let rows = self
                .feeder
                .get_bar_data(period, classification.catalog, &classification.code, start, end)
                .await?;
            bar_rows_to_bars(rows, symbol, exchange, tag)
        };

        info!(count = bars.len(), "Loaded bars from feeder");
        Ok(bars)
    }

    async fn load_tick_data(
        &self,
        _symbol: &str,
        _exchange: Exchange,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<TickData>> {
        Err(RepositoryError::NotImplemented("load_tick_data"))
    }

    async fn save_bar_data(&self, _bars: &[BarData]) -> Result<()> {
        Err(Self::reject_write("save_bar_data"))
    }

    async fn save_tick_data(&self, _ticks: &[TickData]) -> Result<()> {
        Err(Self::reject_write("save_tick_data"))
    }

    async fn get_newest_bar_data(
        &self,
        _symbol: &str,
        _exchange: Exchange,
        _interval: Interval,
    ) -> Result<Option<BarData>> {
        Err(RepositoryError::NotImplemented("get_newest_bar_data"))
    }

    async fn get_oldest_bar_data(
        &self,
        _symbol: &str,
        _exchange: Exchange,
        _interval: Interval,
    ) -> Result<Option<BarData>> {
        Err(RepositoryError::NotImplemented("get_oldest_bar_data"))
    }

    async fn get_newest_tick_data(
        &self,
        _symbol: &str,
        _exchange: Exchange,
    ) -> Result<Option<TickData>> {
        Err(RepositoryError::NotImplemented("get_newest_tick_data"))
    }

    async fn get_bar_data_statistics(
        &self,
        _symbol: &str,
        _exchange: Exchange,
    ) -> Result<Vec<BarStatistics>> {
        Err(RepositoryError::NotImplemented("get_bar_data_statistics"))
    }

    async fn delete_bar_data(
        &self,
        _symbol: &str,
        _exchange: Exchange,
        _interval: Interval,
    ) -> Result<u64> {
        Err(Self::reject_write("delete_bar_data"))
    }

    async fn clean(&self, _symbol: &str) -> Result<()> {
        Ok(())
    }
}
