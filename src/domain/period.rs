//! Interval to feeder period mapping.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::market::{BarPeriod, Interval};
use crate::error::{RepositoryError, Result};

/// Which interval gets stamped on bars built from feeder rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalTag {
    /// Every bar is tagged `Interval::Minute`, whatever was requested.
    #[default]
    ForcedMinute,
    /// Bars carry the interval that was requested.
    Requested,
}

impl IntervalTag {
    pub const fn tag_for(self, requested: Interval) -> Interval {
        match self {
            Self::ForcedMinute => Interval::Minute,
            Self::Requested => requested,
        }
    }
}

/// Immutable `Interval -> BarPeriod` table, built once at construction.
#[derive(Debug, Clone)]
pub struct PeriodTable {
    periods: HashMap<Interval, BarPeriod>,
}

impl PeriodTable {
    pub fn new(periods: HashMap<Interval, BarPeriod>) -> Self {
        Self { periods }
    }

    /// Look up the feeder period for an interval.
    ///
    /// # Errors
    /// `RepositoryError::UnsupportedInterval` when the interval has no entry.
    pub fn period_for(&self, interval: Interval) -> Result<BarPeriod> {
        self.periods
            .get(&interval)
            .copied()
            .ok_or(RepositoryError::UnsupportedInterval(interval))
    }
}

impl Default for PeriodTable {
    fn default() -> Self {
        Self::new(HashMap::from([
            (Interval::Minute, BarPeriod::Minute1),
            (Interval::Hour, BarPeriod::Hour),
            (Interval::Daily, BarPeriod::Day),
            (Interval::Weekly, BarPeriod::Week),
        ]))
    }
}
