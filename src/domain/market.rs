//! Core market data domain types.
//!
//! Defines the platform-side enums (exchange, interval), the feeder-side
//! enums (catalog, bar period) and the records handed back to callers.
//!
//! Two vocabularies meet here:
//! - Platform types (`Exchange`, `Interval`, `BarData`, `TickData`)
//! - Feeder types (`Catalog`, `BarPeriod`) consumed by the feeder port

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────
// Platform enums
// ────────────────────────────────────────────

/// Exchanges known to the trading platform.
///
/// Only `SSE` and `SZSE` symbols can be classified for the feeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Shanghai Stock Exchange
    SSE,
    /// Shenzhen Stock Exchange
    SZSE,
    /// Beijing Stock Exchange
    BSE,
    /// China Financial Futures Exchange
    CFFEX,
    /// Shanghai Futures Exchange
    SHFE,
    /// Dalian Commodity Exchange
    DCE,
    /// Zhengzhou Commodity Exchange
    CZCE,
    /// Shanghai International Energy Exchange
    INE,
    /// Shanghai Gold Exchange
    SGE,
    /// Locally generated data
    LOCAL,
}

impl Exchange {
    /// Upper-case exchange code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::SSE => "SSE",
            Self::SZSE => "SZSE",
            Self::BSE => "BSE",
            Self::CFFEX => "CFFEX",
            Self::SHFE => "SHFE",
            Self::DCE => "DCE",
            Self::CZCE => "CZCE",
            Self::INE => "INE",
            Self::SGE => "SGE",
            Self::LOCAL => "LOCAL",
        }
    }

    /// Every exchange variant, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::SSE,
        Self::SZSE,
        Self::BSE,
        Self::CFFEX,
        Self::SHFE,
        Self::DCE,
        Self::CZCE,
        Self::INE,
        Self::SGE,
        Self::LOCAL,
    ];
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown exchange: {s}"))
    }
}

/// Bar interval as requested by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute,
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "d")]
    Daily,
    #[serde(rename = "w")]
    Weekly,
    #[serde(rename = "tick")]
    Tick,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "1m",
            Self::Hour => "1h",
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Tick => "tick",
        }
    }

    pub const ALL: [Self; 5] = [
        Self::Minute,
        Self::Hour,
        Self::Daily,
        Self::Weekly,
        Self::Tick,
    ];
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown interval: {s}"))
    }
}

// ────────────────────────────────────────────
// Feeder enums
// ────────────────────────────────────────────

/// Market category understood by the feeder service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    Stock,
    Index,
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// Bar granularity of the feeder service.
///
/// Distinct from the platform `Interval`; see `PeriodTable` for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarPeriod {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "1w")]
    Week,
}

impl std::fmt::Display for BarPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minute1 => write!(f, "1m"),
            Self::Hour => write!(f, "1h"),
            Self::Day => write!(f, "1d"),
            Self::Week => write!(f, "1w"),
        }
    }
}

// ────────────────────────────────────────────
// Records returned to the platform
// ────────────────────────────────────────────

/// One OHLCV bar as the platform expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    /// Source name; the bare exchange code (e.g. "SSE"), not "Exchange.SSE".
    pub gateway_name: String,
    /// Exchange-local symbol code (e.g. "600001").
    pub symbol: String,
    pub exchange: Exchange,
    /// Bar timestamp as reported by the feeder.
    pub datetime: DateTime<Utc>,
    pub interval: Interval,
    pub volume: f64,
    /// Always 0 for feeder bars.
    pub open_interest: f64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

impl BarData {
    /// Create a bar with zeroed prices, volume and open interest.
    pub fn new(
        symbol: &str,
        exchange: Exchange,
        datetime: DateTime<Utc>,
        interval: Interval,
    ) -> Self {
        Self {
            gateway_name: exchange.to_string(),
            symbol: symbol.to_string(),
            exchange,
            datetime,
            interval,
            volume: 0.0,
            open_interest: 0.0,
            open_price: 0.0,
            high_price: 0.0,
            low_price: 0.0,
            close_price: 0.0,
        }
    }

    /// Platform-wide identifier, `"{symbol}.{exchange}"`.
    pub fn vt_symbol(&self) -> String {
        format!("{}.{}", self.symbol, self.exchange)
    }
}

/// A single tick as the platform expects it.
///
/// The feeder repository never produces ticks; the type exists so the
/// storage contract can be expressed in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickData {
    pub gateway_name: String,
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: DateTime<Utc>,
    pub last_price: f64,
    pub volume: f64,
    pub open_interest: f64,
}

/// Summary of the bars stored for one symbol and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStatistics {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Interval,
    /// Number of bars available.
    pub count: u64,
    /// First bar timestamp.
    pub start: DateTime<Utc>,
    /// Last bar timestamp.
    pub end: DateTime<Utc>,
}
