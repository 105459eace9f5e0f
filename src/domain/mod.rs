//! Domain layer - Market data types and feeder mapping rules.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring).
//! Symbol classification and interval mapping live here so they can be
//! tested without a feeder.

pub mod classifier;
pub mod market;
pub mod period;

// Re-export core types for convenience
pub use classifier::{Classification, SymbolClassifier, SymbolRule};
pub use market::{
    BarData, BarPeriod, BarStatistics, Catalog, Exchange, Interval, TickData,
};
pub use period::{IntervalTag, PeriodTable};
