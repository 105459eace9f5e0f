//! Feeder row to platform bar conversion.

use crate::domain::market::{BarData, Exchange, Interval};
use crate::ports::feeder::{BarRow, MinuteTimeRow};

/// Build bars from minute-time rows.
///
/// A minute-time row only carries one traded price, so open, high, low
/// and close all take that value.
pub fn minute_rows_to_bars(
    rows: Vec<MinuteTimeRow>,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
) -> Vec<BarData> {
    rows.into_iter()
        .map(|row| {
            let mut bar = BarData::new(symbol, exchange, row.timestamp, interval);
            bar.volume = row.volume;
            bar.open_price = row.price;
            bar.high_price = row.price;
            bar.low_price = row.price;
            bar.close_price = row.price;
            bar
        })
        .collect()
}

/// Build bars from OHLCV rows.
pub fn bar_rows_to_bars(
    rows: Vec<BarRow>,
    symbol: &str,
    exchange: Exchange,
    interval: Interval,
) -> Vec<BarData> {
    rows.into_iter()
        .map(|row| {
            let mut bar = BarData::new(symbol, exchange, row.timestamp, interval);
            bar.volume = row.volume;
            bar.open_price = row.open;
            bar.high_price = row.high;
            bar.low_price = row.low;
            bar.close_price = row.close;
            bar
        })
        .collect()
}
