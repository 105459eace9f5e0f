//! Property-Based Tests - Classification and Read-only Invariants
//!
//! Uses `proptest` to verify that the symbol classifier and the
//! repository's rejected operations behave the same across random inputs.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use feeder_bar_repository::adapters::feeder::JsonlFeeder;
use feeder_bar_repository::adapters::repository::FeederRepository;
use feeder_bar_repository::domain::classifier::SymbolClassifier;
use feeder_bar_repository::domain::market::{BarData, Catalog, Exchange, Interval};
use feeder_bar_repository::ports::database::BarDatabase;
use feeder_bar_repository::RepositoryError;

/// The A-share table written as integer ranges.
///
/// Only equivalent to the string rules for six-digit codes.
fn reference_catalog(code: u32, exchange: Exchange) -> Option<Catalog> {
    let between = |lo: u32, hi: u32| lo < code && code < hi;
    match exchange {
        Exchange::SZSE if between(1, 2000) || between(2001, 100_000) || between(300_001, 310_000) => {
            Some(Catalog::Stock)
        }
        Exchange::SZSE if between(399_001, 400_000) => Some(Catalog::Index),
        Exchange::SSE if between(600_000, 687_999) || between(688_001, 699_999) => {
            Some(Catalog::Stock)
        }
        Exchange::SSE if between(1, 1000) || between(999_900, 999_999) => Some(Catalog::Index),
        _ => None,
    }
}

fn any_exchange() -> impl Strategy<Value = Exchange> {
    prop::sample::select(Exchange::ALL.to_vec())
}

fn repository() -> FeederRepository<JsonlFeeder> {
    FeederRepository::new(Arc::new(JsonlFeeder::new("/nonexistent/feeder")))
}

// ── Classification Properties ───────────────────────────────

proptest! {
    /// Six-digit codes classify exactly as the integer table says.
    #[test]
    fn six_digit_codes_match_reference_table(
        code in 0u32..1_000_000,
        exchange in any_exchange(),
    ) {
        let symbol = format!("{code:06}");
        let got = SymbolClassifier::default()
            .classify(&symbol, exchange)
            .ok()
            .map(|c| c.catalog);
        prop_assert_eq!(got, reference_catalog(code, exchange));
    }

    /// Exchanges outside SSE/SZSE never classify.
    #[test]
    fn other_exchanges_never_classify(
        symbol in "[0-9A-Za-z]{0,8}",
        exchange in any_exchange(),
    ) {
        prop_assume!(exchange != Exchange::SSE && exchange != Exchange::SZSE);
        let result = SymbolClassifier::default().classify(&symbol, exchange);
        let is_unsupported = matches!(result, Err(RepositoryError::UnsupportedSymbol { .. }));
        prop_assert!(is_unsupported);
    }

    /// A successful classification returns the symbol unchanged as code.
    #[test]
    fn canonical_code_is_symbol(code in 0u32..1_000_000, exchange in any_exchange()) {
        let symbol = format!("{code:06}");
        if let Ok(c) = SymbolClassifier::default().classify(&symbol, exchange) {
            prop_assert_eq!(c.code, symbol);
        }
    }
}

// ── Read-only Repository Properties ─────────────────────────

proptest! {
    /// Writes fail with UnsupportedOperation whatever the input.
    #[test]
    fn writes_always_rejected(
        symbol in "[0-9]{6}",
        exchange in any_exchange(),
        n in 0usize..4,
    ) {
        let repo = repository();
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let bars: Vec<BarData> = (0..n)
            .map(|_| BarData::new(&symbol, exchange, dt, Interval::Daily))
            .collect();

        let saved = tokio_test::block_on(repo.save_bar_data(&bars));
        let saved_ticks = tokio_test::block_on(repo.save_tick_data(&[]));
        let deleted = tokio_test::block_on(repo.delete_bar_data(&symbol, exchange, Interval::Daily));

        prop_assert!(matches!(saved, Err(RepositoryError::UnsupportedOperation(_))));
        prop_assert!(matches!(saved_ticks, Err(RepositoryError::UnsupportedOperation(_))));
        prop_assert!(matches!(deleted, Err(RepositoryError::UnsupportedOperation(_))));
    }

    /// `clean` succeeds for any symbol.
    #[test]
    fn clean_always_succeeds(symbol in ".{0,16}") {
        let repo = repository();
        prop_assert!(tokio_test::block_on(repo.clean(&symbol)).is_ok());
    }

    /// Tick bars are refused for every classifiable symbol.
    #[test]
    fn tick_interval_always_unsupported(code in 600_001u32..687_999) {
        let repo = repository();
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let result = tokio_test::block_on(repo.load_bar_data(
            &format!("{code:06}"),
            Exchange::SSE,
            Interval::Tick,
            start,
            end,
        ));
        let is_unsupported = matches!(result, Err(RepositoryError::UnsupportedInterval(Interval::Tick)));
        prop_assert!(is_unsupported);
    }
}
