//! Symbol classification for the feeder service.
//!
//! Maps a (symbol, exchange) pair onto a feeder `Catalog` using an ordered
//! list of exclusive string ranges. Symbols are compared as strings, never
//! parsed: "39999" sorts after "399001" and is classified as an SZSE index
//! even though it is numerically smaller.

use serde::{Deserialize, Serialize};

use crate::domain::market::{Catalog, Exchange};
use crate::error::{RepositoryError, Result};

/// One classification rule: `lower < symbol < upper` on `exchange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRule {
    pub exchange: Exchange,
    /// Exclusive lower bound.
    pub lower: String,
    /// Exclusive upper bound.
    pub upper: String,
    pub catalog: Catalog,
}

impl SymbolRule {
    pub fn new(exchange: Exchange, lower: &str, upper: &str, catalog: Catalog) -> Self {
        Self {
            exchange,
            lower: lower.to_string(),
            upper: upper.to_string(),
            catalog,
        }
    }

    /// Check whether the rule covers `symbol` on `exchange`.
    pub fn matches(&self, symbol: &str, exchange: Exchange) -> bool {
        self.exchange == exchange && self.lower.as_str() < symbol && symbol < self.upper.as_str()
    }
}

/// Result of a successful classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub catalog: Catalog,
    /// Code passed to the feeder; identical to the platform symbol.
    pub code: String,
}

/// Ordered rule list, first match wins.
#[derive(Debug, Clone)]
pub struct SymbolClassifier {
    rules: Vec<SymbolRule>,
}

impl SymbolClassifier {
    /// Create a classifier from an explicit rule list.
    pub fn new(rules: Vec<SymbolRule>) -> Self {
        Self { rules }
    }

    /// The A-share rule table.
    ///
    /// | Exchange | Range (exclusive)   | Catalog |
    /// |----------|---------------------|---------|
    /// | SZSE     | 000001 .. 002000    | Stock   |
    /// | SZSE     | 002001 .. 100000    | Stock   |
    /// | SZSE     | 300001 .. 310000    | Stock   |
    /// | SZSE     | 399001 .. 400000    | Index   |
    /// | SSE      | 600000 .. 687999    | Stock   |
    /// | SSE      | 688001 .. 699999    | Stock   |
    /// | SSE      | 000001 .. 001000    | Index   |
    /// | SSE      | 999900 .. 999999    | Index   |
    pub fn default_rules() -> Vec<SymbolRule> {
        use Catalog::{Index, Stock};
        use Exchange::{SSE, SZSE};

        vec![
            SymbolRule::new(SZSE, "000001", "002000", Stock),
            SymbolRule::new(SZSE, "002001", "100000", Stock),
            SymbolRule::new(SZSE, "300001", "310000", Stock),
            SymbolRule::new(SZSE, "399001", "400000", Index),
            SymbolRule::new(SSE, "600000", "687999", Stock),
            SymbolRule::new(SSE, "688001", "699999", Stock),
            SymbolRule::new(SSE, "000001", "001000", Index),
            SymbolRule::new(SSE, "999900", "999999", Index),
        ]
    }

    pub fn rules(&self) -> &[SymbolRule] {
        &self.rules
    }

    /// Classify a symbol.
    ///
    /// # Errors
    /// `RepositoryError::UnsupportedSymbol` when no rule matches.
    pub fn classify(&self, symbol: &str, exchange: Exchange) -> Result<Classification> {
        self.rules
            .iter()
            .find(|rule| rule.matches(symbol, exchange))
            .map(|rule| Classification {
                catalog: rule.catalog,
                code: symbol.to_string(),
            })
            .ok_or_else(|| RepositoryError::UnsupportedSymbol {
                symbol: symbol.to_string(),
                exchange,
            })
    }
}

impl Default for SymbolClassifier {
    fn default() -> Self {
        Self::new(Self::default_rules())
    }
}
