//! Repository errors.

use thiserror::Error;

use crate::domain::market::{Exchange, Interval};

/// Errors returned by the bar database port.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No classification rule matched the symbol on this exchange.
    #[error("Not supported symbol: {symbol}.{exchange}")]
    UnsupportedSymbol { symbol: String, exchange: Exchange },

    /// The interval has no feeder period.
    #[error("Not supported interval: {0}")]
    UnsupportedInterval(Interval),

    /// Read operation the repository does not provide.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Write operation rejected; the repository is read-only.
    #[error("Operation {0} not supported on feeder repository")]
    UnsupportedOperation(&'static str),

    /// The feeder service call failed.
    #[error(transparent)]
    Feeder(#[from] anyhow::Error),
}

/// Result alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_symbol_message() {
        let err = RepositoryError::UnsupportedSymbol {
            symbol: "123456".to_string(),
            exchange: Exchange::SZSE,
        };
        assert_eq!(err.to_string(), "Not supported symbol: 123456.SZSE");
    }

    #[test]
    fn test_feeder_error_is_transparent() {
        let err: RepositoryError = anyhow::anyhow!("feeder timed out").into();
        assert_eq!(err.to_string(), "feeder timed out");
        assert!(matches!(err, RepositoryError::Feeder(_)));
    }
}
