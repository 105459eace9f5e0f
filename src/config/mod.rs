//! Configuration Module - TOML-based Repository Configuration
//!
//! Loads and validates configuration from a TOML file. The symbol
//! classification rules may be overridden here; when none are given
//! the built-in A-share table applies.

pub mod loader;

use serde::Deserialize;

use crate::domain::classifier::{SymbolClassifier, SymbolRule};
use crate::domain::period::IntervalTag;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Repository identity and output policy.
  pub repository: RepositoryConfig,
  /// Feeder data source.
  #[serde(default)]
  pub feeder: FeederConfig,
  /// Classification rules, evaluated in order. Empty means built-in.
  #[serde(default)]
  pub symbol_rules: Vec<SymbolRule>,
}

impl AppConfig {
  /// Build the classifier described by this config.
  pub fn classifier(&self) -> SymbolClassifier {
    if self.symbol_rules.is_empty() {
      SymbolClassifier::default()
    } else {
      SymbolClassifier::new(self.symbol_rules.clone())
    }
  }
}

/// Repository configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
  /// Human-readable repository name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Interval stamped on returned bars.
  #[serde(default)]
  pub interval_tag: IntervalTag,
}

/// Feeder configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeederConfig {
  /// Directory of captured JSONL feeder rows.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
}

impl Default for FeederConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_data_dir() -> String {
  "data/feeder".to_string()
}
