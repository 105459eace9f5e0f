//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the TOML config, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    name = %config.repository.name,
    data_dir = %config.feeder.data_dir,
    custom_rules = config.symbol_rules.len(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.repository.name.is_empty(),
    "Repository name must not be empty"
  );
  anyhow::ensure!(
    !config.feeder.data_dir.is_empty(),
    "Feeder data_dir must not be empty"
  );

  for (i, rule) in config.symbol_rules.iter().enumerate() {
    anyhow::ensure!(
      !rule.lower.is_empty() && !rule.upper.is_empty(),
      "Symbol rule {} ({}) has an empty bound",
      i,
      rule.exchange
    );
    anyhow::ensure!(
      rule.lower < rule.upper,
      "Symbol rule {} ({}) has lower {} >= upper {}",
      i,
      rule.exchange,
      rule.lower,
      rule.upper
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::market::{Catalog, Exchange};
  use crate::domain::period::IntervalTag;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_minimal_config_uses_defaults() {
    let config = parse_config(
      r#"
      [repository]
      name = "feeder"
      "#,
    )
    .unwrap();

    assert_eq!(config.repository.log_level, "info");
    assert_eq!(config.repository.interval_tag, IntervalTag::ForcedMinute);
    assert_eq!(config.feeder.data_dir, "data/feeder");
    assert_eq!(config.classifier().rules().len(), 8);
  }

  #[test]
  fn test_custom_rules_replace_builtin_table() {
    let config = parse_config(
      r#"
      [repository]
      name = "feeder"
      interval_tag = "requested"

      [feeder]
      data_dir = "/var/feeder"

      [[symbol_rules]]
      exchange = "SZSE"
      lower = "159000"
      upper = "160000"
      catalog = "stock"
      "#,
    )
    .unwrap();

    assert_eq!(config.repository.interval_tag, IntervalTag::Requested);
    let classifier = config.classifier();
    assert_eq!(classifier.rules().len(), 1);
    assert_eq!(
      classifier.classify("159915", Exchange::SZSE).unwrap().catalog,
      Catalog::Stock
    );
    assert!(classifier.classify("000002", Exchange::SZSE).is_err());
  }

  #[test]
  fn test_inverted_rule_rejected() {
    let result = parse_config(
      r#"
      [repository]
      name = "feeder"

      [[symbol_rules]]
      exchange = "SSE"
      lower = "700000"
      upper = "600000"
      catalog = "stock"
      "#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn test_unknown_interval_tag_rejected() {
    let result = parse_config(
      r#"
      [repository]
      name = "feeder"
      interval_tag = "hourly"
      "#,
    );
    assert!(result.is_err());
  }
}
