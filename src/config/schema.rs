//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::{Config, RuleConfig};
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.interpreter.is_empty() || config.interpreter[0].trim().is_empty() {
        return Err(ConfigError::EmptyInterpreter);
    }

    if config.max_workers == 0 {
        return Err(ConfigError::InvalidWorkers(config.max_workers));
    }

    for (index, rule) in config.rules.iter().enumerate() {
        validate_rule(index, rule)?;
    }

    Ok(())
}

/// Validate a single rewrite rule
pub fn validate_rule(index: usize, rule: &RuleConfig) -> ConfigResult<()> {
    let invalid = |reason: &str| ConfigError::InvalidRule {
        index,
        reason: reason.to_string(),
    };

    if rule.types.is_empty() {
        return Err(invalid("no transceiver types listed"));
    }
    if rule.connectors.is_empty() {
        return Err(invalid("no connectors listed"));
    }
    if rule.result.trim().is_empty() {
        return Err(invalid("result must not be empty"));
    }
    if rule.host_lanes.trim().is_empty() || rule.media_lanes.trim().is_empty() {
        return Err(invalid("lane counts must not be empty"));
    }

    Ok(())
}
