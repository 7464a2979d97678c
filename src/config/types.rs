//! Core configuration types
//!
//! This module defines the data structures that represent a type-check.yml
//! configuration file.

use serde::Deserialize;

/// Default bridge from a shell to the switch CLI (NX-OS bash shell)
pub const DEFAULT_INTERPRETER: &[&str] = &["vsh", "-c"];

/// Default cap on concurrent SPROM queries
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Program (and leading args) used to run a CLI command; the command
    /// string is appended as the last argument
    #[serde(default = "default_interpreter")]
    pub interpreter: Vec<String>,

    /// Maximum number of concurrent SPROM queries in the status report
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Extra rewrite rules, evaluated before the built-in table
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A user-defined type rewrite rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    /// SPROM types this rule applies to
    #[serde(deserialize_with = "deserialize_string_list")]
    pub types: Vec<String>,

    /// Accepted connector codes, as printed by the SPROM command
    #[serde(deserialize_with = "deserialize_string_list")]
    pub connectors: Vec<String>,

    /// Required host lane count
    #[serde(default = "default_lanes", deserialize_with = "deserialize_lane_count")]
    pub host_lanes: String,

    /// Required media lane count
    #[serde(default = "default_lanes", deserialize_with = "deserialize_lane_count")]
    pub media_lanes: String,

    /// Type reported when the rule matches
    pub result: String,
}

fn default_interpreter() -> Vec<String> {
    DEFAULT_INTERPRETER.iter().map(|s| s.to_string()).collect()
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

fn default_lanes() -> String {
    "8".to_string()
}

/// Custom deserializer for lists that also accepts a single string
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(D::Error::custom("list entries must be strings")),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("expected a string or array of strings")),
    }
}

/// Lane counts are compared as text, but YAML users will write `8`, not `"8"`
fn deserialize_lane_count<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("lane count must be a number or string")),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interpreter: default_interpreter(),
            max_workers: default_max_workers(),
            rules: Vec::new(),
        }
    }
}
