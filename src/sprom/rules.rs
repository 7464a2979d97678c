//! Transceiver type rewrite rules
//!
//! Some optics report a generic EEPROM type that hides how they are broken
//! out. A [`RewriteRule`] maps a (type, connector, lane counts) combination to
//! the breakout-aware name operators expect to see.

use crate::config::RuleConfig;
use crate::sprom::SpromData;

/// Placeholder shown when no SPROM data is available
pub const NO_DATA: &str = "--";

const MPO_CONNECTORS: &[&str] = &["0x27 (MPO 2x12)", "0x0c (MPO)"];

/// One conditional rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub types: Vec<String>,
    pub connectors: Vec<String>,
    pub host_lanes: String,
    pub media_lanes: String,
    pub result: String,
}

impl RewriteRule {
    fn builtin(types: &[&str], connectors: &[&str], result: &str) -> Self {
        RewriteRule {
            types: types.iter().map(|s| s.to_string()).collect(),
            connectors: connectors.iter().map(|s| s.to_string()).collect(),
            host_lanes: "8".to_string(),
            media_lanes: "8".to_string(),
            result: result.to_string(),
        }
    }

    /// Exact, case-sensitive match on all four conditions
    pub fn matches(&self, data: &SpromData) -> bool {
        self.types.iter().any(|t| *t == data.transceiver_type)
            && self.connectors.iter().any(|c| *c == data.connector_type)
            && self.host_lanes == data.host_lane_count
            && self.media_lanes == data.media_lane_count
    }
}

impl From<RuleConfig> for RewriteRule {
    fn from(config: RuleConfig) -> Self {
        RewriteRule {
            types: config.types,
            connectors: config.connectors,
            host_lanes: config.host_lanes,
            media_lanes: config.media_lanes,
            result: config.result,
        }
    }
}

/// Original SPROM type alongside the type to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResolution {
    pub original: String,
    pub resolved: String,
}

impl TypeResolution {
    fn no_data() -> Self {
        TypeResolution {
            original: NO_DATA.to_string(),
            resolved: NO_DATA.to_string(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.original != self.resolved
    }
}

/// Ordered rule list; the first matching rule wins
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    /// The 800G OSFP112 breakout rules
    pub fn builtin() -> Self {
        RuleTable {
            rules: vec![
                RewriteRule::builtin(
                    &["OSFP-2x400G-FR4", "OSFP-800G-DR8-2"],
                    &["0x07 (LC)"],
                    "800G-2FR4-OSFP112",
                ),
                RewriteRule::builtin(
                    &["OSFP-800G-DR8", "OSFP-2x400G-DR4"],
                    MPO_CONNECTORS,
                    "800G-2DR4-OSFP112",
                ),
                RewriteRule::builtin(
                    &["OSFP-800G-VR8", "OSFP-2x400G-VR4"],
                    MPO_CONNECTORS,
                    "800G-2VR4-OSFP112",
                ),
                RewriteRule::builtin(
                    &["OSFP-800G-SR8", "OSFP-2x400G-SR4"],
                    MPO_CONNECTORS,
                    "800G-2SR4-OSFP112",
                ),
            ],
        }
    }

    /// User rules first, then the built-in table
    pub fn with_extra_rules(extra: Vec<RuleConfig>) -> Self {
        let mut rules: Vec<RewriteRule> = extra.into_iter().map(RewriteRule::from).collect();
        rules.extend(Self::builtin().rules);
        RuleTable { rules }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Resolve the display type for parsed SPROM data
    pub fn resolve(&self, data: Option<&SpromData>) -> TypeResolution {
        let Some(data) = data else {
            return TypeResolution::no_data();
        };

        let resolved = self
            .rules
            .iter()
            .find(|rule| rule.matches(data))
            .map(|rule| rule.result.clone())
            .unwrap_or_else(|| data.transceiver_type.clone());

        TypeResolution {
            original: data.transceiver_type.clone(),
            resolved,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
