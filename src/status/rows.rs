//! `show interface status | json` decoding

use crate::error::{ParseError, ParseResult};
use serde_json::Value;

/// CLI command producing the status table as JSON
pub const STATUS_COMMAND: &str = "show interface status | json";

/// One row of the interface status table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRow {
    pub interface: String,
    pub name: String,
    pub state: String,
    pub vlan: String,
    pub duplex: String,
    pub speed: String,
    pub port_type: String,
}

impl StatusRow {
    fn from_json(row: &Value) -> Self {
        StatusRow {
            interface: field(row, "interface"),
            name: field(row, "name"),
            state: field(row, "state"),
            vlan: field(row, "vlan"),
            duplex: field(row, "duplex"),
            speed: field(row, "speed"),
            port_type: field(row, "type"),
        }
    }

    pub fn is_ethernet(&self) -> bool {
        self.interface.starts_with("Ethernet")
    }

    pub fn is_xcvr_absent(&self) -> bool {
        self.state.eq_ignore_ascii_case("xcvrAbsent")
    }

    /// Ethernet ports with an optic seated get their type from SPROM
    pub fn wants_sprom(&self) -> bool {
        self.is_ethernet() && !self.is_xcvr_absent()
    }
}

/// Scalar JSON field as text; missing or null fields are empty
fn field(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Decode the status JSON into rows, in device order
///
/// NX-OS emits `ROW_interface` as a bare object when there is only one row.
pub fn parse_status(json: &str) -> ParseResult<Vec<StatusRow>> {
    let root: Value = serde_json::from_str(json).map_err(|error| ParseError::Json {
        error,
        raw: json.to_string(),
    })?;

    if !root.is_object() {
        return Err(ParseError::UnexpectedShape(
            "top-level value is not an object".to_string(),
        ));
    }

    let rows = match root.get("TABLE_interface").and_then(|t| t.get("ROW_interface")) {
        Some(Value::Array(rows)) => rows.iter().map(StatusRow::from_json).collect(),
        Some(row @ Value::Object(_)) => vec![StatusRow::from_json(row)],
        _ => Vec::new(),
    };

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let json = r#"{"TABLE_interface": {"ROW_interface": [
            {"interface": "mgmt0", "state": "connected", "vlan": "routed",
             "duplex": "full", "speed": "1000", "type": "--"},
            {"interface": "Ethernet1/1", "name": "uplink", "state": "xcvrAbsent",
             "vlan": 1, "duplex": "auto", "speed": "auto"}
        ]}}"#;

        let rows = parse_status(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].interface, "mgmt0");
        assert_eq!(rows[0].port_type, "--");
        assert_eq!(rows[1].name, "uplink");
        assert_eq!(rows[1].vlan, "1");
        assert_eq!(rows[1].port_type, "");
    }

    #[test]
    fn test_parse_single_row_object() {
        let json = r#"{"TABLE_interface": {"ROW_interface":
            {"interface": "Ethernet1/1", "state": "connected"}}}"#;
        let rows = parse_status(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "connected");
    }

    #[test]
    fn test_parse_missing_table() {
        assert!(parse_status("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        match parse_status("% Invalid command at '^' marker") {
            Err(ParseError::Json { raw, .. }) => assert!(raw.starts_with("% Invalid")),
            other => panic!("expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_object() {
        assert!(matches!(
            parse_status("[1, 2]"),
            Err(ParseError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_wants_sprom() {
        let row = |interface: &str, state: &str| StatusRow {
            interface: interface.to_string(),
            state: state.to_string(),
            ..StatusRow::default()
        };
        assert!(row("Ethernet1/1", "connected").wants_sprom());
        assert!(row("Ethernet1/1", "notconnec").wants_sprom());
        assert!(!row("Ethernet1/1", "XCVRABSENT").wants_sprom());
        assert!(!row("mgmt0", "connected").wants_sprom());
    }
}
