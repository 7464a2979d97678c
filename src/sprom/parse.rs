//! SPROM output parsing
//!
//! Turns the text of `show interface <if> transceiver sprom` into a
//! [`SpromData`] record.

use crate::device::{timed_cli, CliExecutor, Context};
use regex::Regex;
use std::sync::OnceLock;

/// Fields extracted from one interface's SPROM dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpromData {
    pub transceiver_type: String,
    pub host_lane_count: String,
    pub media_lane_count: String,
    pub connector_type: String,
    pub part_number: String,

    /// The raw output, split into lines
    pub lines: Vec<String>,

    /// Index of the `type is` line within `lines`
    pub type_line: Option<usize>,
}

fn connector_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Connector\s+:\s+(.*)").expect("valid connector regex"))
}

fn breakout_subport_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(Ethernet\d+/\d+)/\d+$").expect("valid subport regex"))
}

/// CLI command that dumps an interface's SPROM
pub fn sprom_command(interface: &str) -> String {
    format!("show interface {} transceiver sprom", interface)
}

/// Interface whose SPROM describes the optic serving `interface`
///
/// Breakout sub-ports share one optic, so `EthernetA/B/C` maps to
/// `EthernetA/B/1`. Parent ports and non-Ethernet names are returned as-is.
pub fn sprom_query_interface(interface: &str) -> String {
    match breakout_subport_re().captures(interface) {
        Some(caps) => format!("{}/1", &caps[1]),
        None => interface.to_string(),
    }
}

/// Parse SPROM output; `None` when the transceiver is absent or output is empty
pub fn parse_sprom(output: &str) -> Option<SpromData> {
    // Absent optic or nothing printed
    if output.trim().is_empty() || output.to_lowercase().contains("transceiver is not present") {
        return None;
    }

    let mut data = SpromData {
        lines: output.lines().map(str::to_string).collect(),
        ..SpromData::default()
    };

    // First matching marker wins for each line
    for (index, line) in data.lines.iter().enumerate() {
        if let Some(rest) = after(line, "type is") {
            data.transceiver_type = rest.trim().to_string();
            data.type_line = Some(index);
        } else if let Some(rest) = after(line, "host lane count is") {
            data.host_lane_count = first_token(rest);
        } else if let Some(rest) = after(line, "media lane count is") {
            data.media_lane_count = first_token(rest);
        } else if line.contains("Connector") && line.contains(':') {
            if let Some(caps) = connector_re().captures(line) {
                data.connector_type = caps[1].trim().to_string();
            }
        } else if let Some(rest) = line.trim().strip_prefix("part number is") {
            data.part_number = rest.trim().to_string();
        }
    }

    Some(data)
}

/// Query and parse one interface's SPROM
///
/// Command failures are logged and reported as "no data".
pub fn fetch_sprom(executor: &dyn CliExecutor, ctx: &Context, interface: &str) -> Option<SpromData> {
    let command = sprom_command(interface);
    match timed_cli(executor, ctx, &command) {
        Ok(output) => parse_sprom(&output),
        Err(e) => {
            ctx.print_error(&format!("cli('{}') failed: {}", command, e));
            None
        }
    }
}

/// Text between the first occurrence of `marker` and the next one (or the end)
fn after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split(marker).nth(1)
}

fn first_token(s: &str) -> String {
    s.split_whitespace().next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Ethernet1/57/1
    transceiver is present
    type is OSFP-800G-DR8
    name is CISCO
    part number is OSFP-800G-DR8
    host lane count is 8 lanes
    media lane count is 8 lanes
    Connector                 : 0x27 (MPO 2x12)
";

    #[test]
    fn test_parse_sample() {
        let data = parse_sprom(SAMPLE).unwrap();
        assert_eq!(data.transceiver_type, "OSFP-800G-DR8");
        assert_eq!(data.part_number, "OSFP-800G-DR8");
        assert_eq!(data.host_lane_count, "8");
        assert_eq!(data.media_lane_count, "8");
        assert_eq!(data.connector_type, "0x27 (MPO 2x12)");
        assert_eq!(data.type_line, Some(2));
        assert_eq!(data.lines.len(), 8);
    }

    #[test]
    fn test_not_present() {
        assert!(parse_sprom("Ethernet1/1\n    Transceiver is not present\n").is_none());
    }

    #[test]
    fn test_blank_output() {
        assert!(parse_sprom("  \n\n").is_none());
    }

    #[test]
    fn test_last_type_line_wins() {
        let data = parse_sprom("type is A\nfoo\ntype is B\n").unwrap();
        assert_eq!(data.transceiver_type, "B");
        assert_eq!(data.type_line, Some(2));
    }

    #[test]
    fn test_repeated_marker_stops_value() {
        let data = parse_sprom("type is A type is B\nhost lane count is 8 host lane count is 4\n").unwrap();
        assert_eq!(data.transceiver_type, "A");
        assert_eq!(data.host_lane_count, "8");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let data = parse_sprom("serial number is ABC123\n").unwrap();
        assert_eq!(data.transceiver_type, "");
        assert_eq!(data.connector_type, "");
        assert_eq!(data.type_line, None);
    }

    #[test]
    fn test_connector_needs_spaced_colon() {
        let data = parse_sprom("Connector:0x07\n").unwrap();
        assert_eq!(data.connector_type, "");
    }

    #[test]
    fn test_query_interface_subport() {
        assert_eq!(sprom_query_interface("Ethernet1/57/3"), "Ethernet1/57/1");
        assert_eq!(sprom_query_interface("Ethernet1/57/1"), "Ethernet1/57/1");
    }

    #[test]
    fn test_query_interface_parent_and_others() {
        assert_eq!(sprom_query_interface("Ethernet1/5"), "Ethernet1/5");
        assert_eq!(sprom_query_interface("mgmt0"), "mgmt0");
        assert_eq!(sprom_query_interface("Ethernet1/5/2/1"), "Ethernet1/5/2/1");
    }

    #[test]
    fn test_sprom_command() {
        assert_eq!(
            sprom_command("Ethernet1/1"),
            "show interface Ethernet1/1 transceiver sprom"
        );
    }
}
