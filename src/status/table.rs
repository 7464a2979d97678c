//! Fixed-width rendering of the modified status table

use crate::sprom::{sprom_query_interface, RuleTable, NO_DATA};
use crate::status::{SpromCache, StatusRow};

/// A status table column and its display width
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

/// Port, Name, Status, Vlan, Duplex, Speed, Type
pub const COLUMNS: [Column; 7] = [
    Column { title: "Port", width: 15 },
    Column { title: "Name", width: 19 },
    Column { title: "Status", width: 9 },
    Column { title: "Vlan", width: 9 },
    Column { title: "Duplex", width: 7 },
    Column { title: "Speed", width: 8 },
    Column { title: "Type", width: 25 },
];

const NAME: usize = 1;
const STATUS: usize = 2;

/// Header, separator, and one line per row in device order
pub fn render_status_table(rows: &[StatusRow], cache: &SpromCache, rules: &RuleTable) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(join_cells(COLUMNS.iter().map(|c| c.title.to_string())));
    lines.push(join_cells(COLUMNS.iter().map(|c| "-".repeat(c.width))));

    for row in rows {
        lines.push(render_row(row, cache, rules));
    }

    lines
}

/// One table line for `row`
pub fn render_row(row: &StatusRow, cache: &SpromCache, rules: &RuleTable) -> String {
    let port = row.interface.replace("Ethernet", "Eth");
    let name = truncate(&row.name, COLUMNS[NAME].width);
    let state = truncate(&row.state.replace("xcvrAbsent", "xcvrAbsen"), COLUMNS[STATUS].width);

    join_cells(
        [
            port,
            name,
            state,
            row.vlan.clone(),
            row.duplex.clone(),
            row.speed.clone(),
            display_type(row, cache, rules),
        ]
        .into_iter(),
    )
}

/// Type column value: resolved SPROM type, `--` for empty cages, else the
/// type the switch reported
pub fn display_type(row: &StatusRow, cache: &SpromCache, rules: &RuleTable) -> String {
    if row.wants_sprom() {
        let key = sprom_query_interface(&row.interface);
        let data = cache.get(&key).and_then(Option::as_ref);
        rules.resolve(data).resolved
    } else if row.is_xcvr_absent() {
        NO_DATA.to_string()
    } else {
        row.port_type.clone()
    }
}

/// Left-justify each cell to its column width and join with single spaces
fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells
        .zip(COLUMNS.iter())
        .map(|(cell, column)| format!("{:<width$}", cell, width = column.width))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprom::parse_sprom;

    fn row(interface: &str, state: &str, port_type: &str) -> StatusRow {
        StatusRow {
            interface: interface.to_string(),
            state: state.to_string(),
            vlan: "routed".to_string(),
            duplex: "full".to_string(),
            speed: "400G".to_string(),
            port_type: port_type.to_string(),
            ..StatusRow::default()
        }
    }

    fn sr8_cache() -> SpromCache {
        let sr8 = parse_sprom(
            "type is OSFP-800G-SR8\nhost lane count is 8\nmedia lane count is 8\nConnector : 0x0c (MPO)\n",
        );
        let mut cache = SpromCache::new();
        cache.insert("Ethernet1/57/1".to_string(), sr8);
        cache.insert("Ethernet1/58".to_string(), None);
        cache
    }

    #[test]
    fn test_header_and_separator() {
        let lines = render_status_table(&[], &SpromCache::new(), &RuleTable::builtin());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!(
                "{:<15} {:<19} {:<9} {:<9} {:<7} {:<8} {:<25}",
                "Port", "Name", "Status", "Vlan", "Duplex", "Speed", "Type"
            )
        );
        assert_eq!(
            lines[1],
            format!(
                "{} {} {} {} {} {} {}",
                "-".repeat(15),
                "-".repeat(19),
                "-".repeat(9),
                "-".repeat(9),
                "-".repeat(7),
                "-".repeat(8),
                "-".repeat(25)
            )
        );
        assert_eq!(lines[1].len(), 15 + 19 + 9 + 9 + 7 + 8 + 25 + 6);
    }

    #[test]
    fn test_breakout_subport_uses_first_subport_sprom() {
        let line = render_row(
            &row("Ethernet1/57/2", "connected", "OSFP-800G-SR8"),
            &sr8_cache(),
            &RuleTable::builtin(),
        );
        assert!(line.starts_with("Eth1/57/2       "));
        assert_eq!(line.trim_end().rsplit(' ').next(), Some("800G-2SR4-OSFP112"));
    }

    #[test]
    fn test_failed_query_shows_placeholder() {
        let cache = sr8_cache();
        let rules = RuleTable::builtin();
        assert_eq!(display_type(&row("Ethernet1/58", "connected", "QSFP"), &cache, &rules), "--");
        // not in the cache at all
        assert_eq!(display_type(&row("Ethernet1/60", "connected", "QSFP"), &cache, &rules), "--");
    }

    #[test]
    fn test_absent_and_non_ethernet() {
        let cache = sr8_cache();
        let rules = RuleTable::builtin();
        assert_eq!(display_type(&row("Ethernet1/59", "xcvrAbsent", "QSFP"), &cache, &rules), "--");
        assert_eq!(display_type(&row("mgmt0", "connected", "--"), &cache, &rules), "--");
        assert_eq!(display_type(&row("Vlan10", "connected", "routed-ip"), &cache, &rules), "routed-ip");
    }

    #[test]
    fn test_status_column_truncation() {
        let line = render_row(
            &row("Ethernet1/59", "xcvrAbsent", ""),
            &SpromCache::new(),
            &RuleTable::builtin(),
        );
        let status = &line[16 + 20..16 + 20 + 9];
        assert_eq!(status, "xcvrAbsen");

        let line = render_row(
            &row("Ethernet1/60", "sfpAbsentLongState", ""),
            &SpromCache::new(),
            &RuleTable::builtin(),
        );
        assert_eq!(&line[36..45], "sfpAbsent");
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let mut long = row("port-channel1000", "connected", "");
        long.speed = "100000000".to_string();
        let line = render_row(&long, &SpromCache::new(), &RuleTable::builtin());
        assert!(line.starts_with("port-channel1000 "));
        assert!(line.contains(" 100000000 "));
    }

    #[test]
    fn test_name_is_truncated_to_column() {
        let mut named = row("Ethernet1/1", "connected", "");
        named.name = "a-very-long-description-of-the-link".to_string();
        let line = render_row(&named, &SpromCache::new(), &RuleTable::builtin());
        assert_eq!(&line[16..35], "a-very-long-descrip");
        assert_eq!(&line[35..36], " ");
    }
}
