//! Single-interface SPROM report

use crate::device::{timed_cli, CliExecutor, Context};
use crate::sprom::{fetch_sprom, RuleTable, SpromData};
use regex::Regex;
use std::sync::OnceLock;

/// Heading placed between the SPROM dump and the lane details
pub const DETAILS_HEADING: &str = "--- Transceiver Details (Lane Information) ---";

fn type_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(type is\s+).*").expect("valid type line regex"))
}

/// CLI command for the per-lane transceiver details
pub fn details_command(interface: &str) -> String {
    format!(
        "show interface {} transceiver details | begin \"Lane Number:\"",
        interface
    )
}

/// Replace the value on a `type is` line, keeping everything before it
pub fn rewrite_type_line(line: &str, new_type: &str) -> String {
    type_value_re()
        .replace(line, |caps: &regex::Captures| format!("{}{}", &caps[1], new_type))
        .into_owned()
}

/// Build the SPROM dump for `interface` with its type rewritten
///
/// Returns an error line in place of the report when no SPROM data could be
/// read. With `include_details`, the lane details are appended.
pub fn render_single_report(
    executor: &dyn CliExecutor,
    ctx: &Context,
    rules: &RuleTable,
    interface: &str,
    include_details: bool,
) -> String {
    let Some(data) = fetch_sprom(executor, ctx, interface) else {
        return format!(
            "Error: Could not retrieve SPROM data for {} or transceiver not present.",
            interface
        );
    };

    let mut lines = rewrite_sprom_lines(ctx, rules, &data);

    if include_details {
        append_details(executor, ctx, interface, &mut lines);
    }

    lines.join("\n")
}

/// SPROM output lines with the resolved type substituted
pub fn rewrite_sprom_lines(ctx: &Context, rules: &RuleTable, data: &SpromData) -> Vec<String> {
    let resolution = rules.resolve(Some(data));

    if resolution.is_modified() {
        ctx.print_debug(&format!(
            "Type modified from '{}' to '{}' based on conditions.",
            resolution.original, resolution.resolved
        ));
    } else {
        ctx.print_debug(&format!(
            "No conditions met to modify type. Current type: '{}'.",
            resolution.original
        ));
    }

    let mut lines = data.lines.clone();
    match data.type_line {
        Some(index) => {
            lines[index] = rewrite_type_line(&data.lines[index], &resolution.resolved);
        }
        None => {
            ctx.print_warn("'type is' line not found for replacement, even though type was extracted.");
        }
    }
    lines
}

fn append_details(
    executor: &dyn CliExecutor,
    ctx: &Context,
    interface: &str,
    lines: &mut Vec<String>,
) {
    let command = details_command(interface);
    ctx.print_action(&format!("\nExecuting additional command: {}", command));

    match timed_cli(executor, ctx, &command) {
        Ok(output) => {
            lines.push(format!("\n{}", DETAILS_HEADING));
            lines.push(output);
            ctx.print_action("Additional 'details' output collected.");
        }
        Err(e) => {
            ctx.print_error(&format!("cli('{}') failed: {}", command, e));
            lines.push(format!("\nError collecting transceiver details: {}", e));
        }
    }
}
