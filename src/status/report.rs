//! The `status` command

use crate::device::{timed_cli, CliExecutor, Context};
use crate::error::{ParseError, XcvrError};
use crate::sprom::RuleTable;
use crate::status::{collect_sprom, parse_status, query_targets, render_status_table, STATUS_COMMAND};
use crate::ui;
use std::time::Instant;

/// How much raw output to echo when the status JSON cannot be decoded
const RAW_PREVIEW_CHARS: usize = 500;

/// Fetch the status table, type every port from SPROM, and render it
///
/// Returns `Ok(None)` when the switch reported no interfaces.
pub fn build_status_table(
    executor: &dyn CliExecutor,
    ctx: &Context,
    rules: &RuleTable,
    max_workers: usize,
) -> Result<Option<Vec<String>>, XcvrError> {
    let json = timed_cli(executor, ctx, STATUS_COMMAND)?;

    // Report the decode error first, then a preview of what the switch sent
    let rows = parse_status(&json).map_err(|e| {
        ctx.print_error(&format!("Failed to decode '{}' output: {}", STATUS_COMMAND, e));
        if let ParseError::Json { raw, .. } = &e {
            ctx.print_error(&format!(
                "Raw JSON output: {}...",
                raw.chars().take(RAW_PREVIEW_CHARS).collect::<String>()
            ));
        }
        e
    })?;

    if rows.is_empty() {
        return Ok(None);
    }

    let targets = query_targets(&rows);
    ctx.print_debug(&format!(
        "Canonical SPROM query interfaces identified: {:?}",
        targets
    ));
    ctx.print_debug(&format!(
        "Starting concurrent SPROM data collection for {} interfaces with max {} workers...",
        targets.len(),
        max_workers
    ));

    let start = Instant::now();
    let cache = collect_sprom(executor, ctx, &targets, max_workers);
    ctx.print_debug(&format!(
        "Concurrent SPROM data collection finished in {:.4} seconds.",
        start.elapsed().as_secs_f64()
    ));

    Ok(Some(render_status_table(&rows, &cache, rules)))
}

/// Run the `status` command and print the modified table
pub fn run_status(
    executor: &dyn CliExecutor,
    ctx: &Context,
    rules: &RuleTable,
    max_workers: usize,
) -> Result<(), XcvrError> {
    ctx.print_action(&format!("Executing command: {}", STATUS_COMMAND));

    match build_status_table(executor, ctx, rules, max_workers)? {
        Some(lines) => {
            println!("\n{}", ui::banner("Modified Interface Status"));
            println!("{}", lines.join("\n"));
        }
        None => {
            ctx.print_action(&format!(
                "No interface data found in '{}' output.",
                STATUS_COMMAND
            ));
        }
    }

    Ok(())
}
