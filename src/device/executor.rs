//! Switch CLI command execution
//!
//! Every device interaction goes through [`CliExecutor`]: hand it a CLI
//! command string, get the command's text output back.

use crate::device::Context;
use crate::error::{ExecutionError, ExecutionResult};
use std::process::{Command as StdCommand, Stdio};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Runs a switch CLI command and returns its text output
pub trait CliExecutor: Send + Sync {
    fn cli(&self, command: &str) -> ExecutionResult<String>;
}

/// Executor that hands the command to a local program, e.g. `vsh -c`
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    /// Program followed by its leading arguments
    interpreter: Vec<String>,
}

impl ShellExecutor {
    pub fn new(interpreter: Vec<String>) -> Self {
        ShellExecutor { interpreter }
    }
}

impl CliExecutor for ShellExecutor {
    fn cli(&self, command: &str) -> ExecutionResult<String> {
        let (program, leading) = self.interpreter.split_first().ok_or_else(|| {
            ExecutionError::Spawn {
                command: command.to_string(),
                error: "no interpreter configured".to_string(),
            }
        })?;

        // Build the command; the CLI command string goes last
        let mut process = StdCommand::new(program);
        process.args(leading);
        process.arg(command);

        // Capture output, nothing to read from stdin
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());

        let output = process.output().map_err(|e| ExecutionError::Spawn {
            command: command.to_string(),
            error: e.to_string(),
        })?;

        // Check exit status
        if !output.status.success() {
            return Err(ExecutionError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Run a command through the executor, logging start time and duration
pub fn timed_cli(
    executor: &dyn CliExecutor,
    ctx: &Context,
    command: &str,
) -> ExecutionResult<String> {
    ctx.print_debug(&format!("Calling cli('{}') at {:.6}", command, unix_now()));
    let start = Instant::now();
    let result = executor.cli(command);
    ctx.print_debug(&format!(
        "cli('{}') finished in {:.4} seconds.",
        command,
        start.elapsed().as_secs_f64()
    ));
    result
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}
