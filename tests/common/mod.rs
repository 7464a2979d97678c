//! Common test utilities

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use xcvr_type::device::CliExecutor;
use xcvr_type::error::{ExecutionError, ExecutionResult};

/// Create a temporary directory with a type-check.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("type-check.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Path to the shell script that impersonates the switch CLI
pub fn fake_switch_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("fake_switch.sh")
}

/// Config routing every CLI command through the fake switch script
pub fn fake_switch_config(extra: &str) -> (TempDir, PathBuf) {
    let content = format!(
        "interpreter: [sh, \"{}\"]\n{}",
        fake_switch_script().display(),
        extra
    );
    create_test_config(&content)
}

/// In-memory switch answering from a command -> output map
pub struct FakeSwitch {
    pub outputs: HashMap<String, String>,
}

impl FakeSwitch {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        FakeSwitch {
            outputs: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl CliExecutor for FakeSwitch {
    fn cli(&self, command: &str) -> ExecutionResult<String> {
        self.outputs
            .get(command)
            .cloned()
            .ok_or_else(|| ExecutionError::CommandFailed {
                command: command.to_string(),
                code: Some(16),
                stderr: "% Invalid command".to_string(),
            })
    }
}
