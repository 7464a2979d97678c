//! Error types for type-check

use thiserror::Error;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, XcvrError>;

/// Main error type
#[derive(Error, Debug)]
pub enum XcvrError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Device command execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Errors decoding device output
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Bad command-line arguments
    #[error("{0}")]
    Usage(String),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Interpreter must name at least one program")]
    EmptyInterpreter,

    #[error("max_workers must be at least 1 (got {0})")]
    InvalidWorkers(usize),

    #[error("Rule #{index} is invalid: {reason}")]
    InvalidRule { index: usize, reason: String },
}

/// Device command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    #[error("'{command}' failed with exit code {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Worker querying {0} panicked")]
    WorkerPanicked(String),
}

/// Errors decoding device output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to decode JSON: {error}")]
    Json { error: serde_json::Error, raw: String },

    #[error("Unexpected output shape: {0}")]
    UnexpectedShape(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for parse operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Helper to determine whether an error came from bad arguments
/// (reported with usage text and a distinct exit code)
pub fn is_usage_error(err: &XcvrError) -> bool {
    matches!(err, XcvrError::Usage(_))
}
