// file: src/error.rs
// version: 1.0.0
// guid: 33265d2a-5efb-48d3-a95c-b27d0a86bc08

use std::io;
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ConfigureError>;

/// Failure of a command run by a [`CommandRunner`](crate::CommandRunner).
///
/// This is the only error the runner produces. Callers that care about the
/// cause match on the variant or walk [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` {}", describe_exit(.code))]
    Exit { command: String, code: Option<i32> },

    #[error("output of `{command}` is not valid {encoding}")]
    Decode {
        command: String,
        encoding: &'static str,
    },

    #[error("failed to revoke elevation credential: {0}")]
    Revoke(#[source] Box<ExecutionError>),

    #[error("{primary} (credential revocation also failed: {cleanup})")]
    CleanupAfterFailure {
        #[source]
        primary: Box<ExecutionError>,
        cleanup: Box<ExecutionError>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl ExecutionError {
    /// Exit code of the failed process, if the failure was a non-zero exit
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { code, .. } => *code,
            Self::CleanupAfterFailure { primary, .. } => primary.exit_code(),
            _ => None,
        }
    }

    /// Whether credential revocation failed at any point
    pub fn revocation_failed(&self) -> bool {
        matches!(self, Self::Revoke(_) | Self::CleanupAfterFailure { .. })
    }
}

/// Error types for configuration loading and the command line front end
#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigureError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
