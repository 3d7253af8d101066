// file: src/config/mod.rs
// version: 1.0.0
// guid: ecae7de7-25d7-48cf-b3e9-402b55dd041a

//! Declarative runner configuration
//!
//! A [`RunnerConfig`] carries every constructor option of a
//! [`CommandRunner`] so that a configuration step can be described in a
//! YAML or TOML file and loaded with [`loader::ConfigLoader`].

pub mod loader;

pub use loader::ConfigLoader;

use crate::command::Command;
use crate::elevation::{ElevationConfig, DEFAULT_ELEVATION_EXECUTABLE, SUPERUSER};
use crate::encoding::OutputEncoding;
use crate::error::{ConfigureError, Result};
use crate::runner::CommandRunner;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Constructor options for a [`CommandRunner`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub argv: Vec<String>,
    pub use_elevation: bool,
    pub kill_elevation_cred: bool,
    pub elevation_user: String,
    pub set_home_on_elevation: bool,
    pub elevation_executable: PathBuf,
    /// Label of the encoding used to decode captured output
    pub encoding: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            argv: Vec::new(),
            use_elevation: false,
            kill_elevation_cred: true,
            elevation_user: SUPERUSER.to_string(),
            set_home_on_elevation: false,
            elevation_executable: PathBuf::from(DEFAULT_ELEVATION_EXECUTABLE),
            encoding: "utf-8".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Defaults for the given command
    pub fn for_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.argv.is_empty() {
            return Err(ConfigureError::config("argv must contain at least the program to run"));
        }

        if self.elevation_user.trim().is_empty() {
            return Err(ConfigureError::config("elevation_user cannot be empty"));
        }

        if self.elevation_executable.as_os_str().is_empty() {
            return Err(ConfigureError::config("elevation_executable cannot be empty"));
        }

        self.output_encoding()?;
        Ok(())
    }

    pub fn elevation(&self) -> ElevationConfig {
        ElevationConfig {
            executable: self.elevation_executable.clone(),
            user: self.elevation_user.clone(),
            set_home: self.set_home_on_elevation,
            revoke_credential: self.kill_elevation_cred,
        }
    }

    /// Resolve the `encoding` label
    pub fn output_encoding(&self) -> Result<OutputEncoding> {
        OutputEncoding::for_label(&self.encoding)
            .ok_or_else(|| ConfigureError::config(format!("Unknown output encoding: {}", self.encoding)))
    }
}

impl CommandRunner {
    /// Build a runner from a validated configuration
    pub fn from_config(config: &RunnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(CommandRunner::new(Command::new(config.argv.iter().cloned()))
            .with_elevation(config.elevation())
            .use_elevation(config.use_elevation))
    }
}
