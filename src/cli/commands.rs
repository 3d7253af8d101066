// file: src/cli/commands.rs
// version: 1.0.0
// guid: bac22ab8-c6aa-40f2-8833-64b52ec25d9d

//! Command implementations for the CLI

use super::args::ElevationArgs;
use crate::{
    config::{ConfigLoader, RunnerConfig},
    runner::{CommandRunner, ExecuteOptions},
    Result,
};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, info_span, warn};

/// Run a command once, optionally through sudo
pub fn run_command(
    elevation: &ElevationArgs,
    argv: Vec<String>,
    capture: bool,
    encoding: &str,
) -> Result<()> {
    let config = elevation.to_config(argv, encoding);
    execute_config(&config, capture)
}

/// Print the command line `run` would launch
pub fn show_command(elevation: &ElevationArgs, argv: Vec<String>) -> Result<()> {
    let config = elevation.to_config(argv, "utf-8");
    let runner = CommandRunner::from_config(&config)?;
    println!("{}", runner);
    Ok(())
}

/// Run the command described by a configuration file
pub fn apply_command(path: &Path, capture: bool) -> Result<()> {
    let config = ConfigLoader::new().load_runner_config(path)?;
    info!("Applying {}", path.display());
    execute_config(&config, capture)
}

/// Print the package title, summary and version
pub fn about_command() -> Result<()> {
    println!("{}", crate::about());
    Ok(())
}

fn execute_config(config: &RunnerConfig, capture: bool) -> Result<()> {
    let encoding = config.output_encoding()?;
    let mut runner = CommandRunner::from_config(config)?.with_span(info_span!(
        "configure",
        program = config.argv.first().map(String::as_str).unwrap_or_default()
    ));

    if runner.uses_elevation() {
        check_elevation_executable(&config.elevation_executable);
    }

    let options = ExecuteOptions {
        capture_output: capture,
        encoding,
        ..ExecuteOptions::default()
    };

    if let Some(lines) = runner.execute(options)? {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }

    info!("Configured: {}", runner.argv());
    Ok(())
}

/// Warn early when the elevation executable cannot be launched
fn check_elevation_executable(path: &Path) {
    if which::which(path).is_err() {
        warn!(
            "Elevation executable {} was not found or is not executable",
            path.display()
        );
    }
}
