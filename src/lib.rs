// file: src/lib.rs
// version: 1.0.0
// guid: 540f5689-aeb0-4468-94e2-b56be3f84e6a

//! # configure-with-sudo
//!
//! Executes a system configuration command at most once, optionally
//! re-invoking it through `sudo`, and revokes the cached sudo credential
//! afterwards so the elevated grant is never left behind.
//!
//! ```no_run
//! use configure_with_sudo::{CommandRunner, ExecuteOptions};
//!
//! let mut runner = CommandRunner::new(["apt-get", "install", "-y", "curl"]).use_elevation(true);
//! runner.execute(ExecuteOptions::default())?;
//! assert!(runner.is_configured());
//! # Ok::<(), configure_with_sudo::ExecutionError>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod elevation;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod process;
pub mod runner;

pub use command::Command;
pub use config::RunnerConfig;
pub use elevation::ElevationConfig;
pub use encoding::OutputEncoding;
pub use error::{ConfigureError, ExecutionError, Result};
pub use process::{Completed, ProcessLauncher, SystemLauncher};
pub use runner::{CommandRunner, ExecuteOptions, RunOutput};

/// Package name
pub const TITLE: &str = env!("CARGO_PKG_NAME");

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description of the package
pub const SUMMARY: &str = "A Rust library to handle executing system commands using sudo";

/// "<title> <summary> version <version>"
pub fn about() -> String {
    format!("{} {} version {}", TITLE, SUMMARY, VERSION)
}
