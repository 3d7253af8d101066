// file: src/cli/args.rs
// version: 1.0.0
// guid: 977adcf8-4f36-44bc-92eb-77d5d39365b9

//! Command line argument definitions

use crate::config::RunnerConfig;
use crate::elevation::{DEFAULT_ELEVATION_EXECUTABLE, SUPERUSER};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "configure-with-sudo")]
#[command(about = "Run a system configuration command once, optionally through sudo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command, optionally through sudo
    Run {
        #[command(flatten)]
        elevation: ElevationArgs,

        #[arg(short, long, help = "Capture stdout and print it line by line")]
        capture: bool,

        #[arg(short, long, default_value = "utf-8", help = "Encoding of captured output")]
        encoding: String,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },

    /// Print the command line that would be run
    Show {
        #[command(flatten)]
        elevation: ElevationArgs,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },

    /// Run the command described by a YAML or TOML file
    Apply {
        config: PathBuf,

        #[arg(short, long, help = "Capture stdout and print it line by line")]
        capture: bool,
    },

    /// Print name, summary and version
    About,
}

/// Elevation options shared by `run` and `show`
#[derive(Args, Debug, Clone)]
pub struct ElevationArgs {
    #[arg(long, help = "Run the command through sudo")]
    pub sudo: bool,

    #[arg(short = 'u', long, default_value = SUPERUSER, help = "User to run the command as")]
    pub user: String,

    #[arg(short = 'H', long, help = "Ask sudo to set HOME to the target user's home")]
    pub set_home: bool,

    #[arg(long, help = "Do not revoke the sudo credential afterwards")]
    pub keep_cred: bool,

    #[arg(
        long,
        env = "CONFIGURE_WITH_SUDO_PATH",
        default_value = DEFAULT_ELEVATION_EXECUTABLE,
        help = "Path to sudo"
    )]
    pub sudo_path: PathBuf,
}

impl ElevationArgs {
    /// Runner configuration for `argv` with these options
    pub fn to_config(&self, argv: Vec<String>, encoding: &str) -> RunnerConfig {
        RunnerConfig {
            argv,
            use_elevation: self.sudo,
            kill_elevation_cred: !self.keep_cred,
            elevation_user: self.user.clone(),
            set_home_on_elevation: self.set_home,
            elevation_executable: self.sudo_path.clone(),
            encoding: encoding.to_string(),
        }
    }
}
