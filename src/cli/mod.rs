// file: src/cli/mod.rs
// version: 1.0.0
// guid: a31fb97e-6610-4e95-a415-c36ab30a8904

//! Command line interface for configure-with-sudo

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
