// file: src/main.rs
// version: 1.0.0
// guid: da74a194-61c4-463e-bb29-023cc2e06691

//! configure-with-sudo - main entry point

use clap::Parser;
use configure_with_sudo::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Run {
            elevation,
            capture,
            encoding,
            argv,
        } => run_command(&elevation, argv, capture, &encoding),
        Commands::Show { elevation, argv } => show_command(&elevation, argv),
        Commands::Apply { config, capture } => apply_command(&config, capture),
        Commands::About => about_command(),
    }?;

    Ok(())
}
