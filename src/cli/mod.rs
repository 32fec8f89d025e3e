//! Command-line interface definitions.
//!
//! Defines the CLI structure for the snapwarden binary using `clap`:
//! a live `run` pass, a date-range `simulate` driver, and configuration
//! utilities.

pub mod config;
#[cfg(feature = "rds")]
pub mod run;
pub mod simulate;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// Retention-driven lifecycle manager for RDS cluster snapshots
#[derive(Parser, Debug)]
#[command(name = "snapwarden")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the snapwarden CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one snapshot lifecycle pass against the live cluster API
    #[cfg(feature = "rds")]
    Run(run::RunArgs),

    /// Drive the lifecycle across a range of simulated days
    Simulate(simulate::SimulateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Dispatch a parsed CLI invocation.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        #[cfg(feature = "rds")]
        Commands::Run(args) => run::execute(&args).await,
        Commands::Simulate(args) => simulate::execute(&args).await,
        Commands::Config(command) => config::execute(&command),
    }
}
