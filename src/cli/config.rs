//! Handlers for the `config` subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// Subcommands for `snapwarden config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness
    Validate(ConfigPathArg),
    /// Display the effective configuration with defaults applied
    Show(ConfigPathArg),
}

/// Shared `--config` path argument.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(short, long, default_value = "snapwarden.toml")]
    pub config: PathBuf,
}

/// Execute a config subcommand.
pub fn execute(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Validate(args) => {
            Config::load(&args.config)?;
            println!("configuration OK: {}", args.config.display());
            Ok(())
        }
        ConfigCommand::Show(args) => {
            let config = Config::load(&args.config)?;
            println!("{config:#?}");
            Ok(())
        }
    }
}
