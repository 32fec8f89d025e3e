//! Handler for the `run` command.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Arguments for `snapwarden run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "snapwarden.toml")]
    pub config: PathBuf,

    /// Compute and log the plan without creating or deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();
    info!("snapwarden starting");

    App::run(&config, args.dry_run).await?;

    info!("snapwarden finished");
    Ok(())
}
