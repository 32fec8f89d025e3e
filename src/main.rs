use clap::Parser;
use snapwarden::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // AWS credentials and region come in through the environment; a
    // local .env is honored when present.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::execute(cli).await {
        eprintln!("snapwarden: {e}");
        std::process::exit(1);
    }
}
