use anyhow::Result;
use clap::Parser;
use tracing::info;

use solar_assistant::cli::{init_logging, Cli};
use solar_assistant::{Container, Router};

#[tokio::main]
async fn main() -> Result<()> {
    // Variables from ./.env feed clap's `env` fallbacks; real env vars win.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Missing credentials stop us before anything else starts.
    let config = cli.completion_config()?;

    let _guard = init_logging(&cli.log_file, cli.verbose)?;
    info!("Starting Solar Industry AI Assistant");

    let container = Container::new(config)?;
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
