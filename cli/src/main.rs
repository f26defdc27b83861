use clap::Parser;
use std::process::ExitCode;

use krathub_cli::{AppState, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    krathub_core::init_logging();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let state = AppState::new(&config)?;

    tracing::debug!(api_base_url = %config.api_base_url, "Running command");

    let succeeded = krathub_cli::run(&cli, &state).await?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
