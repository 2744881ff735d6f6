mod cli;
mod config;
mod services;
mod types;
mod web;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("immoboard=info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run().await
}
