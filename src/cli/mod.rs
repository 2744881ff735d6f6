use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::services::{Aggregator, DataLoaderService};
use crate::web::{self, AppState};

/// Swiss real-estate analytics dashboard
#[derive(Parser)]
#[command(name = "immoboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard web server (default)
    Serve {
        /// Listen address, overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },

    /// Load once, print the six chart tables as JSON, and exit
    Snapshot {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let loader = DataLoaderService::new(&config);

        match self.command {
            None | Some(Commands::Serve { bind: None }) => {
                web::serve(AppState::new(loader), &config.bind_addr).await?;
                Ok(())
            }
            Some(Commands::Serve { bind: Some(bind) }) => {
                web::serve(AppState::new(loader), &bind).await?;
                Ok(())
            }
            Some(Commands::Snapshot { pretty }) => {
                let listings = loader.load().await?;
                let dashboard = Aggregator::dashboard(&listings);
                if dashboard.is_empty() {
                    tracing::warn!("warehouse returned no listings");
                }
                let json = if pretty {
                    serde_json::to_string_pretty(&dashboard)?
                } else {
                    serde_json::to_string(&dashboard)?
                };
                println!("{json}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["immoboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["immoboard", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Serve { bind: Some(ref b) }) if b == "127.0.0.1:9000"
        ));
    }

    #[test]
    fn test_cli_parse_snapshot() {
        let cli = Cli::try_parse_from(["immoboard", "snapshot"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Snapshot { pretty: false })
        ));
    }

    #[test]
    fn test_cli_parse_snapshot_pretty() {
        let cli = Cli::try_parse_from(["immoboard", "snapshot", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Snapshot { pretty: true })));
    }
}
