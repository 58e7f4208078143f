//! FitLayout CLI main entry point

use anyhow::{Context, Result};
use clap::Parser;
use fitlayout_cli::start_interactive;
use fitlayout_client::RepositoryClient;
use std::io::Write;

/// Command shell for a remote FitLayout artifact repository.
#[derive(Debug, Parser)]
#[command(name = "fitlayout-cli", version, about)]
struct Cli {
    /// FitLayout server connection URL, e.g. http://localhost:8080/fitlayout
    connection_url: String,

    /// Repository identifier
    #[arg(default_value = "default")]
    repository_id: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = RepositoryClient::new(&cli.connection_url, &cli.repository_id)?;
    print!("Pinging FitLayout server... ");
    std::io::stdout().flush()?;
    client
        .ping()
        .with_context(|| format!("repository {} is not reachable", client.base_url()))?;
    println!("ok");

    start_interactive(client)
}
