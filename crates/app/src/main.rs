//! SC marketplace API client - command-line entry point
//!
//! Builds the client from the environment and the command-line flags,
//! restores the stored session, then runs one command.

use clap::Parser;
use sc_infrastructure::{
    ClientSettings, InMemorySessionStorage, build_client, build_client_with,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON output.
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = ClientSettings::from_env()?;
    if let Some(base_url) = cli.base_url {
        settings = settings.with_base_url(base_url);
    }
    if let Some(path) = cli.session_file {
        settings = settings.with_session_file(path);
    }

    tracing::debug!(base_url = %settings.base_url, "starting sc v{}", env!("CARGO_PKG_VERSION"));

    if cli.ephemeral {
        let client = build_client_with(&settings, InMemorySessionStorage::new())?;
        client.initialize_session().await;
        commands::execute(&client, cli.command).await
    } else {
        let client = build_client(&settings)?;
        client.initialize_session().await;
        commands::execute(&client, cli.command).await
    }
}
