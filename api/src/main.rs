use anyhow::Result;
use clap::Parser;
use portfolio_api::{run_server, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stub API for the portfolio site
#[derive(Debug, Parser)]
#[command(name = "portfolio-api", version)]
struct Cli {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.debug {
        config.debug = true;
    }

    // Setup logging
    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let handle = run_server(config).await?;
    info!("Portfolio API started on port {}", handle.port());

    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl+C signal, shutting down...");
    handle.shutdown();

    Ok(())
}
