//! CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vidrelay_cli::Cli;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.server_config()?;
    tracing::debug!(
        source_url = config.source.base_url(),
        bind = %config.bind_address(),
        "Configuration loaded"
    );
    vidrelay_axum::start_server(config).await
}
