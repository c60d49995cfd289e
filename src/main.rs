//! MoneyForward CLI
//!
//! Queries accounts and transactions through the MoneyForward mobile API.

use clap::Parser;
use moneyforward::cli::Cli;
use moneyforward::commands;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match commands::execute(cli).await {
        Ok(out) => {
            println!("{}", out);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
