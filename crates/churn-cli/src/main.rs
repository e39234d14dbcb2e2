//! Churn CLI - score customer records and check artifact pairs.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use churn_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("churn=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(cmd) => cmd.run()?,
        Commands::Check(cmd) => cmd.run()?,
    }

    info!("done");
    Ok(())
}
