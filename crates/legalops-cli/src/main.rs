//! legalops: vendor onboarding, invoice verification and matter assignment
//! over a JSON data directory.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assign;
mod cli;
mod display;
mod onboard;
mod report;
mod verify;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legalops=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("legalops v{}", env!("CARGO_PKG_VERSION"));
    cli::run(cli::Cli::parse())
}
