use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use legalops_store::FileStore;

use crate::{assign, display, onboard, report, verify};

/// Legal operations: onboard vendors, verify invoices, assign matters.
#[derive(Parser, Debug)]
#[command(name = "legalops")]
#[command(version)]
pub struct Cli {
    /// Directory holding the JSON record store and CSV inputs.
    #[arg(long, env = "LEGALOPS_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate law-firm rows and add the valid ones to the vendor roster
    Onboard {
        /// Law-firm CSV (default: <data-dir>/law_firms.csv)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Verify inbox invoices against contracted rates and notify AP
    Verify {
        /// Invoice inbox JSON (default: <data-dir>/inbox/invoices.json)
        #[arg(long)]
        inbox: Option<PathBuf>,
    },
    /// Assign matters to internal lawyers by practice area and capacity
    Assign {
        /// Matters CSV (default: <data-dir>/matters.csv)
        #[arg(long)]
        matters: Option<PathBuf>,
    },
    /// Summarise assignments, AP notifications and lawyer workload
    Report,
    /// Clear the vendor roster and logs, and zero lawyer caseloads
    Reset,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let store = FileStore::open(&cli.data_dir);
    let now = Utc::now();

    match cli.command {
        Commands::Onboard { csv } => {
            let path = csv.unwrap_or_else(|| store.dir().law_firms_csv());
            let stats = onboard::run_onboard(&store, &path)
                .with_context(|| format!("onboarding vendors from {}", path.display()))?;
            display::print_onboard(&stats);
        }
        Commands::Verify { inbox } => {
            let path = inbox.unwrap_or_else(|| store.dir().inbox_invoices());
            let stats = verify::run_verify(&store, &path, now)
                .with_context(|| format!("verifying invoices from {}", path.display()))?;
            display::print_verify(&stats);
        }
        Commands::Assign { matters } => {
            let path = matters.unwrap_or_else(|| store.dir().matters_csv());
            let stats = assign::run_assign(&store, &path, now)
                .with_context(|| format!("assigning matters from {}", path.display()))?;
            display::print_assign(&stats);
        }
        Commands::Report => {
            let data = report::run_report(&store).context("building report")?;
            display::print_report(&data);
        }
        Commands::Reset => {
            let summary = store.reset().context("resetting data directory")?;
            display::print_reset(&summary);
        }
    }
    Ok(())
}
