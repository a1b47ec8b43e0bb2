//! Onboarding pipeline: law-firm CSV → validated vendors → vendor roster.

use std::path::Path;

use anyhow::Context;
use legalops_core::{
    Onboarding, RecordError, Repository, ValidationReport, VendorRoster, onboard_vendor,
};
use legalops_store::{FileStore, ingest};
use tracing::warn;

pub struct Accepted {
    pub vendor_id: String,
    pub firm_name: String,
    pub warnings: Vec<String>,
}

pub struct OnboardStats {
    pub rows: usize,
    pub accepted: Vec<Accepted>,
    pub rejected: Vec<ValidationReport>,
    /// Rows that passed validation but could not be turned into a record.
    pub skipped: Vec<(usize, RecordError)>,
    pub roster_size: usize,
}

/// Validate every row of `csv_path` and write the valid firms as a fresh
/// roster numbered from `VND-1001`, replacing any previous one.
pub fn run_onboard(store: &FileStore, csv_path: &Path) -> anyhow::Result<OnboardStats> {
    let rows = ingest::read_csv_rows(csv_path).context("reading law-firm csv")?;
    let mut roster = VendorRoster::default();
    let mut ids = roster.id_sequence();

    let mut stats = OnboardStats {
        rows: rows.len(),
        accepted: Vec::new(),
        rejected: Vec::new(),
        skipped: Vec::new(),
        roster_size: 0,
    };

    for (index, row) in rows.iter().enumerate() {
        match onboard_vendor(row, &mut roster, &mut ids) {
            Ok(Onboarding::Accepted {
                vendor_id,
                firm_name,
                warnings,
            }) => stats.accepted.push(Accepted {
                vendor_id,
                firm_name,
                warnings,
            }),
            Ok(Onboarding::Rejected(report)) => stats.rejected.push(report),
            Err(e) => {
                warn!(row = index + 1, error = %e, "skipping vendor row");
                stats.skipped.push((index + 1, e));
            }
        }
    }

    roster.advance_to(&ids);
    store.save_vendors(&roster).context("saving vendor roster")?;
    stats.roster_size = roster.len();
    Ok(stats)
}
