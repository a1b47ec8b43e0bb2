//! Report over whatever the data directory currently holds.

use anyhow::Context;
use legalops_core::{AssignmentReport, VerificationSummary, Workload, workload};
use legalops_store::{FileStore, StoreError};

pub struct ReportData {
    pub assignments: AssignmentReport,
    /// `None` when no notification log exists yet.
    pub verification: Option<VerificationSummary>,
    /// `None` when there is no lawyer roster.
    pub workload: Option<Vec<Workload>>,
}

pub fn run_report(store: &FileStore) -> anyhow::Result<ReportData> {
    let log = store.load_assignments().context("loading assignment log")?;

    let verification = if store.dir().ap_notifications().exists() {
        let notes = store
            .load_notifications()
            .context("loading notification log")?;
        let summary = VerificationSummary::from_notifications(&notes.notifications)
            .context("summarising notification log")?;
        Some(summary)
    } else {
        None
    };

    let workload = match store.load_lawyers() {
        Ok(roster) => Some(workload(&roster.lawyers)),
        Err(StoreError::NotFound(_)) => None,
        Err(e) => return Err(e).context("loading lawyer roster"),
    };

    Ok(ReportData {
        assignments: AssignmentReport::from_assignments(&log.assignments),
        verification,
        workload,
    })
}
