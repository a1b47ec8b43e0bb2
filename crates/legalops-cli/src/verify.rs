//! Verification pipeline: inbox invoices → rate audit → AP notifications.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use legalops_core::{
    NotificationRecord, RecordError, Repository, VerificationResult, VerificationSummary,
    verify_invoice,
};
use legalops_store::FileStore;
use tracing::warn;

pub struct VerifyStats {
    pub results: Vec<VerificationResult>,
    /// Inbox entries that were not valid invoice JSON: (position, error).
    pub malformed: Vec<(usize, String)>,
    /// Invoices that parsed but failed structural checks.
    pub skipped: Vec<(String, RecordError)>,
    pub notifications: Vec<NotificationRecord>,
    pub summary: VerificationSummary,
}

/// Verify every invoice in `inbox_path` and append one AP notification per
/// verified invoice. The vendor roster and the inbox must both exist.
pub fn run_verify(
    store: &FileStore,
    inbox_path: &Path,
    now: DateTime<Utc>,
) -> anyhow::Result<VerifyStats> {
    let vendors = store
        .load_vendors()
        .context("loading vendor roster (run `legalops onboard` first)")?;
    let inbox = store.load_inbox(inbox_path).context("loading invoice inbox")?;
    let mut log = store.load_notifications().context("loading notification log")?;
    let mut ids = log.id_sequence();

    let mut results = Vec::with_capacity(inbox.invoices.len());
    let mut skipped = Vec::new();
    let mut notifications = Vec::new();

    for invoice in &inbox.invoices {
        let result = match verify_invoice(invoice, &vendors) {
            Ok(result) => result,
            Err(e) => {
                warn!(invoice = %invoice.invoice_id, error = %e, "skipping invoice");
                skipped.push((invoice.invoice_id.clone(), e));
                continue;
            }
        };
        let notification = NotificationRecord::new(ids.next_id(), now, &result);
        log.upsert(notification.clone());
        notifications.push(notification);
        results.push(result);
    }

    store
        .save_notifications(&log)
        .context("saving notification log")?;

    let summary = VerificationSummary::from_notifications(&notifications)
        .context("summarising notifications")?;
    Ok(VerifyStats {
        summary,
        results,
        malformed: inbox.malformed,
        skipped,
        notifications,
    })
}
