//! Load and save the legalops documents.

use std::path::Path;

use legalops_core::{AssignmentLog, Invoice, LawyerRoster, NotificationLog, VendorRoster};
use serde_json::Value;
use tracing::{info, warn};

use crate::StoreError;
use crate::json::{read_json, read_json_or_default, remove_if_exists, write_json};
use crate::layout::DataDir;

/// Invoices read from an inbox file. Entries that fail to parse are kept
/// aside with their position and error.
#[derive(Debug, Default)]
pub struct Inbox {
    pub invoices: Vec<Invoice>,
    pub malformed: Vec<(usize, String)>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResetSummary {
    pub vendor_database_removed: bool,
    pub assignments_removed: bool,
    pub notifications_removed: bool,
    pub caseloads_reset: usize,
}

/// JSON documents under one [`DataDir`].
///
/// Each load reads the whole file; each save rewrites it atomically. There is
/// no locking, so only one process should write at a time.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: DataDir,
}

impl FileStore {
    pub fn new(dir: DataDir) -> Self {
        Self { dir }
    }

    pub fn open(root: impl AsRef<Path>) -> Self {
        Self::new(DataDir::new(root.as_ref()))
    }

    pub fn dir(&self) -> &DataDir {
        &self.dir
    }

    /// The vendor roster, which must already exist.
    pub fn load_vendors(&self) -> Result<VendorRoster, StoreError> {
        let roster: VendorRoster = read_json(&self.dir.vendor_database())?;
        info!(count = roster.vendors.len(), next_id = roster.next_id, "loaded vendor roster");
        Ok(roster)
    }

    pub fn save_vendors(&self, roster: &VendorRoster) -> Result<(), StoreError> {
        write_json(&self.dir.vendor_database(), roster)?;
        info!(count = roster.vendors.len(), next_id = roster.next_id, "saved vendor roster");
        Ok(())
    }

    /// The lawyer roster. Duplicate `lawyer_id`s are a [`StoreError::Record`].
    pub fn load_lawyers(&self) -> Result<LawyerRoster, StoreError> {
        let roster: LawyerRoster = read_json(&self.dir.internal_lawyers())?;
        roster.ensure_unique_ids()?;
        info!(count = roster.lawyers.len(), "loaded lawyer roster");
        Ok(roster)
    }

    pub fn save_lawyers(&self, roster: &LawyerRoster) -> Result<(), StoreError> {
        write_json(&self.dir.internal_lawyers(), roster)?;
        info!(count = roster.lawyers.len(), "saved lawyer roster");
        Ok(())
    }

    pub fn load_assignments(&self) -> Result<AssignmentLog, StoreError> {
        let log: AssignmentLog = read_json_or_default(&self.dir.matter_assignments())?;
        info!(count = log.assignments.len(), "loaded assignment log");
        Ok(log)
    }

    pub fn save_assignments(&self, log: &AssignmentLog) -> Result<(), StoreError> {
        write_json(&self.dir.matter_assignments(), log)?;
        info!(count = log.assignments.len(), "saved assignment log");
        Ok(())
    }

    pub fn load_notifications(&self) -> Result<NotificationLog, StoreError> {
        let log: NotificationLog = read_json_or_default(&self.dir.ap_notifications())?;
        info!(count = log.notifications.len(), "loaded notification log");
        Ok(log)
    }

    pub fn save_notifications(&self, log: &NotificationLog) -> Result<(), StoreError> {
        write_json(&self.dir.ap_notifications(), log)?;
        info!(count = log.notifications.len(), "saved notification log");
        Ok(())
    }

    /// Read `[Invoice]` from `path`. The file must exist and be a JSON array;
    /// individual entries that do not parse land in [`Inbox::malformed`].
    pub fn load_inbox(&self, path: &Path) -> Result<Inbox, StoreError> {
        let entries: Vec<Value> = read_json(path)?;
        let mut inbox = Inbox::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Invoice>(entry) {
                Ok(invoice) => inbox.invoices.push(invoice),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed invoice");
                    inbox.malformed.push((index, e.to_string()));
                }
            }
        }
        info!(
            count = inbox.invoices.len(),
            malformed = inbox.malformed.len(),
            "loaded invoice inbox"
        );
        Ok(inbox)
    }

    /// Remove the vendor roster and both logs, and zero every lawyer's caseload.
    pub fn reset(&self) -> Result<ResetSummary, StoreError> {
        let mut summary = ResetSummary {
            vendor_database_removed: remove_if_exists(&self.dir.vendor_database())?,
            assignments_removed: remove_if_exists(&self.dir.matter_assignments())?,
            notifications_removed: remove_if_exists(&self.dir.ap_notifications())?,
            caseloads_reset: 0,
        };

        match self.load_lawyers() {
            Ok(mut roster) => {
                roster.reset_caseloads();
                self.save_lawyers(&roster)?;
                summary.caseloads_reset = roster.lawyers.len();
            }
            Err(StoreError::NotFound(path)) => {
                warn!(path = %path.display(), "no lawyer roster to reset");
            }
            Err(e) => return Err(e),
        }
        info!(?summary, "store reset");
        Ok(summary)
    }
}
