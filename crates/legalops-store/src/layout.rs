//! Fixed file layout under the data directory.

use std::path::PathBuf;

pub const VENDOR_DATABASE: &str = "vendor_database.json";
pub const INTERNAL_LAWYERS: &str = "internal_lawyers.json";
pub const MATTER_ASSIGNMENTS: &str = "matter_assignments.json";
pub const AP_NOTIFICATIONS: &str = "ap_notifications.json";
pub const INBOX_INVOICES: &str = "inbox/invoices.json";
pub const LAW_FIRMS_CSV: &str = "law_firms.csv";
pub const MATTERS_CSV: &str = "matters.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn vendor_database(&self) -> PathBuf {
        self.root.join(VENDOR_DATABASE)
    }

    pub fn internal_lawyers(&self) -> PathBuf {
        self.root.join(INTERNAL_LAWYERS)
    }

    pub fn matter_assignments(&self) -> PathBuf {
        self.root.join(MATTER_ASSIGNMENTS)
    }

    pub fn ap_notifications(&self) -> PathBuf {
        self.root.join(AP_NOTIFICATIONS)
    }

    pub fn inbox_invoices(&self) -> PathBuf {
        self.root.join(INBOX_INVOICES)
    }

    pub fn law_firms_csv(&self) -> PathBuf {
        self.root.join(LAW_FIRMS_CSV)
    }

    pub fn matters_csv(&self) -> PathBuf {
        self.root.join(MATTERS_CSV)
    }
}
