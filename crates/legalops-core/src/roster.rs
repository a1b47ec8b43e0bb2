//! Record-store documents.
//!
//! Each document is the unit read and written by the store: the vendor roster
//! (with its id counter), the lawyer roster, and the two append-only logs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::RecordError;

use crate::invoice::NotificationRecord;
use crate::matter::{AssignmentRecord, LawyerRecord};
use crate::repo::Repository;
use crate::sequence::{FIRST_VENDOR_NUMBER, Sequence};
use crate::vendor::VendorRecord;

/// `{ vendors: [...], next_id: n }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRoster {
    #[serde(default)]
    pub vendors: Vec<VendorRecord>,
    pub next_id: u64,
}

impl Default for VendorRoster {
    fn default() -> Self {
        Self {
            vendors: Vec::new(),
            next_id: FIRST_VENDOR_NUMBER,
        }
    }
}

impl VendorRoster {
    /// Id generator continuing from this roster's counter.
    pub fn id_sequence(&self) -> Sequence {
        Sequence::vendors(self.next_id)
    }

    /// Record how far `ids` has advanced so the counter persists.
    pub fn advance_to(&mut self, ids: &Sequence) {
        self.next_id = self.next_id.max(ids.peek());
    }
}

impl Repository<VendorRecord> for VendorRoster {
    fn list(&self) -> &[VendorRecord] {
        &self.vendors
    }

    fn records_mut(&mut self) -> &mut Vec<VendorRecord> {
        &mut self.vendors
    }
}

/// `{ lawyers: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerRoster {
    pub lawyers: Vec<LawyerRecord>,
}

impl LawyerRoster {
    /// Every `lawyer_id` must appear once.
    pub fn ensure_unique_ids(&self) -> Result<(), RecordError> {
        let mut seen = HashSet::new();
        for lawyer in &self.lawyers {
            if !seen.insert(lawyer.lawyer_id.as_str()) {
                return Err(RecordError::Duplicate {
                    field: "lawyer_id",
                    value: lawyer.lawyer_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Zero every caseload. Out-of-band demo reset; never part of assignment.
    pub fn reset_caseloads(&mut self) {
        for lawyer in &mut self.lawyers {
            lawyer.current_caseload = 0;
        }
    }
}

impl Repository<LawyerRecord> for LawyerRoster {
    fn list(&self) -> &[LawyerRecord] {
        &self.lawyers
    }

    fn records_mut(&mut self) -> &mut Vec<LawyerRecord> {
        &mut self.lawyers
    }
}

/// `{ assignments: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentLog {
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}

impl AssignmentLog {
    pub fn id_sequence(&self) -> Sequence {
        Sequence::assignments(self.assignments.len())
    }
}

impl Repository<AssignmentRecord> for AssignmentLog {
    fn list(&self) -> &[AssignmentRecord] {
        &self.assignments
    }

    fn records_mut(&mut self) -> &mut Vec<AssignmentRecord> {
        &mut self.assignments
    }
}

/// `{ notifications: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationLog {
    #[serde(default)]
    pub notifications: Vec<NotificationRecord>,
}

impl NotificationLog {
    pub fn id_sequence(&self) -> Sequence {
        Sequence::notifications(self.notifications.len())
    }
}

impl Repository<NotificationRecord> for NotificationLog {
    fn list(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    fn records_mut(&mut self) -> &mut Vec<NotificationRecord> {
        &mut self.notifications
    }
}
