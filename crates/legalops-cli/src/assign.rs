//! Assignment pipeline: matters CSV → lawyer selection → assignment log.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use legalops_core::{
    AssignmentOutcome, MatterRecord, RecordError, Repository, Workload, assign_matter, workload,
};
use legalops_store::{FileStore, ingest};
use tracing::warn;

pub struct AssignStats {
    pub outcomes: Vec<AssignmentOutcome>,
    /// Rows that could not be read as a matter: (1-based row, error).
    pub skipped: Vec<(usize, RecordError)>,
    pub workload: Vec<Workload>,
}

impl AssignStats {
    pub fn assigned(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_assigned()).count()
    }

    pub fn unassigned(&self) -> usize {
        self.outcomes.len() - self.assigned()
    }
}

/// Assign every matter in `matters_path`, in file order. Both the matters
/// file and the lawyer roster must exist before anything is assigned.
pub fn run_assign(
    store: &FileStore,
    matters_path: &Path,
    now: DateTime<Utc>,
) -> anyhow::Result<AssignStats> {
    let rows = ingest::read_csv_rows(matters_path).context("reading matters csv")?;
    let mut lawyers = store.load_lawyers().context("loading lawyer roster")?;
    let mut log = store.load_assignments().context("loading assignment log")?;
    let mut ids = log.id_sequence();

    let mut outcomes = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let matter = match MatterRecord::from_row(row) {
            Ok(matter) => matter,
            Err(e) => {
                warn!(row = index + 1, error = %e, "skipping matter row");
                skipped.push((index + 1, e));
                continue;
            }
        };
        let outcome = assign_matter(&matter, &mut lawyers, &mut ids, now);
        if let AssignmentOutcome::Assigned { assignment, .. } = &outcome {
            log.upsert(assignment.clone());
        }
        outcomes.push(outcome);
    }

    store.save_lawyers(&lawyers).context("saving lawyer roster")?;
    store.save_assignments(&log).context("saving assignment log")?;

    Ok(AssignStats {
        outcomes,
        skipped,
        workload: workload(lawyers.list()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LAWYERS: &str = r#"{
        "lawyers": [
            {"lawyer_id": "LAW-001", "name": "Michael Torres", "title": "Senior Counsel",
             "email": "michael.torres@company.com", "practice_areas": ["litigation", "patent_infringement"],
             "status": "active", "current_caseload": 4, "max_caseload": 5},
            {"lawyer_id": "LAW-004", "name": "Sarah Patel", "title": "Counsel",
             "email": "sarah.patel@company.com", "practice_areas": ["ip_trademark"],
             "status": "active", "current_caseload": 1, "max_caseload": 6},
            {"lawyer_id": "LAW-007", "name": "Lisa Nakamura", "title": "Senior Counsel",
             "email": "lisa.nakamura@company.com", "practice_areas": ["litigation"],
             "status": "on_leave", "current_caseload": 0, "max_caseload": 6}
        ]
    }"#;

    const MATTERS: &str = "\
matter_id,matter_name,case_type,priority,client,outside_counsel
MTR-1,Acme v. Widget,litigation,high,Acme,None
MTR-2,Widget patent,patent_infringement,medium,Widget,
MTR-3,Price fixing inquiry,antitrust,high,Acme,
MTR-4,Second suit,litigation,urgent,Acme,
,Orphan row,litigation,low,Acme,
MTR-5,Third suit,litigation,,Acme,Baker & Sterling LLP
";

    fn seeded() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        fs::write(store.dir().internal_lawyers(), LAWYERS).unwrap();
        fs::write(store.dir().matters_csv(), MATTERS).unwrap();
        (dir, store)
    }

    #[test]
    fn assigns_by_area_and_capacity() {
        let (_dir, store) = seeded();
        let stats = run_assign(&store, &store.dir().matters_csv(), Utc::now()).unwrap();

        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.skipped.len(), 2);
        assert_eq!(stats.assigned(), 2);
        assert_eq!(stats.unassigned(), 2);

        let AssignmentOutcome::Assigned { assignment, .. } = &stats.outcomes[0] else {
            panic!("MTR-1 should be assigned");
        };
        assert_eq!(assignment.assigned_to.lawyer_id, "LAW-001");
        assert_eq!(assignment.assignment_id, "ASN-0001");

        // Patent matter falls through to the ip_trademark lawyer once Torres is full.
        let AssignmentOutcome::Assigned { assignment, .. } = &stats.outcomes[1] else {
            panic!("MTR-2 should be assigned");
        };
        assert_eq!(assignment.assigned_to.lawyer_id, "LAW-004");

        assert!(!stats.outcomes[2].is_assigned());
        // Torres is at capacity and Nakamura is on leave.
        assert!(!stats.outcomes[3].is_assigned());
    }

    #[test]
    fn caseloads_and_log_are_persisted() {
        let (_dir, store) = seeded();
        run_assign(&store, &store.dir().matters_csv(), Utc::now()).unwrap();

        let lawyers = store.load_lawyers().unwrap();
        assert_eq!(lawyers.get("LAW-001").unwrap().current_caseload, 5);
        assert_eq!(lawyers.get("LAW-004").unwrap().current_caseload, 2);
        assert_eq!(lawyers.get("LAW-007").unwrap().current_caseload, 0);

        let log = store.load_assignments().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.assignments[1].matter_id, "MTR-2");
    }

    #[test]
    fn workload_lists_active_lawyers() {
        let (_dir, store) = seeded();
        let stats = run_assign(&store, &store.dir().matters_csv(), Utc::now()).unwrap();
        let ids: Vec<&str> = stats.workload.iter().map(|w| w.lawyer_id.as_str()).collect();
        assert_eq!(ids, vec!["LAW-001", "LAW-004"]);
    }

    #[test]
    fn missing_roster_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        fs::write(store.dir().matters_csv(), MATTERS).unwrap();
        assert!(run_assign(&store, &store.dir().matters_csv(), Utc::now()).is_err());
        assert!(!store.dir().matter_assignments().exists());
    }
}
