//! Run summaries over the notification and assignment logs.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::RecordError;
use crate::invoice::{Disposition, NotificationRecord};
use crate::matter::{AssignmentRecord, LawyerRecord, Priority};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub count: usize,
    pub amount: Decimal,
}

impl Tally {
    fn add(&mut self, amount: Decimal) -> Result<(), RecordError> {
        self.count += 1;
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(RecordError::Overflow { field: "amount" })?;
        Ok(())
    }
}

/// Counts and invoice amounts per disposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    pub processed: usize,
    pub approved: Tally,
    pub flagged: Tally,
    pub rejected: Tally,
    pub total_overcharge: Decimal,
}

impl VerificationSummary {
    pub fn from_notifications(notifications: &[NotificationRecord]) -> Result<Self, RecordError> {
        let mut summary = Self::default();
        for n in notifications {
            summary.processed += 1;
            match n.status {
                Disposition::Approved => summary.approved.add(n.amount)?,
                Disposition::Flagged => summary.flagged.add(n.amount)?,
                Disposition::Rejected => summary.rejected.add(n.amount)?,
            }
            summary.total_overcharge = summary
                .total_overcharge
                .checked_add(n.total_overcharge)
                .ok_or(RecordError::Overflow { field: "total_overcharge" })?;
        }
        Ok(summary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LawyerAssignments {
    pub email: String,
    pub matters: Vec<String>,
}

/// Assignment totals grouped by case type, priority and lawyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentReport {
    pub total_assignments: usize,
    pub by_case_type: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_lawyer: BTreeMap<String, LawyerAssignments>,
}

impl AssignmentReport {
    pub fn from_assignments(assignments: &[AssignmentRecord]) -> Self {
        let mut report = Self {
            total_assignments: assignments.len(),
            ..Self::default()
        };
        for a in assignments {
            *report.by_case_type.entry(a.case_type.clone()).or_default() += 1;
            *report.by_priority.entry(a.priority).or_default() += 1;
            let entry = report
                .by_lawyer
                .entry(a.assigned_to.name.clone())
                .or_insert_with(|| LawyerAssignments {
                    email: a.assigned_to.email.clone(),
                    matters: Vec::new(),
                });
            entry.matters.push(a.matter_id.clone());
        }
        report
    }
}

/// One row of the workload table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub lawyer_id: String,
    pub name: String,
    pub current_caseload: u32,
    pub max_caseload: u32,
}

/// Caseload of every active lawyer, in roster order.
pub fn workload(lawyers: &[LawyerRecord]) -> Vec<Workload> {
    lawyers
        .iter()
        .filter(|l| l.is_active())
        .map(|l| Workload {
            lawyer_id: l.lawyer_id.clone(),
            name: l.name.clone(),
            current_caseload: l.current_caseload,
            max_caseload: l.max_caseload,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::PaymentAction;
    use crate::matter::{AssignmentStatus, LawyerSnapshot, LawyerStatus};
    use chrono::Utc;

    fn note(status: Disposition, amount: i64, overcharge: i64) -> NotificationRecord {
        NotificationRecord {
            notification_id: "AP-0001".into(),
            timestamp: Utc::now(),
            invoice_id: "INV".into(),
            firm_name: "Firm".into(),
            amount: Decimal::from(amount),
            matter: None,
            matter_id: None,
            status,
            action: status.action(),
            reason: String::new(),
            discrepancies: Vec::new(),
            total_overcharge: Decimal::from(overcharge),
            line_items: Vec::new(),
            contracted_rates: None,
        }
    }

    fn assignment(matter_id: &str, case_type: &str, priority: Priority, lawyer: &str) -> AssignmentRecord {
        AssignmentRecord {
            assignment_id: format!("ASN-{matter_id}"),
            matter_id: matter_id.into(),
            matter_name: String::new(),
            case_type: case_type.into(),
            priority,
            client: String::new(),
            assigned_to: LawyerSnapshot {
                lawyer_id: lawyer.to_lowercase(),
                name: lawyer.into(),
                title: String::new(),
                email: format!("{}@company.com", lawyer.to_lowercase()),
            },
            outside_counsel: None,
            assigned_date: Utc::now(),
            status: AssignmentStatus::Active,
            matched_area: case_type.into(),
            selection_reason: String::new(),
            reasoning: Vec::new(),
        }
    }

    #[test]
    fn verification_summary_totals() {
        let notes = vec![
            note(Disposition::Approved, 12_000, 0),
            note(Disposition::Flagged, 9_000, 600),
            note(Disposition::Flagged, 7_000, 500),
            note(Disposition::Rejected, 4_000, 0),
        ];
        let summary = VerificationSummary::from_notifications(&notes).unwrap();
        assert_eq!(summary.processed, 4);
        assert_eq!(summary.approved.amount, Decimal::from(12_000));
        assert_eq!(summary.flagged.count, 2);
        assert_eq!(summary.flagged.amount, Decimal::from(16_000));
        assert_eq!(summary.rejected.count, 1);
        assert_eq!(summary.total_overcharge, Decimal::from(1_100));
        assert_eq!(notes[3].action, PaymentAction::DoNotPay);
    }

    #[test]
    fn summary_reports_amount_overflow() {
        let notes = vec![
            note(Disposition::Approved, 0, 0),
            note(Disposition::Approved, 0, 0),
        ]
        .into_iter()
        .map(|mut n| {
            n.amount = Decimal::MAX;
            n
        })
        .collect::<Vec<_>>();
        assert_eq!(
            VerificationSummary::from_notifications(&notes),
            Err(RecordError::Overflow { field: "amount" })
        );
    }

    #[test]
    fn assignment_report_groups() {
        let log = vec![
            assignment("M1", "litigation", Priority::High, "Torres"),
            assignment("M2", "litigation", Priority::Medium, "Torres"),
            assignment("M3", "m&a", Priority::High, "Walsh"),
        ];
        let report = AssignmentReport::from_assignments(&log);
        assert_eq!(report.total_assignments, 3);
        assert_eq!(report.by_case_type["litigation"], 2);
        assert_eq!(report.by_priority[&Priority::High], 2);
        assert_eq!(report.by_lawyer["Torres"].matters, vec!["M1", "M2"]);
        assert_eq!(report.by_lawyer["Walsh"].email, "walsh@company.com");
    }

    #[test]
    fn workload_skips_inactive() {
        let mut away = LawyerRecord {
            lawyer_id: "LAW-007".into(),
            name: "Lisa Nakamura".into(),
            title: String::new(),
            email: String::new(),
            practice_areas: vec![],
            status: LawyerStatus::OnLeave,
            current_caseload: 0,
            max_caseload: 5,
        };
        let mut here = away.clone();
        here.lawyer_id = "LAW-001".into();
        here.status = LawyerStatus::Active;
        here.current_caseload = 2;
        away.current_caseload = 1;
        let rows = workload(&[away, here]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lawyer_id, "LAW-001");
        assert_eq!(rows[0].current_caseload, 2);
    }
}
