//! Matter assignment: practice-area matching with a capacity constraint and a
//! priority-dependent tie-break.
//!
//! High-priority work goes to whoever has the most free capacity; everything
//! else goes to whoever currently carries the fewest cases. Each successful
//! assignment bumps the chosen lawyer's caseload by one, so later matters in
//! the same run see the updated load.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::RecordError;
use crate::repo::{Keyed, Repository};
use crate::sequence::Sequence;
use crate::vendor::RawRecord;

/// Case types whose acceptable practice areas differ from the literal name.
/// Every other mapped case type accepts exactly itself.
const SUBSTITUTES: &[(&str, &[&str])] = &[
    ("patent_infringement", &["patent_infringement", "ip_trademark"]),
    ("ip_trademark", &["ip_trademark", "patent_infringement"]),
];

/// Case types the firm routes by practice area. Anything else is searched
/// for literally and marked unmapped in the reasoning trail.
const MAPPED_CASE_TYPES: &[&str] = &[
    "litigation",
    "m&a",
    "employment",
    "regulatory",
    "contract_review",
    "real_estate",
    "patent_infringement",
    "ip_trademark",
];

/// Number of runner-up candidates kept on an assignment.
const ALTERNATES: usize = 2;

/// Practice areas that satisfy a case type, most specific first.
///
/// The case type is trimmed and lowercased. Unmapped case types fall back to
/// searching for the literal case type.
pub fn acceptable_practice_areas(case_type: &str) -> Vec<String> {
    let case_type = normalize_case_type(case_type);
    if let Some((_, areas)) = SUBSTITUTES.iter().find(|(ct, _)| *ct == case_type) {
        return areas.iter().map(|a| a.to_string()).collect();
    }
    vec![case_type]
}

pub fn normalize_case_type(case_type: &str) -> String {
    case_type.trim().to_lowercase()
}

/// Whether `case_type` has an entry in the routing table.
pub fn is_mapped_case_type(case_type: &str) -> bool {
    MAPPED_CASE_TYPES.contains(&normalize_case_type(case_type).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawyerStatus {
    Active,
    OnLeave,
    Inactive,
}

impl fmt::Display for LawyerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::OnLeave => "on_leave",
            Self::Inactive => "inactive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerRecord {
    pub lawyer_id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    pub practice_areas: Vec<String>,
    pub status: LawyerStatus,
    pub current_caseload: u32,
    pub max_caseload: u32,
}

impl Keyed for LawyerRecord {
    fn key(&self) -> &str {
        &self.lawyer_id
    }
}

impl LawyerRecord {
    /// `max_caseload - current_caseload`, never below zero.
    pub fn available_capacity(&self) -> u32 {
        self.max_caseload.saturating_sub(self.current_caseload)
    }

    pub fn is_active(&self) -> bool {
        self.status == LawyerStatus::Active
    }

    /// First of `areas` this lawyer practises, compared case-insensitively.
    pub fn matching_area<'a>(&self, areas: &'a [String]) -> Option<&'a str> {
        areas
            .iter()
            .find(|area| {
                self.practice_areas
                    .iter()
                    .any(|pa| pa.trim().eq_ignore_ascii_case(area))
            })
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = RecordError;

    /// Case-insensitive; a blank priority means `medium`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "" | "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(RecordError::InvalidValue {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatterRecord {
    pub matter_id: String,
    pub matter_name: String,
    pub case_type: String,
    pub priority: Priority,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub outside_counsel: Option<String>,
}

impl MatterRecord {
    /// Build a matter from a raw input row.
    ///
    /// `matter_id` and `case_type` are required. Blank `outside_counsel`
    /// (or the literal `None`) means no outside counsel yet.
    pub fn from_row(row: &RawRecord) -> Result<Self, RecordError> {
        let field = |name: &str| -> String {
            row.get(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let matter_id = field("matter_id");
        if matter_id.is_empty() {
            return Err(RecordError::MissingField("matter_id"));
        }
        let case_type = normalize_case_type(&field("case_type"));
        if case_type.is_empty() {
            return Err(RecordError::MissingField("case_type"));
        }
        let outside_counsel = Some(field("outside_counsel"))
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("none"));

        Ok(Self {
            matter_id,
            matter_name: field("matter_name"),
            case_type,
            priority: field("priority").parse()?,
            client: field("client"),
            outside_counsel,
        })
    }
}

/// Identifying fields of the assigned lawyer, copied at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerSnapshot {
    pub lawyer_id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
}

impl From<&LawyerRecord> for LawyerSnapshot {
    fn from(lawyer: &LawyerRecord) -> Self {
        Self {
            lawyer_id: lawyer.lawyer_id.clone(),
            name: lawyer.name.clone(),
            title: lawyer.title.clone(),
            email: lawyer.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub assignment_id: String,
    pub matter_id: String,
    pub matter_name: String,
    pub case_type: String,
    pub priority: Priority,
    #[serde(default)]
    pub client: String,
    pub assigned_to: LawyerSnapshot,
    #[serde(default)]
    pub outside_counsel: Option<String>,
    pub assigned_date: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub matched_area: String,
    pub selection_reason: String,
    #[serde(default)]
    pub reasoning: Vec<String>,
}

impl Keyed for AssignmentRecord {
    fn key(&self) -> &str {
        &self.assignment_id
    }
}

/// A runner-up lawyer considered for a matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub lawyer_id: String,
    pub name: String,
    pub available_capacity: u32,
    pub current_caseload: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    Assigned {
        assignment: AssignmentRecord,
        alternates: Vec<Alternate>,
    },
    /// No eligible lawyer; route to General Counsel for manual triage.
    Unassigned {
        matter_id: String,
        matter_name: String,
        case_type: String,
        reason: String,
        reasoning: Vec<String>,
    },
}

impl AssignmentOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned { .. })
    }
}

struct Candidate {
    /// Position of the lawyer in the roster.
    index: usize,
    lawyer: LawyerRecord,
    matched_area: String,
}

/// Eligible lawyers for `areas` in roster order, plus one reasoning line per
/// lawyer considered.
fn find_candidates(areas: &[String], lawyers: &[LawyerRecord]) -> (Vec<Candidate>, Vec<String>) {
    let mut candidates = Vec::new();
    let mut reasoning = Vec::new();

    for (index, lawyer) in lawyers.iter().enumerate() {
        if !lawyer.is_active() {
            reasoning.push(format!("{}: skipped (status: {})", lawyer.name, lawyer.status));
            continue;
        }
        let available = lawyer.available_capacity();
        if available == 0 {
            reasoning.push(format!(
                "{}: skipped (no capacity: {}/{})",
                lawyer.name, lawyer.current_caseload, lawyer.max_caseload
            ));
            continue;
        }
        match lawyer.matching_area(areas) {
            Some(area) => {
                reasoning.push(format!(
                    "{}: match on {} ({} slots available)",
                    lawyer.name, area, available
                ));
                candidates.push(Candidate {
                    index,
                    lawyer: lawyer.clone(),
                    matched_area: area.to_string(),
                });
            }
            None => reasoning.push(format!(
                "{}: no practice area match (has: {})",
                lawyer.name,
                lawyer.practice_areas.join(", ")
            )),
        }
    }

    (candidates, reasoning)
}

/// Order candidates so the preferred lawyer comes first. The sort is stable:
/// exact ties keep roster order.
fn rank_candidates(candidates: &mut [Candidate], priority: Priority) {
    match priority {
        Priority::High => {
            candidates.sort_by_key(|c| std::cmp::Reverse(c.lawyer.available_capacity()))
        }
        Priority::Medium | Priority::Low => {
            candidates.sort_by_key(|c| c.lawyer.current_caseload)
        }
    }
}

/// Assign `matter` to the best eligible lawyer on `lawyers`.
///
/// On success the chosen lawyer's caseload is incremented by exactly one and
/// written back through the repository. The returned record is not yet
/// persisted; callers append it to their assignment log.
pub fn assign_matter(
    matter: &MatterRecord,
    lawyers: &mut impl Repository<LawyerRecord>,
    ids: &mut Sequence,
    now: DateTime<Utc>,
) -> AssignmentOutcome {
    let case_type = normalize_case_type(&matter.case_type);
    let areas = acceptable_practice_areas(&case_type);

    let (mut candidates, mut reasoning) = find_candidates(&areas, lawyers.list());
    let routing = if is_mapped_case_type(&case_type) {
        format!("case type '{}' -> looking for: {}", case_type, areas.join(", "))
    } else {
        debug!(case_type = %case_type, "unmapped case type; searching literally");
        format!("case type '{}' is unmapped -> looking for: {}", case_type, case_type)
    };
    reasoning.insert(0, routing);

    rank_candidates(&mut candidates, matter.priority);
    let mut ranked = candidates.into_iter();
    let Some(Candidate {
        index,
        lawyer: chosen,
        matched_area,
    }) = ranked.next()
    else {
        info!(matter = %matter.matter_id, case_type = %case_type, "no eligible lawyer; flagged for manual review");
        return AssignmentOutcome::Unassigned {
            matter_id: matter.matter_id.clone(),
            matter_name: matter.matter_name.clone(),
            reason: format!(
                "No available lawyer with '{case_type}' expertise. Recommend manual assignment or General Counsel review."
            ),
            case_type,
            reasoning,
        };
    };
    let alternates = ranked
        .take(ALTERNATES)
        .map(|c| Alternate {
            lawyer_id: c.lawyer.lawyer_id.clone(),
            name: c.lawyer.name.clone(),
            available_capacity: c.lawyer.available_capacity(),
            current_caseload: c.lawyer.current_caseload,
        })
        .collect();

    let selection_reason = match matter.priority {
        Priority::High => format!(
            "High priority: most available capacity ({} slots)",
            chosen.available_capacity()
        ),
        Priority::Medium | Priority::Low => format!(
            "Standard priority: balances workload (current load: {} cases)",
            chosen.current_caseload
        ),
    };
    reasoning.push(format!("selected {} ({})", chosen.name, selection_reason));

    let assignment = AssignmentRecord {
        assignment_id: ids.next_id(),
        matter_id: matter.matter_id.clone(),
        matter_name: matter.matter_name.clone(),
        case_type,
        priority: matter.priority,
        client: matter.client.clone(),
        assigned_to: LawyerSnapshot::from(&chosen),
        outside_counsel: matter.outside_counsel.clone(),
        assigned_date: now,
        status: AssignmentStatus::Active,
        matched_area,
        selection_reason,
        reasoning,
    };

    // Write back by position; ids are not guaranteed unique on a raw roster.
    if let Some(record) = lawyers.records_mut().get_mut(index) {
        record.current_caseload += 1;
        debug!(
            lawyer = %record.lawyer_id,
            caseload = record.current_caseload,
            max = record.max_caseload,
            "caseload incremented"
        );
    }
    info!(
        matter = %matter.matter_id,
        assignment = %assignment.assignment_id,
        lawyer = %chosen.name,
        priority = %matter.priority,
        "matter assigned"
    );

    AssignmentOutcome::Assigned {
        assignment,
        alternates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::LawyerRoster;

    fn lawyer(id: &str, name: &str, areas: &[&str], current: u32, max: u32) -> LawyerRecord {
        LawyerRecord {
            lawyer_id: id.into(),
            name: name.into(),
            title: "Senior Counsel".into(),
            email: format!("{}@example.com", id.to_lowercase()),
            practice_areas: areas.iter().map(|a| a.to_string()).collect(),
            status: LawyerStatus::Active,
            current_caseload: current,
            max_caseload: max,
        }
    }

    fn matter(id: &str, case_type: &str, priority: Priority) -> MatterRecord {
        MatterRecord {
            matter_id: id.into(),
            matter_name: format!("Matter {id}"),
            case_type: case_type.into(),
            priority,
            client: "Acme Corp".into(),
            outside_counsel: None,
        }
    }

    fn roster(lawyers: Vec<LawyerRecord>) -> LawyerRoster {
        LawyerRoster { lawyers }
    }

    fn assigned_id(outcome: &AssignmentOutcome) -> &str {
        match outcome {
            AssignmentOutcome::Assigned { assignment, .. } => &assignment.assigned_to.lawyer_id,
            AssignmentOutcome::Unassigned { reason, .. } => panic!("unassigned: {reason}"),
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-01-15T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn substitution_table() {
        assert_eq!(
            acceptable_practice_areas(" Patent_Infringement "),
            vec!["patent_infringement", "ip_trademark"]
        );
        assert_eq!(
            acceptable_practice_areas("ip_trademark"),
            vec!["ip_trademark", "patent_infringement"]
        );
        assert_eq!(acceptable_practice_areas("litigation"), vec!["litigation"]);
        assert_eq!(acceptable_practice_areas("antitrust"), vec!["antitrust"]);
        for ct in MAPPED_CASE_TYPES {
            assert!(is_mapped_case_type(ct));
            assert!(acceptable_practice_areas(ct).contains(&ct.to_string()));
        }
        assert!(is_mapped_case_type(" M&A "));
        assert!(!is_mapped_case_type("antitrust"));
    }

    #[test]
    fn high_priority_prefers_most_capacity() {
        // Capacities 3, 1, 5.
        let mut lawyers = roster(vec![
            lawyer("LAW-001", "A", &["litigation"], 2, 5),
            lawyer("LAW-002", "B", &["litigation"], 4, 5),
            lawyer("LAW-003", "C", &["litigation"], 3, 8),
        ]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "litigation", Priority::High), &mut lawyers, &mut ids, now());
        assert_eq!(assigned_id(&out), "LAW-003");
    }

    #[test]
    fn medium_priority_prefers_fewest_cases() {
        // Caseloads 3, 1, 5.
        let mut lawyers = roster(vec![
            lawyer("LAW-001", "A", &["litigation"], 3, 10),
            lawyer("LAW-002", "B", &["litigation"], 1, 2),
            lawyer("LAW-003", "C", &["litigation"], 5, 10),
        ]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "litigation", Priority::Medium), &mut lawyers, &mut ids, now());
        assert_eq!(assigned_id(&out), "LAW-002");
        match out {
            AssignmentOutcome::Assigned { alternates, .. } => {
                let ids: Vec<&str> = alternates.iter().map(|a| a.lawyer_id.as_str()).collect();
                assert_eq!(ids, vec!["LAW-001", "LAW-003"]);
            }
            AssignmentOutcome::Unassigned { .. } => unreachable!(),
        }
    }

    #[test]
    fn exact_ties_keep_roster_order() {
        let mut lawyers = roster(vec![
            lawyer("LAW-001", "A", &["employment"], 1, 5),
            lawyer("LAW-002", "B", &["employment"], 1, 5),
        ]);
        let mut ids = Sequence::assignments(0);
        let high = assign_matter(&matter("M1", "employment", Priority::High), &mut lawyers, &mut ids, now());
        assert_eq!(assigned_id(&high), "LAW-001");
        let low = assign_matter(&matter("M2", "employment", Priority::Low), &mut lawyers, &mut ids, now());
        assert_eq!(assigned_id(&low), "LAW-002");
    }

    #[test]
    fn patent_case_accepts_trademark_lawyer() {
        let mut lawyers = roster(vec![
            lawyer("LAW-001", "Litigator", &["litigation"], 0, 5),
            lawyer("LAW-004", "Sarah Patel", &["IP_Trademark"], 0, 5),
        ]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(
            &matter("M1", "patent_infringement", Priority::Medium),
            &mut lawyers,
            &mut ids,
            now(),
        );
        assert_eq!(assigned_id(&out), "LAW-004");
        if let AssignmentOutcome::Assigned { assignment, .. } = out {
            assert_eq!(assignment.matched_area, "ip_trademark");
        }
    }

    #[test]
    fn unmapped_case_type_without_specialist_is_unassigned() {
        let mut lawyers = roster(vec![lawyer("LAW-001", "A", &["litigation"], 0, 5)]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "Antitrust", Priority::High), &mut lawyers, &mut ids, now());
        match out {
            AssignmentOutcome::Unassigned {
                case_type,
                reason,
                reasoning,
                ..
            } => {
                assert_eq!(case_type, "antitrust");
                assert!(reason.contains("General Counsel"));
                assert!(reasoning[0].contains("unmapped"));
            }
            other => panic!("expected unassigned, got {other:?}"),
        }
        assert_eq!(lawyers.lawyers[0].current_caseload, 0);
        assert_eq!(ids.peek(), 1, "unassigned matters consume no id");
    }

    #[test]
    fn unmapped_case_type_matches_literal_area() {
        let mut lawyers = roster(vec![lawyer("LAW-009", "Trust Buster", &["antitrust"], 0, 5)]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "antitrust", Priority::Low), &mut lawyers, &mut ids, now());
        assert_eq!(assigned_id(&out), "LAW-009");
    }

    #[test]
    fn inactive_and_full_lawyers_are_never_chosen() {
        let mut on_leave = lawyer("LAW-007", "Lisa Nakamura", &["regulatory"], 0, 10);
        on_leave.status = LawyerStatus::OnLeave;
        let mut lawyers = roster(vec![
            on_leave,
            lawyer("LAW-005", "Full", &["regulatory"], 4, 4),
        ]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "regulatory", Priority::High), &mut lawyers, &mut ids, now());
        match out {
            AssignmentOutcome::Unassigned { reasoning, .. } => {
                assert!(reasoning.iter().any(|r| r.contains("status: on_leave")));
                assert!(reasoning.iter().any(|r| r.contains("no capacity: 4/4")));
            }
            other => panic!("expected unassigned, got {other:?}"),
        }
    }

    #[test]
    fn caseload_grows_by_one_per_assignment_until_full() {
        let mut lawyers = roster(vec![lawyer("LAW-002", "Jennifer Walsh", &["m&a"], 0, 3)]);
        let mut ids = Sequence::assignments(0);
        let outcomes: Vec<AssignmentOutcome> = (0..5)
            .map(|i| {
                assign_matter(
                    &matter(&format!("M{i}"), "m&a", Priority::Medium),
                    &mut lawyers,
                    &mut ids,
                    now(),
                )
            })
            .collect();
        let assigned = outcomes.iter().filter(|o| o.is_assigned()).count();
        assert_eq!(assigned, 3);
        assert_eq!(lawyers.lawyers[0].current_caseload, 3);
        assert!(!outcomes[3].is_assigned());
        assert!(!outcomes[4].is_assigned());
    }

    #[test]
    fn shared_id_does_not_overwrite_other_lawyer() {
        let mut lawyers = roster(vec![
            lawyer("LAW-001", "Alice", &["litigation"], 0, 5),
            lawyer("LAW-001", "Bob", &["employment"], 0, 5),
        ]);
        let mut ids = Sequence::assignments(0);
        let out = assign_matter(&matter("M1", "employment", Priority::Medium), &mut lawyers, &mut ids, now());
        assert!(out.is_assigned());

        let after: Vec<(&str, u32)> = lawyers
            .lawyers
            .iter()
            .map(|l| (l.name.as_str(), l.current_caseload))
            .collect();
        assert_eq!(after, vec![("Alice", 0), ("Bob", 1)]);
    }

    #[test]
    fn assignment_snapshots_lawyer() {
        let mut lawyers = roster(vec![lawyer("LAW-003", "David Kim", &["employment"], 1, 6)]);
        let mut ids = Sequence::assignments(4);
        let mut m = matter("MTR-2025-004", "employment", Priority::High);
        m.outside_counsel = Some("Goldman Hart".into());
        let out = assign_matter(&m, &mut lawyers, &mut ids, now());
        let AssignmentOutcome::Assigned { assignment, .. } = out else {
            panic!("expected assignment");
        };
        assert_eq!(assignment.assignment_id, "ASN-0005");
        assert_eq!(assignment.assigned_to.name, "David Kim");
        assert_eq!(assignment.assigned_to.email, "law-003@example.com");
        assert_eq!(assignment.assigned_date, now());
        assert_eq!(assignment.outside_counsel.as_deref(), Some("Goldman Hart"));
        assert!(assignment.selection_reason.contains("5 slots"));

        // The snapshot does not follow later roster changes.
        lawyers.lawyers[0].name = "David K. Kim".into();
        assert_eq!(assignment.assigned_to.name, "David Kim");
    }

    #[test]
    fn matter_from_row() {
        let row: RawRecord = [
            ("matter_id", "MTR-2025-008"),
            ("matter_name", "Trademark Opposition"),
            ("case_type", "IP_Trademark "),
            ("priority", ""),
            ("client", "Acme"),
            ("outside_counsel", "None"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let m = MatterRecord::from_row(&row).unwrap();
        assert_eq!(m.case_type, "ip_trademark");
        assert_eq!(m.priority, Priority::Medium);
        assert_eq!(m.outside_counsel, None);
    }

    #[test]
    fn matter_from_row_rejects_bad_priority() {
        let row: RawRecord = [("matter_id", "M1"), ("case_type", "litigation"), ("priority", "urgent")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            MatterRecord::from_row(&row),
            Err(RecordError::InvalidValue {
                field: "priority",
                value: "urgent".into()
            })
        );
    }

    #[test]
    fn available_capacity_saturates() {
        let over = lawyer("LAW-001", "Over", &["litigation"], 7, 5);
        assert_eq!(over.available_capacity(), 0);
    }
}
