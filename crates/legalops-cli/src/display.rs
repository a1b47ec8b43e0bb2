//! Plain-text rendering of pipeline results on stdout.

use legalops_core::{AssignmentOutcome, Disposition, Tally, VerificationResult, Workload};
use legalops_store::ResetSummary;

use crate::assign::AssignStats;
use crate::onboard::OnboardStats;
use crate::report::ReportData;
use crate::verify::VerifyStats;

const RULE_WIDTH: usize = 60;

fn rule() {
    println!("{}", "─".repeat(RULE_WIDTH));
}

fn heading(title: &str) {
    println!();
    println!("{title}");
    rule();
}

pub fn print_onboard(stats: &OnboardStats) {
    heading("Vendor onboarding");
    println!("  Rows read: {}", stats.rows);

    for a in &stats.accepted {
        println!("  ✓ {} → {}", a.firm_name, a.vendor_id);
        for w in &a.warnings {
            println!("      warning: {w}");
        }
    }
    for r in &stats.rejected {
        println!("  ✗ {}", r.firm_name);
        for e in &r.errors {
            println!("      error: {e}");
        }
    }
    for (row, e) in &stats.skipped {
        println!("  ! row {row}: {e}");
    }

    rule();
    println!(
        "  Onboarded {} · rejected {} · skipped {} · roster now {}",
        stats.accepted.len(),
        stats.rejected.len(),
        stats.skipped.len(),
        stats.roster_size
    );
}

fn print_result(result: &VerificationResult) {
    let marker = match result.disposition {
        Disposition::Approved => "✓",
        Disposition::Flagged => "⚠",
        Disposition::Rejected => "✗",
    };
    println!(
        "  {marker} {} · {} · ${:.2} · {}",
        result.invoice_id, result.firm_name, result.invoice_amount, result.disposition
    );
    for d in &result.discrepancies {
        println!(
            "      {} ({}): billed ${:.2}/hr vs ${:.2}/hr × {} hrs = ${:.2} over",
            d.timekeeper,
            d.level,
            d.billed_rate,
            d.contracted_rate,
            d.hours.normalize(),
            d.overcharge
        );
    }
    for w in &result.warnings {
        println!("      review: {} - {}", w.timekeeper, w.issue);
    }
    println!("      {}", result.recommendation);
}

fn print_tally(label: &str, tally: &Tally) {
    println!("  {label:<10} {:>3}   ${:>12.2}", tally.count, tally.amount);
}

pub fn print_verify(stats: &VerifyStats) {
    heading("Invoice verification");
    for result in &stats.results {
        print_result(result);
    }
    for (index, e) in &stats.malformed {
        println!("  ! inbox entry {index}: {e}");
    }
    for (id, e) in &stats.skipped {
        println!("  ! {id}: {e}");
    }

    rule();
    print_tally("Approved", &stats.summary.approved);
    print_tally("Flagged", &stats.summary.flagged);
    print_tally("Rejected", &stats.summary.rejected);
    println!("  Total overcharge identified: ${:.2}", stats.summary.total_overcharge);
    if let (Some(first), Some(last)) = (stats.notifications.first(), stats.notifications.last()) {
        println!(
            "  AP notifications {}..{} logged",
            first.notification_id, last.notification_id
        );
    }
}

fn print_workload(rows: &[Workload]) {
    for w in rows {
        println!(
            "  {:<20} {:>2}/{:<2} cases",
            w.name, w.current_caseload, w.max_caseload
        );
    }
}

pub fn print_assign(stats: &AssignStats) {
    heading("Matter assignment");
    for outcome in &stats.outcomes {
        match outcome {
            AssignmentOutcome::Assigned {
                assignment,
                alternates,
            } => {
                println!(
                    "  ✓ {} [{} · {}] → {} ({})",
                    assignment.matter_id,
                    assignment.case_type,
                    assignment.priority,
                    assignment.assigned_to.name,
                    assignment.assignment_id
                );
                println!("      {}", assignment.selection_reason);
                if !alternates.is_empty() {
                    let names: Vec<&str> = alternates.iter().map(|a| a.name.as_str()).collect();
                    println!("      alternates: {}", names.join(", "));
                }
            }
            AssignmentOutcome::Unassigned {
                matter_id,
                case_type,
                reason,
                ..
            } => {
                println!("  ✗ {matter_id} [{case_type}] unassigned: {reason}");
            }
        }
    }
    for (row, e) in &stats.skipped {
        println!("  ! row {row}: {e}");
    }

    rule();
    println!(
        "  Assigned {} · unassigned {} · skipped {}",
        stats.assigned(),
        stats.unassigned(),
        stats.skipped.len()
    );
    heading("Workload");
    print_workload(&stats.workload);
}

pub fn print_report(data: &ReportData) {
    let a = &data.assignments;
    heading("Assignments");
    println!("  Total: {}", a.total_assignments);
    if !a.by_case_type.is_empty() {
        println!("  By case type:");
        for (case_type, n) in &a.by_case_type {
            println!("    {case_type:<22} {n}");
        }
        println!("  By priority:");
        for (priority, n) in &a.by_priority {
            println!("    {:<22} {n}", priority.as_str());
        }
        println!("  By lawyer:");
        for (name, entry) in &a.by_lawyer {
            println!("    {name} <{}>: {}", entry.email, entry.matters.join(", "));
        }
    }

    if let Some(summary) = &data.verification {
        heading("AP notifications");
        println!("  Processed: {}", summary.processed);
        print_tally("Approved", &summary.approved);
        print_tally("Flagged", &summary.flagged);
        print_tally("Rejected", &summary.rejected);
        println!("  Total overcharge identified: ${:.2}", summary.total_overcharge);
    }

    if let Some(rows) = &data.workload {
        heading("Workload");
        print_workload(rows);
    }
}

pub fn print_reset(summary: &ResetSummary) {
    heading("Reset");
    let removed = |flag: bool| if flag { "removed" } else { "absent" };
    println!("  vendor database:     {}", removed(summary.vendor_database_removed));
    println!("  assignment log:      {}", removed(summary.assignments_removed));
    println!("  notification log:    {}", removed(summary.notifications_removed));
    println!("  caseloads zeroed:    {}", summary.caseloads_reset);
}
