//! Legal-operations domain: vendor onboarding, invoice verification and
//! matter assignment over in-memory record stores.

pub mod error;
pub mod invoice;
pub mod matter;
pub mod repo;
pub mod report;
pub mod roster;
pub mod sequence;
pub mod vendor;

pub use error::RecordError;
pub use invoice::{
    Discrepancy, Disposition, HoursWarning, Invoice, LineAudit, LineItem, LineStatus,
    NotificationRecord, PaymentAction, RejectionReason, RoleLevel, VerificationResult,
    resolve_vendor, verify_invoice,
};
pub use matter::{
    Alternate, AssignmentOutcome, AssignmentRecord, AssignmentStatus, LawyerRecord,
    LawyerSnapshot, LawyerStatus, MatterRecord, Priority, acceptable_practice_areas,
    assign_matter, is_mapped_case_type, normalize_case_type,
};
pub use repo::{Keyed, Repository};
pub use report::{AssignmentReport, LawyerAssignments, Tally, VerificationSummary, Workload, workload};
pub use roster::{AssignmentLog, LawyerRoster, NotificationLog, VendorRoster};
pub use sequence::Sequence;
pub use vendor::{
    Onboarding, PaymentTerms, RateCard, RawRecord, ValidationReport, VendorRecord, VendorStatus,
    onboard_vendor, validate_vendor,
};
