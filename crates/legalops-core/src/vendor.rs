//! Vendor onboarding: field and rate-bound validation of raw vendor rows.
//!
//! Every rule is evaluated independently so the report lists all problems at
//! once. Errors block onboarding; warnings are carried along with the vendor.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::RecordError;
use crate::invoice::RoleLevel;
use crate::repo::{Keyed, Repository};
use crate::sequence::Sequence;

/// A raw input row: column name → cell text.
pub type RawRecord = BTreeMap<String, String>;

pub const REQUIRED_FIELDS: &[&str] = &[
    "firm_name",
    "partner_rate",
    "associate_rate",
    "status",
    "payment_terms",
];

const KNOWN_FIELDS: &[&str] = &[
    "vendor_id",
    "firm_name",
    "partner_rate",
    "associate_rate",
    "paralegal_rate",
    "status",
    "payment_terms",
];

/// Partner rates above this draw a warning.
pub const PARTNER_RATE_CAP: i64 = 800;
/// Partner rates below this are rejected as implausible.
pub const PARTNER_RATE_FLOOR: i64 = 200;
/// Associate rates above this draw a warning.
pub const ASSOCIATE_RATE_CAP: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Inactive,
}

impl VendorStatus {
    /// Exact, case-sensitive match on `active` / `inactive`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[serde(rename = "net_30")]
    Net30,
    #[serde(rename = "net_45")]
    Net45,
    #[serde(rename = "net_60")]
    Net60,
}

impl PaymentTerms {
    pub const ALL: [PaymentTerms; 3] = [Self::Net30, Self::Net45, Self::Net60];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Net30 => "net_30",
            Self::Net45 => "net_45",
            Self::Net60 => "net_60",
        }
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contracted hourly rates by role level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    pub partner: Decimal,
    pub associate: Decimal,
    pub paralegal: Decimal,
}

impl RateCard {
    /// Contracted rate for a level. Unrecognised levels are contracted at 0,
    /// so any positive billed rate at such a level counts as overcharge.
    pub fn rate_for(&self, level: &RoleLevel) -> Decimal {
        match level {
            RoleLevel::Partner => self.partner,
            RoleLevel::Associate => self.associate,
            RoleLevel::Paralegal => self.paralegal,
            RoleLevel::Other(_) => Decimal::ZERO,
        }
    }
}

/// An onboarded vendor. Only ever constructed from a row that passed
/// [`validate_vendor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub vendor_id: String,
    pub firm_name: String,
    pub partner_rate: Decimal,
    pub associate_rate: Decimal,
    #[serde(default)]
    pub paralegal_rate: Option<Decimal>,
    pub status: VendorStatus,
    pub payment_terms: PaymentTerms,
    /// Any additional input columns, carried through verbatim.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Keyed for VendorRecord {
    fn key(&self) -> &str {
        &self.vendor_id
    }
}

impl VendorRecord {
    pub fn is_active(&self) -> bool {
        self.status == VendorStatus::Active
    }

    pub fn rate_card(&self) -> RateCard {
        RateCard {
            partner: self.partner_rate,
            associate: self.associate_rate,
            paralegal: self.paralegal_rate.unwrap_or(Decimal::ZERO),
        }
    }

    /// Build a record from a raw row, assigning `vendor_id`.
    ///
    /// Fails with [`RecordError::Rejected`] if the row has any blocking
    /// validation error.
    pub fn from_raw(raw: &RawRecord, vendor_id: String) -> Result<Self, RecordError> {
        let report = validate_vendor(raw);
        if !report.is_valid {
            return Err(RecordError::Rejected(report.errors));
        }
        Self::from_validated(raw, vendor_id)
    }

    /// Build the record from a row that has already passed validation.
    fn from_validated(raw: &RawRecord, vendor_id: String) -> Result<Self, RecordError> {
        let status = required_text(raw, "status")?;
        let terms = required_text(raw, "payment_terms")?;
        let paralegal_rate = match present(raw, "paralegal_rate") {
            Some(_) => Some(required_rate(raw, "paralegal_rate")?),
            None => None,
        };
        let extra = raw
            .iter()
            .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            vendor_id,
            firm_name: required_text(raw, "firm_name")?.trim().to_string(),
            partner_rate: required_rate(raw, "partner_rate")?,
            associate_rate: required_rate(raw, "associate_rate")?,
            paralegal_rate,
            status: VendorStatus::parse(status).ok_or_else(|| RecordError::InvalidValue {
                field: "status",
                value: status.to_string(),
            })?,
            payment_terms: PaymentTerms::parse(terms).ok_or_else(|| {
                RecordError::InvalidValue {
                    field: "payment_terms",
                    value: terms.to_string(),
                }
            })?,
            extra,
        })
    }
}

/// Outcome of validating one raw vendor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub firm_name: String,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate a raw vendor row against the onboarding rules.
pub fn validate_vendor(raw: &RawRecord) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for &field in REQUIRED_FIELDS {
        if present(raw, field).is_none() {
            errors.push(format!("Missing required field: {field}"));
        }
    }

    match rate_field(raw, "partner_rate") {
        Some(rate) => {
            if rate > Decimal::from(PARTNER_RATE_CAP) {
                warnings.push(format!(
                    "Partner rate ${rate}/hr exceeds preferred cap of ${PARTNER_RATE_CAP}/hr"
                ));
            }
            if rate < Decimal::from(PARTNER_RATE_FLOOR) {
                errors.push(format!(
                    "Partner rate ${rate}/hr seems too low - please verify"
                ));
            }
        }
        None => errors.push("Partner rate must be a number".to_string()),
    }

    match rate_field(raw, "associate_rate") {
        Some(rate) => {
            if rate > Decimal::from(ASSOCIATE_RATE_CAP) {
                warnings.push(format!(
                    "Associate rate ${rate}/hr exceeds preferred cap of ${ASSOCIATE_RATE_CAP}/hr"
                ));
            }
            if rate < Decimal::ZERO {
                errors.push(format!("Associate rate ${rate}/hr must not be negative"));
            }
        }
        None => errors.push("Associate rate must be a number".to_string()),
    }

    if let Some(value) = present(raw, "paralegal_rate") {
        match parse_decimal(value) {
            Some(rate) if rate < Decimal::ZERO => {
                errors.push(format!("Paralegal rate ${rate}/hr must not be negative"));
            }
            Some(_) => {}
            None => errors.push("Paralegal rate must be a number".to_string()),
        }
    }

    if raw
        .get("status")
        .and_then(|s| VendorStatus::parse(s))
        .is_none()
    {
        errors.push("Status must be 'active' or 'inactive'".to_string());
    }

    if raw
        .get("payment_terms")
        .and_then(|s| PaymentTerms::parse(s))
        .is_none()
    {
        let terms: Vec<&str> = PaymentTerms::ALL.iter().map(|t| t.as_str()).collect();
        errors.push(format!("Payment terms must be one of: {}", terms.join(", ")));
    }

    let firm_name = present(raw, "firm_name").unwrap_or("Unknown").trim().to_string();
    debug!(firm = %firm_name, errors = errors.len(), warnings = warnings.len(), "validated vendor");

    ValidationReport {
        firm_name,
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Result of pushing one raw row through validation and onto the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Onboarding {
    Accepted {
        vendor_id: String,
        firm_name: String,
        warnings: Vec<String>,
    },
    Rejected(ValidationReport),
}

/// Validate `raw` and, if it passes, append it to `vendors` under the next id
/// from `ids`. Rejected rows consume no id.
pub fn onboard_vendor(
    raw: &RawRecord,
    vendors: &mut impl Repository<VendorRecord>,
    ids: &mut Sequence,
) -> Result<Onboarding, RecordError> {
    let report = validate_vendor(raw);
    if !report.is_valid {
        info!(firm = %report.firm_name, errors = ?report.errors, "vendor rejected");
        return Ok(Onboarding::Rejected(report));
    }

    let vendor = VendorRecord::from_validated(raw, ids.next_id())?;
    info!(
        vendor_id = %vendor.vendor_id,
        firm = %vendor.firm_name,
        warnings = report.warnings.len(),
        "vendor onboarded"
    );
    let accepted = Onboarding::Accepted {
        vendor_id: vendor.vendor_id.clone(),
        firm_name: vendor.firm_name.clone(),
        warnings: report.warnings,
    };
    vendors.upsert(vendor);
    Ok(accepted)
}

/// A field is present when its cell is non-empty. Whitespace counts as a
/// value, so a whitespace-only rate fails parsing instead.
fn present<'a>(raw: &'a RawRecord, field: &str) -> Option<&'a str> {
    raw.get(field).map(String::as_str).filter(|v| !v.is_empty())
}

fn required_text<'a>(raw: &'a RawRecord, field: &'static str) -> Result<&'a str, RecordError> {
    present(raw, field).ok_or(RecordError::MissingField(field))
}

fn required_rate(raw: &RawRecord, field: &'static str) -> Result<Decimal, RecordError> {
    let value = required_text(raw, field)?;
    parse_decimal(value).ok_or_else(|| RecordError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

/// Read a rate column. An absent column reads as 0; a present but
/// unparsable (including blank) value is `None`.
fn rate_field(raw: &RawRecord, field: &str) -> Option<Decimal> {
    match raw.get(field) {
        None => Some(Decimal::ZERO),
        Some(value) => parse_decimal(value),
    }
}

pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
