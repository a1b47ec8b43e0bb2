//! Invoice verification against contracted vendor rates.
//!
//! An invoice is resolved to a vendor by firm name, then every line item's
//! billed rate is compared with the vendor's rate for that role level. Any
//! line billed above contract becomes a discrepancy and the invoice is held.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::RecordError;
use crate::repo::{Keyed, Repository};
use crate::vendor::{RateCard, VendorRecord};

/// Partner hours on a single line above this draw a review warning.
pub const PARTNER_HOURS_REVIEW: i64 = 10;
/// Hours on any single line above this draw a review warning.
pub const LINE_HOURS_REVIEW: i64 = 20;

/// Timekeeper seniority. Unrecognised levels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleLevel {
    Partner,
    Associate,
    Paralegal,
    Other(String),
}

impl From<String> for RoleLevel {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "partner" => Self::Partner,
            "associate" => Self::Associate,
            "paralegal" => Self::Paralegal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<RoleLevel> for String {
    fn from(level: RoleLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partner => f.write_str("partner"),
            Self::Associate => f.write_str("associate"),
            Self::Paralegal => f.write_str("paralegal"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub timekeeper: String,
    pub level: RoleLevel,
    #[serde(default)]
    pub description: String,
    pub hours: Decimal,
    /// Billed hourly rate.
    pub rate: Decimal,
    /// Amount as stated on the invoice. Informational only.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl LineItem {
    /// `rate * hours`, or `None` if the product does not fit a `Decimal`.
    pub fn computed_amount(&self) -> Option<Decimal> {
        self.rate.checked_mul(self.hours)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub firm_name: String,
    #[serde(default)]
    pub matter: Option<String>,
    #[serde(default)]
    pub matter_id: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub total_hours: Decimal,
}

impl Invoice {
    /// Structural checks: rates and hours must be non-negative, and every
    /// line amount and the invoice totals must be representable.
    pub fn check(&self) -> Result<(), RecordError> {
        if self.invoice_id.trim().is_empty() {
            return Err(RecordError::MissingField("invoice_id"));
        }
        let mut amount = Decimal::ZERO;
        let mut hours = Decimal::ZERO;
        for item in &self.line_items {
            if item.rate < Decimal::ZERO {
                return Err(RecordError::Negative {
                    field: "rate",
                    value: item.rate.to_string(),
                });
            }
            if item.hours < Decimal::ZERO {
                return Err(RecordError::Negative {
                    field: "hours",
                    value: item.hours.to_string(),
                });
            }
            let line = item
                .computed_amount()
                .ok_or(RecordError::Overflow { field: "amount" })?;
            amount = amount
                .checked_add(line)
                .ok_or(RecordError::Overflow { field: "total_amount" })?;
            hours = hours
                .checked_add(item.hours)
                .ok_or(RecordError::Overflow { field: "total_hours" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    Approved,
    Flagged,
    Rejected,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Flagged => "FLAGGED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn action(&self) -> PaymentAction {
        match self {
            Self::Approved => PaymentAction::ReleasePayment,
            Self::Flagged => PaymentAction::HoldPayment,
            Self::Rejected => PaymentAction::DoNotPay,
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What Accounts Payable should do with an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAction {
    ReleasePayment,
    HoldPayment,
    DoNotPay,
}

impl fmt::Display for PaymentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReleasePayment => "RELEASE_PAYMENT",
            Self::HoldPayment => "HOLD_PAYMENT",
            Self::DoNotPay => "DO_NOT_PAY",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    VendorNotFound,
    VendorInactive,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VendorNotFound => "vendor not found",
            Self::VendorInactive => "vendor inactive",
        })
    }
}

/// A line billed above its contracted rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub timekeeper: String,
    pub level: RoleLevel,
    pub billed_rate: Decimal,
    pub contracted_rate: Decimal,
    pub hours: Decimal,
    /// `(billed_rate - contracted_rate) * hours`, always positive.
    pub overcharge: Decimal,
}

/// Informational hours warning; never affects the disposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWarning {
    pub timekeeper: String,
    pub issue: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStatus {
    Ok,
    Overcharge,
}

/// Per-line audit trail, one entry for every line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAudit {
    pub timekeeper: String,
    pub level: RoleLevel,
    pub description: String,
    pub hours: Decimal,
    pub billed_rate: Decimal,
    pub contracted_rate: Decimal,
    pub billed_amount: Decimal,
    pub status: LineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overcharge: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub invoice_id: String,
    pub firm_name: String,
    pub vendor_id: Option<String>,
    pub matter: Option<String>,
    pub matter_id: Option<String>,
    pub invoice_amount: Decimal,
    pub disposition: Disposition,
    pub rejection: Option<RejectionReason>,
    pub contracted_rates: Option<RateCard>,
    pub discrepancies: Vec<Discrepancy>,
    pub total_overcharge: Decimal,
    pub warnings: Vec<HoursWarning>,
    pub lines: Vec<LineAudit>,
    pub recommendation: String,
}

/// Find the vendor whose firm name contains `firm_name`, case-insensitively.
///
/// The first match in roster order wins. A blank name matches nothing.
pub fn resolve_vendor<'a>(firm_name: &str, vendors: &'a [VendorRecord]) -> Option<&'a VendorRecord> {
    let needle = firm_name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let mut matches = vendors
        .iter()
        .filter(|v| v.firm_name.to_lowercase().contains(&needle));
    let first = matches.next()?;
    let others: Vec<&str> = matches.map(|v| v.vendor_id.as_str()).collect();
    if !others.is_empty() {
        warn!(
            firm = %firm_name,
            chosen = %first.vendor_id,
            also_matched = ?others,
            "ambiguous vendor name; using first match"
        );
    }
    Some(first)
}

/// Verify one invoice against the vendor roster.
///
/// Fails only on structural problems (see [`Invoice::check`]); vendor and
/// rate outcomes are carried in the result.
pub fn verify_invoice(
    invoice: &Invoice,
    vendors: &impl Repository<VendorRecord>,
) -> Result<VerificationResult, RecordError> {
    invoice.check()?;

    let mut result = VerificationResult {
        invoice_id: invoice.invoice_id.clone(),
        firm_name: invoice.firm_name.clone(),
        vendor_id: None,
        matter: invoice.matter.clone(),
        matter_id: invoice.matter_id.clone(),
        invoice_amount: invoice.total_amount,
        disposition: Disposition::Rejected,
        rejection: None,
        contracted_rates: None,
        discrepancies: Vec::new(),
        total_overcharge: Decimal::ZERO,
        warnings: Vec::new(),
        lines: Vec::new(),
        recommendation: String::new(),
    };

    let Some(vendor) = resolve_vendor(&invoice.firm_name, vendors.list()) else {
        result.rejection = Some(RejectionReason::VendorNotFound);
        result.recommendation = format!("Vendor '{}' not found in database", invoice.firm_name);
        info!(invoice = %invoice.invoice_id, firm = %invoice.firm_name, "invoice rejected: vendor not found");
        return Ok(result);
    };
    result.vendor_id = Some(vendor.vendor_id.clone());

    if !vendor.is_active() {
        result.rejection = Some(RejectionReason::VendorInactive);
        result.recommendation = format!(
            "Vendor '{}' is INACTIVE. Cannot process invoices from inactive vendors.",
            invoice.firm_name
        );
        info!(invoice = %invoice.invoice_id, vendor_id = %vendor.vendor_id, "invoice rejected: vendor inactive");
        return Ok(result);
    }

    let rates = vendor.rate_card();
    result.contracted_rates = Some(rates);

    for item in &invoice.line_items {
        let contracted = rates.rate_for(&item.level);
        let mut audit = LineAudit {
            timekeeper: item.timekeeper.clone(),
            level: item.level.clone(),
            description: item.description.clone(),
            hours: item.hours,
            billed_rate: item.rate,
            contracted_rate: contracted,
            billed_amount: match item.amount {
                Some(stated) => stated,
                None => item
                    .computed_amount()
                    .ok_or(RecordError::Overflow { field: "amount" })?,
            },
            status: LineStatus::Ok,
            overcharge: None,
        };

        if item.rate > contracted {
            let overcharge = (item.rate - contracted)
                .checked_mul(item.hours)
                .ok_or(RecordError::Overflow { field: "overcharge" })?;
            result.total_overcharge = result
                .total_overcharge
                .checked_add(overcharge)
                .ok_or(RecordError::Overflow { field: "total_overcharge" })?;
            audit.status = LineStatus::Overcharge;
            audit.overcharge = Some(overcharge);
            result.discrepancies.push(Discrepancy {
                timekeeper: item.timekeeper.clone(),
                level: item.level.clone(),
                billed_rate: item.rate,
                contracted_rate: contracted,
                hours: item.hours,
                overcharge,
            });
        }
        result.lines.push(audit);

        result.warnings.extend(hours_warnings(item));
    }

    if result.discrepancies.is_empty() {
        result.disposition = Disposition::Approved;
        result.recommendation =
            "Invoice verified. Rates match contract. Clear for payment.".to_string();
    } else {
        result.disposition = Disposition::Flagged;
        result.recommendation = format!(
            "Invoice has rate discrepancies totaling ${:.2}. Request corrected invoice or approve adjusted amount.",
            result.total_overcharge
        );
    }

    info!(
        invoice = %invoice.invoice_id,
        vendor_id = %vendor.vendor_id,
        disposition = %result.disposition,
        discrepancies = result.discrepancies.len(),
        overcharge = %result.total_overcharge,
        "invoice verified"
    );
    Ok(result)
}

fn hours_warnings(item: &LineItem) -> Vec<HoursWarning> {
    let mut warnings = Vec::new();
    if item.level == RoleLevel::Partner && item.hours > Decimal::from(PARTNER_HOURS_REVIEW) {
        warnings.push(HoursWarning {
            timekeeper: item.timekeeper.clone(),
            issue: format!(
                "High partner hours ({}hrs) - consider reviewing",
                item.hours.normalize()
            ),
        });
    }
    if item.hours > Decimal::from(LINE_HOURS_REVIEW) {
        warnings.push(HoursWarning {
            timekeeper: item.timekeeper.clone(),
            issue: format!(
                "Excessive hours ({}hrs) on single invoice - consider reviewing",
                item.hours.normalize()
            ),
        });
    }
    warnings
}

/// An Accounts Payable notification for one verified invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub notification_id: String,
    pub timestamp: DateTime<Utc>,
    pub invoice_id: String,
    pub firm_name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub matter: Option<String>,
    #[serde(default)]
    pub matter_id: Option<String>,
    pub status: Disposition,
    pub action: PaymentAction,
    pub reason: String,
    #[serde(default)]
    pub discrepancies: Vec<Discrepancy>,
    #[serde(default)]
    pub total_overcharge: Decimal,
    #[serde(default)]
    pub line_items: Vec<LineAudit>,
    #[serde(default)]
    pub contracted_rates: Option<RateCard>,
}

impl Keyed for NotificationRecord {
    fn key(&self) -> &str {
        &self.notification_id
    }
}

impl NotificationRecord {
    pub fn new(notification_id: String, timestamp: DateTime<Utc>, result: &VerificationResult) -> Self {
        Self {
            notification_id,
            timestamp,
            invoice_id: result.invoice_id.clone(),
            firm_name: result.firm_name.clone(),
            amount: result.invoice_amount,
            matter: result.matter.clone(),
            matter_id: result.matter_id.clone(),
            status: result.disposition,
            action: result.disposition.action(),
            reason: result.recommendation.clone(),
            discrepancies: result.discrepancies.clone(),
            total_overcharge: result.total_overcharge,
            line_items: result.lines.clone(),
            contracted_rates: result.contracted_rates,
        }
    }
}
