// ABOUTME: Render context construction for instrument templates
// ABOUTME: Resolves matter fields to display strings with bracketed placeholders

use chrono::NaiveDate;
use serde::Serialize;

use super::deadline;
use super::error::Result;
use super::kind::InstrumentKind;
use crate::matter::{Field, MatterRecord};

/// Placeholder line shown when no proof points have been supplied yet
pub const EMPTY_PROOFS_LINE: &str = "1.  [AI-Generated points will appear here. Describe your situation and click \"Generate Proofs with AI\".]";

/// Placeholder interpolated when no notice date was given to compute from
pub const MISSING_DEADLINE: &str = "[Date of Deadline]";

/// Recipient placeholder used by the trustee proof-of-funds letterhead
const MISSING_DEALERSHIP: &str = "[Dealership Name]";

/// Caller-supplied rendering inputs.
///
/// The date stamp is explicit so rendering stays deterministic; the `now`
/// default belongs at the CLI call site, not inside the engine.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Date stamped into the letterhead
    pub issued_on: NaiveDate,
    /// Date the prior notice was served, from which deadlines are computed
    pub notice_date: Option<NaiveDate>,
    /// Override for the kind's default response window
    pub window_days: Option<i64>,
}

impl RenderOptions {
    pub fn on(issued_on: NaiveDate) -> Self {
        Self {
            issued_on,
            notice_date: None,
            window_days: None,
        }
    }

    pub fn with_notice_date(mut self, notice_date: NaiveDate) -> Self {
        self.notice_date = Some(notice_date);
        self
    }

    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = Some(days);
        self
    }
}

/// Fully resolved template context.
///
/// Every field is a display-ready string: absent matter fields are already
/// replaced with their bracketed placeholders, the proof-point list is
/// pre-numbered, and dates are formatted. Templates contain only plain
/// interpolations over this struct.
#[derive(Debug, Clone, Serialize)]
pub struct InstrumentContext {
    pub issued_on: String,
    pub man_name: String,
    pub fiction_name: String,
    pub creditor: String,
    pub claim_ref: String,
    pub proof_points: String,
    pub window_days: String,
    pub deadline: String,
    pub trust_name: String,
    pub trustee_name: String,
    pub dealership: String,
    pub vehicle_vin: String,
    pub purchase_price: String,
    pub amendment_text: String,
    pub asset_description: String,
    pub asset_recipient: String,
}

impl InstrumentContext {
    pub fn build(kind: InstrumentKind, record: &MatterRecord, opts: &RenderOptions) -> Self {
        let window_days = opts
            .window_days
            .or_else(|| kind.response_days())
            .unwrap_or(0);

        let deadline = match opts.notice_date {
            Some(start) => deadline::weekday_date(deadline::deadline_after(start, window_days)),
            None => MISSING_DEADLINE.to_string(),
        };

        Self {
            issued_on: deadline::long_date(opts.issued_on),
            man_name: resolve(record, Field::ManName),
            fiction_name: resolve(record, Field::FictionName),
            creditor: resolve(record, Field::Creditor),
            claim_ref: resolve(record, Field::ClaimRef),
            proof_points: numbered_points(&record.proof_points),
            window_days: window_days.to_string(),
            deadline,
            trust_name: resolve(record, Field::TrustName),
            trustee_name: resolve(record, Field::TrusteeName),
            dealership: record
                .value_of(Field::Creditor)
                .map(str::to_string)
                .unwrap_or_else(|| MISSING_DEALERSHIP.to_string()),
            vehicle_vin: resolve(record, Field::VehicleVin),
            purchase_price: record
                .value_of(Field::PurchasePrice)
                .map(|price| format!("${}", price))
                .unwrap_or_else(|| Field::PurchasePrice.placeholder().to_string()),
            amendment_text: resolve(record, Field::AmendmentText),
            asset_description: resolve(record, Field::AssetDescription),
            asset_recipient: resolve(record, Field::AssetRecipient),
        }
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn resolve(record: &MatterRecord, field: Field) -> String {
    record
        .value_of(field)
        .map(str::to_string)
        .unwrap_or_else(|| field.placeholder().to_string())
}

/// Render the proof-point sequence as a 1-indexed numbered list.
///
/// Format contract: `"N.  <point>"` with two spaces after the period and a
/// blank line between items; an empty sequence yields the single
/// [`EMPTY_PROOFS_LINE`] placeholder.
fn numbered_points(points: &[String]) -> String {
    if points.is_empty() {
        return EMPTY_PROOFS_LINE.to_string();
    }

    points
        .iter()
        .enumerate()
        .map(|(index, point)| format!("{}.  {}", index + 1, point))
        .collect::<Vec<_>>()
        .join("\n\n")
}
