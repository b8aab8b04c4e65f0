// ABOUTME: Per-kind listing of the fields each instrument template interpolates
// ABOUTME: Advisory only; rendering never blocks on a missing field

use crate::instrument::InstrumentKind;

use super::record::{Field, MatterRecord};

/// Fields interpolated by the given instrument kind's template blocks.
///
/// A field listed here that is absent from the record renders as its
/// bracketed placeholder; the `check` command reports exactly that set.
pub fn required_fields(kind: InstrumentKind) -> &'static [Field] {
    match kind {
        InstrumentKind::ConditionalAcceptance => &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
        ],
        InstrumentKind::EstoppelTenDay | InstrumentKind::EstoppelTwentyEightDay => &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
        ],
        InstrumentKind::FaultAndCure => &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
        ],
        InstrumentKind::AffidavitOfStatus => &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
        ],
        InstrumentKind::DeclarationOfTrust => &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
            Field::TrustName,
        ],
        InstrumentKind::AppointmentOfTrustee => &[
            Field::ManName,
            Field::Creditor,
            Field::ClaimRef,
            Field::TrustName,
            Field::TrusteeName,
        ],
        InstrumentKind::NoticeToAgent => &[Field::ManName, Field::Creditor, Field::ClaimRef],
        InstrumentKind::ProofOfFunds => &[
            Field::TrustName,
            Field::TrusteeName,
            Field::Creditor,
            Field::VehicleVin,
            Field::PurchasePrice,
        ],
        InstrumentKind::TrustAmendment => &[
            Field::ManName,
            Field::Creditor,
            Field::ClaimRef,
            Field::TrustName,
            Field::AmendmentText,
        ],
        InstrumentKind::AssetTransfer => &[
            Field::TrustName,
            Field::TrusteeName,
            Field::AssetDescription,
            Field::AssetRecipient,
        ],
    }
}

/// Placeholder text the given kind renders for an absent field.
///
/// The proof-of-funds letter addresses its recipient as a dealership, so its
/// creditor placeholder differs from the generic one.
pub fn placeholder_for(kind: InstrumentKind, field: Field) -> &'static str {
    match (kind, field) {
        (InstrumentKind::ProofOfFunds, Field::Creditor) => "[Dealership Name]",
        _ => field.placeholder(),
    }
}

/// Fields of the given kind that will render as placeholders for this record
pub fn missing_fields(kind: InstrumentKind, record: &MatterRecord) -> Vec<Field> {
    required_fields(kind)
        .iter()
        .filter(|field| !record.is_present(**field))
        .copied()
        .collect()
}
