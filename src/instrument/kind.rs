// ABOUTME: Closed enumeration of instrument kinds and their product families
// ABOUTME: Maps each kind to a stable short code, display label, and response window

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Product family an instrument kind belongs to.
///
/// `DeclarationOfTrust` and `AppointmentOfTrustee` appear in both families,
/// so membership is checked through [`InstrumentKind::in_family`] rather than
/// stored as a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Family {
    Remedy,
    TrustOps,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Remedy => write!(f, "remedy"),
            Family::TrustOps => write!(f, "trust-ops"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKind {
    ConditionalAcceptance,
    EstoppelTenDay,
    EstoppelTwentyEightDay,
    FaultAndCure,
    AffidavitOfStatus,
    DeclarationOfTrust,
    AppointmentOfTrustee,
    NoticeToAgent,
    ProofOfFunds,
    TrustAmendment,
    AssetTransfer,
}

const REMEDY_KINDS: &[InstrumentKind] = &[
    InstrumentKind::ConditionalAcceptance,
    InstrumentKind::EstoppelTenDay,
    InstrumentKind::EstoppelTwentyEightDay,
    InstrumentKind::FaultAndCure,
    InstrumentKind::AffidavitOfStatus,
    InstrumentKind::DeclarationOfTrust,
    InstrumentKind::AppointmentOfTrustee,
    InstrumentKind::NoticeToAgent,
];

const TRUST_OPS_KINDS: &[InstrumentKind] = &[
    InstrumentKind::DeclarationOfTrust,
    InstrumentKind::AppointmentOfTrustee,
    InstrumentKind::ProofOfFunds,
    InstrumentKind::TrustAmendment,
    InstrumentKind::AssetTransfer,
];

const ALL_KINDS: &[InstrumentKind] = &[
    InstrumentKind::ConditionalAcceptance,
    InstrumentKind::EstoppelTenDay,
    InstrumentKind::EstoppelTwentyEightDay,
    InstrumentKind::FaultAndCure,
    InstrumentKind::AffidavitOfStatus,
    InstrumentKind::DeclarationOfTrust,
    InstrumentKind::AppointmentOfTrustee,
    InstrumentKind::NoticeToAgent,
    InstrumentKind::ProofOfFunds,
    InstrumentKind::TrustAmendment,
    InstrumentKind::AssetTransfer,
];

impl InstrumentKind {
    /// Every kind in the closed enumeration, both families combined
    pub fn all() -> &'static [InstrumentKind] {
        ALL_KINDS
    }

    /// Kinds belonging to the given product family
    pub fn in_family(family: Family) -> &'static [InstrumentKind] {
        match family {
            Family::Remedy => REMEDY_KINDS,
            Family::TrustOps => TRUST_OPS_KINDS,
        }
    }

    /// Stable short code used for template registration and CLI selection
    pub fn code(&self) -> &'static str {
        match self {
            InstrumentKind::ConditionalAcceptance => "CA",
            InstrumentKind::EstoppelTenDay => "E10",
            InstrumentKind::EstoppelTwentyEightDay => "E28",
            InstrumentKind::FaultAndCure => "FC",
            InstrumentKind::AffidavitOfStatus => "AOS",
            InstrumentKind::DeclarationOfTrust => "DOT",
            InstrumentKind::AppointmentOfTrustee => "AOT",
            InstrumentKind::NoticeToAgent => "NTA",
            InstrumentKind::ProofOfFunds => "POF",
            InstrumentKind::TrustAmendment => "TAM",
            InstrumentKind::AssetTransfer => "ATR",
        }
    }

    /// Human-readable document title
    pub fn label(&self) -> &'static str {
        match self {
            InstrumentKind::ConditionalAcceptance => "Conditional Acceptance",
            InstrumentKind::EstoppelTenDay => "Estoppel Notice (10-Day)",
            InstrumentKind::EstoppelTwentyEightDay => "Estoppel Notice (28-Day)",
            InstrumentKind::FaultAndCure => "Fault and Cure Notice",
            InstrumentKind::AffidavitOfStatus => "Affidavit of Status",
            InstrumentKind::DeclarationOfTrust => "Declaration of Trust",
            InstrumentKind::AppointmentOfTrustee => "Appointment of Trustee",
            InstrumentKind::NoticeToAgent => "Notice to Agent",
            InstrumentKind::ProofOfFunds => "Proof of Funds Letter",
            InstrumentKind::TrustAmendment => "Trust Amendment",
            InstrumentKind::AssetTransfer => "Asset Transfer Notice",
        }
    }

    /// Kebab-case name accepted on the command line alongside the short code
    pub fn slug(&self) -> &'static str {
        match self {
            InstrumentKind::ConditionalAcceptance => "conditional-acceptance",
            InstrumentKind::EstoppelTenDay => "estoppel-10",
            InstrumentKind::EstoppelTwentyEightDay => "estoppel-28",
            InstrumentKind::FaultAndCure => "fault-and-cure",
            InstrumentKind::AffidavitOfStatus => "affidavit-of-status",
            InstrumentKind::DeclarationOfTrust => "declaration-of-trust",
            InstrumentKind::AppointmentOfTrustee => "appointment-of-trustee",
            InstrumentKind::NoticeToAgent => "notice-to-agent",
            InstrumentKind::ProofOfFunds => "proof-of-funds",
            InstrumentKind::TrustAmendment => "trust-amendment",
            InstrumentKind::AssetTransfer => "asset-transfer",
        }
    }

    /// Calendar-day response window interpolated into estoppel bodies
    pub fn response_days(&self) -> Option<i64> {
        match self {
            InstrumentKind::EstoppelTenDay => Some(10),
            InstrumentKind::EstoppelTwentyEightDay => Some(28),
            _ => None,
        }
    }

    /// Whether the instrument is issued from the trustee's office rather
    /// than by the individual (distinct letterhead and signature block)
    pub fn from_trust_office(&self) -> bool {
        matches!(
            self,
            InstrumentKind::ProofOfFunds | InstrumentKind::AssetTransfer
        )
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_KINDS
            .iter()
            .find(|kind| {
                kind.code().eq_ignore_ascii_case(needle) || kind.slug().eq_ignore_ascii_case(needle)
            })
            .copied()
            .ok_or_else(|| InstrumentError::UnknownKind {
                name: needle.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_unique_codes() {
        let mut codes: Vec<&str> = InstrumentKind::all().iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), InstrumentKind::all().len());
    }

    #[test]
    fn test_family_membership() {
        assert!(InstrumentKind::in_family(Family::Remedy)
            .contains(&InstrumentKind::ConditionalAcceptance));
        assert!(InstrumentKind::in_family(Family::TrustOps).contains(&InstrumentKind::ProofOfFunds));

        // Trust foundation documents belong to both families
        for family in [Family::Remedy, Family::TrustOps] {
            assert!(InstrumentKind::in_family(family).contains(&InstrumentKind::DeclarationOfTrust));
            assert!(
                InstrumentKind::in_family(family).contains(&InstrumentKind::AppointmentOfTrustee)
            );
        }
    }

    #[test]
    fn test_parse_by_code_and_slug() {
        assert_eq!(
            "CA".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::ConditionalAcceptance
        );
        assert_eq!(
            "e10".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::EstoppelTenDay
        );
        assert_eq!(
            "proof-of-funds".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::ProofOfFunds
        );
    }

    #[test]
    fn test_parse_unknown_kind() {
        let result = "subpoena".parse::<InstrumentKind>();
        assert!(result.is_err());
    }

    #[test]
    fn test_response_days() {
        assert_eq!(InstrumentKind::EstoppelTenDay.response_days(), Some(10));
        assert_eq!(
            InstrumentKind::EstoppelTwentyEightDay.response_days(),
            Some(28)
        );
        assert_eq!(InstrumentKind::AffidavitOfStatus.response_days(), None);
    }
}
