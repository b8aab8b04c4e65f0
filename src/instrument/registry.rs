// ABOUTME: Template registration table mapping instrument kinds to handlebars templates
// ABOUTME: Isolates the kind-to-template association and the missing-generator fallback

use handlebars::Handlebars;

use super::error::Result;
use super::kind::InstrumentKind;
use super::templates;

/// Registered name of the standard letterhead block
pub const LETTERHEAD: &str = "letterhead";
/// Registered name of the trustee-office letterhead block
pub const TRUST_LETTERHEAD: &str = "trust-letterhead";
/// Registered name of the standard closing block
pub const CLOSING: &str = "closing";
/// Registered name of the trustee signature closing block
pub const TRUST_CLOSING: &str = "trust-closing";

/// Register the shared block fragments and one body template per kind.
///
/// Body templates are keyed by the kind's short code, so lookup stays a
/// data-driven table rather than a match statement in the engine.
pub fn register_all(handlebars: &mut Handlebars, kinds: &[InstrumentKind]) -> Result<()> {
    handlebars.register_template_string(LETTERHEAD, templates::LETTERHEAD)?;
    handlebars.register_template_string(TRUST_LETTERHEAD, templates::TRUST_LETTERHEAD)?;
    handlebars.register_template_string(CLOSING, templates::CLOSING)?;
    handlebars.register_template_string(TRUST_CLOSING, templates::TRUST_CLOSING)?;

    for kind in kinds {
        handlebars.register_template_string(kind.code(), templates::body_source(*kind))?;
    }

    Ok(())
}

/// Letterhead and closing block names for an instrument kind
pub fn blocks_for(kind: InstrumentKind) -> (&'static str, &'static str) {
    if kind.from_trust_office() {
        (TRUST_LETTERHEAD, TRUST_CLOSING)
    } else {
        (LETTERHEAD, CLOSING)
    }
}

/// Diagnostic returned when no template is registered for a kind
pub fn missing_generator(kind: InstrumentKind) -> String {
    format!("No generator found for document type: {}", kind.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_kinds() {
        let mut handlebars = Handlebars::new();
        register_all(&mut handlebars, InstrumentKind::all()).unwrap();

        for kind in InstrumentKind::all() {
            assert!(handlebars.has_template(kind.code()));
        }
        assert!(handlebars.has_template(LETTERHEAD));
        assert!(handlebars.has_template(TRUST_CLOSING));
    }

    #[test]
    fn test_blocks_for_trust_office_kinds() {
        assert_eq!(
            blocks_for(InstrumentKind::ProofOfFunds),
            (TRUST_LETTERHEAD, TRUST_CLOSING)
        );
        assert_eq!(
            blocks_for(InstrumentKind::AssetTransfer),
            (TRUST_LETTERHEAD, TRUST_CLOSING)
        );
        assert_eq!(
            blocks_for(InstrumentKind::TrustAmendment),
            (LETTERHEAD, CLOSING)
        );
    }

    #[test]
    fn test_missing_generator_message() {
        assert_eq!(
            missing_generator(InstrumentKind::NoticeToAgent),
            "No generator found for document type: NTA"
        );
    }
}
