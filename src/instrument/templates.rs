// ABOUTME: Embedded template sources for every instrument kind
// ABOUTME: Provides letterhead and closing block fragments plus per-kind body text

use super::kind::InstrumentKind;

/// Standard letterhead for instruments issued by the individual
pub const LETTERHEAD: &str = r#"[Your Address Here]
Near [Your Zip Code]

Date: {{issued_on}}

TO: {{creditor}} (The Claimant/Agency/Fiduciary)
Reference: {{claim_ref}}"#;

/// Letterhead for instruments issued from the trustee's office
pub const TRUST_LETTERHEAD: &str = r#"From the Office of the Trustee
{{trust_name}}
[Trust Address]

Date: {{issued_on}}"#;

/// Rights-reservation closing with the individual's signature line
pub const CLOSING: &str = r#"I reserve all my Lawful Rights.

Sincerely, and without ill will, vexation, or frivolity,

By:
________________________________
{{man_name}}
Sui Juris
WITHOUT PREJUDICE UCC 1-308"#;

/// Trustee signature closing used by trust-office instruments
pub const TRUST_CLOSING: &str = r#"Sincerely,

By:
________________________________
{{trustee_name}}, Trustee
For and on behalf of {{trust_name}}"#;

const CONDITIONAL_ACCEPTANCE: &str = r#"NOTICE OF CONDITIONAL ACCEPTANCE FOR VALUE

Dear Sirs/Madams,

I, {{man_name}}, am in receipt of your presentment dated [Insert Date of Presentment], which attempts to establish an obligation on the legal fiction/person, {{fiction_name}}.

I conditionally agree to settle any alleged obligation ON CONDITION that you provide SWORN EVIDENCE (AFFIDAVIT), under your full commercial liability, of the following points. This demand for proof of jurisdiction is made pursuant to my right to challenge administrative authority as recognized in cases such as U.S. v. Minker (1956). Furthermore, should this matter involve a government entity acting in a commercial capacity, it is bound by commercial law as per Clearfield Trust Co. v. United States (1943).

{{proof_points}}

Failure to provide the requested sworn, point-for-point evidence, within TEN (10) days of the date of this Notice, will constitute your tacit agreement (Estoppel) that no such obligation exists, that any claim is void, and that you will cease all further communication and collection activity immediately [Commercial Maxim 8]."#;

const ESTOPPEL: &str = r#"NOTICE OF ESTOPPEL BY TACIT AGREEMENT ({{window_days}}-DAY DEFAULT)

Dear Sirs/Madams,

I, {{man_name}}, refer to my previous Notice of Conditional Acceptance dated [Insert Date of Previous Notice].

WHEREAS: The deadline for your point-for-point rebuttal and presentation of Lawful proof of claim was {{deadline}}.

WHEREAS: {{creditor}} has failed to provide a sworn, timely, and lawful rebuttal of my Affidavit, thereby leaving the facts stated therein unrebutted.

NOW, THEREFORE, BE IT KNOWN: Pursuant to the Maxims of Commercial Law, my Affidavit stands as Truth in Commerce, and by your silence, Estoppel by Tacit Agreement is fully established. This is consistent with the principle that an unrebutted affidavit stands as the judgment in commerce.

This constitutes a Final and Binding Legal Determination that the alleged obligation is void and all collection attempts against {{man_name}} and the legal fiction {{fiction_name}} are now fraudulent."#;

const FAULT_AND_CURE: &str = r#"NOTICE OF FAULT AND OPPORTUNITY TO CURE

Dear Sirs/Madams,

This notice follows my previous correspondence, including a Notice of Conditional Acceptance and a Notice of Estoppel, to which you have failed to lawfully respond. Your continued collection activities, despite the established estoppel, place you in FAULT.

You are in breach of our binding agreement established by your tacit consent.

This is your final opportunity to CURE THIS FAULT within THREE (3) days of receipt of this notice. To cure, you must:

1.  Cease all collection activities against {{man_name}} and the fiction {{fiction_name}}.
2.  Correct your records to reflect a zero balance for the reference number above.
3.  Send written confirmation via mail that the account is closed and the matter is resolved.

Failure to cure will result in the immediate issuance of a commercial lien, reporting of your unlawful activities to relevant authorities, and all other available lawful remedies."#;

const AFFIDAVIT_OF_STATUS: &str = r#"AFFIDAVIT OF STATUS

I, {{man_name}}, being of sound mind and competent to testify, do hereby state, declare, and affirm under my unlimited liability, signing under penalty of perjury, that the following is true, correct, and complete to the best of my knowledge and belief:

1.  I am a living man/woman on the land, a creation of God, and not a legal fiction, corporate entity, or ward of the state.
2.  My lawful appellation is as styled above and is not to be confused with the legal fiction, {{fiction_name}}, which is a creation of the state. This distinction between the individual and the state's creation is foundational, as affirmed in principles derived from cases like Hale v. Henkel, 201 U.S. 43 (1906).
3.  I am sovereign and subject only to the laws of God and the common law which demands I do not harm others or their property.
4.  I reserve all my rights and waive no privileges, now and forever.

This Affidavit stands as truth in commerce unless rebutted point-for-point by a sworn affidavit from another living soul with first-hand knowledge of the facts."#;

const DECLARATION_OF_TRUST: &str = r#"DECLARATION OF TRUST

BE IT KNOWN TO ALL, that I, {{man_name}}, the Grantor, being of sound mind and not under duress, do hereby irrevocably declare the creation of a private trust, effective this day.

1.  **Trust Name:** The trust shall be known as: {{trust_name}}.
2.  **Grantor:** The Grantor is {{man_name}}, a sovereign man/woman.
3.  **Corpus:** The trust corpus shall include, but not be limited to, the legal fiction {{fiction_name}} and all associated property, titles, and interests.
4.  **Beneficiary:** The primary beneficiary is {{man_name}}.
5.  **Purpose:** The purpose of this trust is for the holding of assets, the separation of legal and equitable title, and the management of affairs for the benefit of the beneficiary, outside of statutory public jurisdiction.

This Declaration stands as the foundational document of this trust."#;

const APPOINTMENT_OF_TRUSTEE: &str = r#"APPOINTMENT OF TRUSTEE

I, {{man_name}}, in my capacity as Grantor of the {{trust_name}}, do hereby appoint the following individual to act as Trustee:

**Trustee:** {{trustee_name}}

The appointed Trustee shall have the full power and authority to administer the trust according to its terms, for the benefit of the beneficiary. This appointment is effective immediately.

The Trustee accepts this appointment and acknowledges their fiduciary duty to act always in the best interest of the trust and its beneficiary."#;

const NOTICE_TO_AGENT: &str = r#"NOTICE TO AGENT IS NOTICE TO PRINCIPAL;
NOTICE TO PRINCIPAL IS NOTICE TO AGENT

This is a lawful notice.

Be advised that you, {{creditor}}, are considered an agent acting on behalf of a principal. Any and all communication, presentments, or claims sent by you are considered to have been sent with the full knowledge and authority of your principal.

Conversely, this notice, served upon you as agent, shall be deemed to be simultaneously served upon your principal. Ignorance of this notice by your principal will not be considered a defense.

You and your principal are now bound by the contents of this and all related correspondence. Govern yourselves accordingly."#;

const PROOF_OF_FUNDS: &str = r#"TO: {{dealership}}

RE: PROOF OF FUNDS & INTENT TO PURCHASE
VEHICLE IDENTIFICATION NUMBER (VIN): {{vehicle_vin}}

Dear Sirs/Madams,

This letter serves as formal notification that the {{trust_name}} (hereinafter "the Trust") has approved the acquisition of the above-referenced vehicle.

The Trustee for the Trust, {{trustee_name}}, is authorized to tender the agreed upon purchase price of {{purchase_price}}.

This letter shall serve as sufficient proof of funds for this private, non-commercial conveyance. The Trust will be providing its own financing and will not be seeking or accepting any third-party, dealer-arranged financing.

Please prepare the buyer's order or purchase agreement reflecting the Trust as the purchaser and forward it to the Trustee for execution.

This is not an application for credit. No credit inquiry is authorized."#;

const TRUST_AMENDMENT: &str = r#"AMENDMENT TO THE DECLARATION OF TRUST
OF
{{trust_name}}

BE IT KNOWN TO ALL, that I, {{man_name}}, the Grantor, having reserved the right to amend the trust, do hereby make the following amendment to the Declaration of Trust dated [Original Date of Declaration].

Article [Number] is hereby amended to read as follows:

{{amendment_text}}

All other provisions of the Declaration of Trust shall remain in full force and effect.

IN WITNESS WHEREOF, the Grantor has executed this amendment on this day."#;

const ASSET_TRANSFER: &str = r#"NOTICE OF ASSET TRANSFER

This document serves as notice that the Trustee of the {{trust_name}}, {{trustee_name}}, has authorized the transfer of the following trust asset:

Asset Description:
{{asset_description}}

This asset is hereby conveyed from the Trust to:
{{asset_recipient}}

This transfer is made in accordance with the powers granted to the Trustee under the terms of the Declaration of Trust."#;

/// Body template source for an instrument kind
pub fn body_source(kind: InstrumentKind) -> &'static str {
    match kind {
        InstrumentKind::ConditionalAcceptance => CONDITIONAL_ACCEPTANCE,
        InstrumentKind::EstoppelTenDay | InstrumentKind::EstoppelTwentyEightDay => ESTOPPEL,
        InstrumentKind::FaultAndCure => FAULT_AND_CURE,
        InstrumentKind::AffidavitOfStatus => AFFIDAVIT_OF_STATUS,
        InstrumentKind::DeclarationOfTrust => DECLARATION_OF_TRUST,
        InstrumentKind::AppointmentOfTrustee => APPOINTMENT_OF_TRUSTEE,
        InstrumentKind::NoticeToAgent => NOTICE_TO_AGENT,
        InstrumentKind::ProofOfFunds => PROOF_OF_FUNDS,
        InstrumentKind::TrustAmendment => TRUST_AMENDMENT,
        InstrumentKind::AssetTransfer => ASSET_TRANSFER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_body() {
        for kind in InstrumentKind::all() {
            assert!(
                !body_source(*kind).is_empty(),
                "no body for {}",
                kind.code()
            );
        }
    }

    #[test]
    fn test_estoppel_kinds_share_a_body() {
        assert_eq!(
            body_source(InstrumentKind::EstoppelTenDay),
            body_source(InstrumentKind::EstoppelTwentyEightDay)
        );
        assert!(body_source(InstrumentKind::EstoppelTenDay).contains("{{window_days}}"));
    }

    #[test]
    fn test_blocks_interpolate_expected_fields() {
        assert!(LETTERHEAD.contains("{{issued_on}}"));
        assert!(LETTERHEAD.contains("{{claim_ref}}"));
        assert!(CLOSING.contains("{{man_name}}"));
        assert!(TRUST_LETTERHEAD.contains("{{trust_name}}"));
        assert!(TRUST_CLOSING.contains("{{trustee_name}}"));
    }
}
