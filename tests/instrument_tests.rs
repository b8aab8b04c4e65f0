// ABOUTME: Integration tests for the instrument rendering engine
// ABOUTME: Exercises every kind end-to-end against the formatting contracts

use scrivener::{Engine, InstrumentKind, MatterRecord};

mod common;
use common::{date, fixed_options, remedy_record, trust_record};

#[test]
fn test_every_kind_renders_for_every_record_shape() {
    let engine = Engine::new().unwrap();
    let records = [MatterRecord::default(), remedy_record(), trust_record()];

    for record in &records {
        for kind in InstrumentKind::all() {
            let text = engine.render(*kind, record, &fixed_options());
            assert!(!text.is_empty(), "empty output for {}", kind.code());
            assert!(
                !text.contains("undefined"),
                "interpolation artifact in {}",
                kind.code()
            );
            assert!(
                !text.starts_with("No generator found"),
                "missing generator for {}",
                kind.code()
            );
        }
    }
}

#[test]
fn test_conditional_acceptance_full_shape() {
    let engine = Engine::new().unwrap();
    let text = engine.render(
        InstrumentKind::ConditionalAcceptance,
        &remedy_record(),
        &fixed_options(),
    );

    // Letterhead
    assert!(text.starts_with("[Your Address Here]"));
    assert!(text.contains("Date: March 15, 2024"));
    assert!(text.contains("TO: ACME Corp (The Claimant/Agency/Fiduciary)"));
    assert!(text.contains("Reference: REF-001"));

    // Body with numbered proof points, in order
    assert!(text.contains("NOTICE OF CONDITIONAL ACCEPTANCE FOR VALUE"));
    let first = text.find("1.  Show the contract.").unwrap();
    let second = text.find("2.  Prove standing.").unwrap();
    assert!(first < second);
    assert!(text.contains("U.S. v. Minker (1956)"));

    // Closing
    assert!(text.contains("I reserve all my Lawful Rights."));
    assert!(text.contains("John Henry\nSui Juris"));
    assert!(text.trim_end().ends_with("WITHOUT PREJUDICE UCC 1-308"));
}

#[test]
fn test_conditional_acceptance_empty_proofs_placeholder() {
    let engine = Engine::new().unwrap();
    let mut record = remedy_record();
    record.proof_points.clear();

    let text = engine.render(InstrumentKind::ConditionalAcceptance, &record, &fixed_options());
    assert!(text.contains(
        "1.  [AI-Generated points will appear here. Describe your situation and click \"Generate Proofs with AI\".]"
    ));
    assert!(!text.contains("2.  "));
}

#[test]
fn test_estoppel_deadlines_across_boundaries() {
    let engine = Engine::new().unwrap();
    let record = remedy_record();

    let options = fixed_options().with_notice_date(date(2024, 1, 1));
    let ten = engine.render(InstrumentKind::EstoppelTenDay, &record, &options);
    assert!(ten.contains("NOTICE OF ESTOPPEL BY TACIT AGREEMENT (10-DAY DEFAULT)"));
    assert!(ten.contains("was Thursday, January 11, 2024."));

    let twenty_eight = engine.render(InstrumentKind::EstoppelTwentyEightDay, &record, &options);
    assert!(twenty_eight.contains("(28-DAY DEFAULT)"));
    assert!(twenty_eight.contains("Monday, January 29, 2024"));

    // Year boundary
    let december = fixed_options().with_notice_date(date(2024, 12, 25));
    let crossed = engine.render(InstrumentKind::EstoppelTenDay, &record, &december);
    assert!(crossed.contains("Saturday, January 4, 2025"));
}

#[test]
fn test_estoppel_names_the_silent_creditor() {
    let engine = Engine::new().unwrap();
    let options = fixed_options().with_notice_date(date(2024, 1, 1));
    let text = engine.render(InstrumentKind::EstoppelTenDay, &remedy_record(), &options);

    assert!(text.contains("WHEREAS: ACME Corp has failed to provide"));
    assert!(text.contains("against John Henry and the legal fiction JOHN H DOE"));
}

#[test]
fn test_placeholder_document_remains_well_formed() {
    let engine = Engine::new().unwrap();
    let record = MatterRecord::default();

    let text = engine.render(InstrumentKind::DeclarationOfTrust, &record, &fixed_options());
    assert!(text.contains("The trust shall be known as: [Trust Name]."));
    assert!(text.contains("I, [Lawful Name], the Grantor"));
    assert!(text.contains("the legal fiction [Legal Fiction]"));

    let pof = engine.render(InstrumentKind::ProofOfFunds, &record, &fixed_options());
    assert!(pof.contains("TO: [Dealership Name]"));
    assert!(pof.contains("VEHICLE IDENTIFICATION NUMBER (VIN): [Vehicle VIN]"));
    assert!(pof.contains("purchase price of [Purchase Price]."));
}

#[test]
fn test_trust_office_instruments_use_trustee_blocks() {
    let engine = Engine::new().unwrap();
    let record = trust_record();

    let pof = engine.render(InstrumentKind::ProofOfFunds, &record, &fixed_options());
    assert!(pof.starts_with("From the Office of the Trustee\nSovereign Holdings Trust"));
    assert!(pof.contains("purchase price of $32,500.00."));
    assert!(pof.contains("Jane Smith, Trustee"));
    assert!(pof.contains("For and on behalf of Sovereign Holdings Trust"));
    assert!(!pof.contains("Sui Juris"));

    let transfer = engine.render(InstrumentKind::AssetTransfer, &record, &fixed_options());
    assert!(transfer.contains("NOTICE OF ASSET TRANSFER"));
    assert!(transfer.contains("Real property located at 123 Main Street"));
    assert!(transfer.contains("Sovereign Holdings Trust II"));
}

#[test]
fn test_trust_amendment_keeps_individual_blocks() {
    let engine = Engine::new().unwrap();
    let text = engine.render(InstrumentKind::TrustAmendment, &trust_record(), &fixed_options());

    assert!(text.contains("AMENDMENT TO THE DECLARATION OF TRUST\nOF\nSovereign Holdings Trust"));
    assert!(text.contains("The name of the Trustee is hereby changed to Jane Smith."));
    assert!(text.contains("WITHOUT PREJUDICE UCC 1-308"));
}

#[test]
fn test_affidavit_scenario() {
    let engine = Engine::new().unwrap();
    let text = engine.render(InstrumentKind::AffidavitOfStatus, &remedy_record(), &fixed_options());

    assert!(text.contains("John Henry"));
    assert!(text.contains("JOHN H DOE"));
    assert!(text.contains("This Affidavit stands as truth in commerce unless rebutted"));
    assert!(text.contains("________________________________\nJohn Henry"));
}

#[test]
fn test_render_is_deterministic() {
    let engine = Engine::new().unwrap();
    let options = fixed_options().with_notice_date(date(2024, 1, 1));

    for kind in InstrumentKind::all() {
        let first = engine.render(*kind, &trust_record(), &options);
        let second = engine.render(*kind, &trust_record(), &options);
        assert_eq!(first, second, "nondeterministic output for {}", kind.code());
    }
}

#[test]
fn test_unregistered_kind_yields_diagnostic() {
    let engine = Engine::with_kinds(&[InstrumentKind::NoticeToAgent]).unwrap();
    let text = engine.render(
        InstrumentKind::TrustAmendment,
        &trust_record(),
        &fixed_options(),
    );
    assert_eq!(text, "No generator found for document type: TAM");
}
