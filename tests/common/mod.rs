// ABOUTME: Shared helpers for scrivener integration tests
// ABOUTME: Provides sample matter records and fixed render options

#![allow(dead_code)]

use chrono::NaiveDate;
use scrivener::{MatterRecord, RenderOptions};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Render options with a fixed letterhead date so output is reproducible
pub fn fixed_options() -> RenderOptions {
    RenderOptions::on(date(2024, 3, 15))
}

pub fn remedy_record() -> MatterRecord {
    MatterRecord {
        man_name: Some("John Henry".to_string()),
        fiction_name: Some("JOHN H DOE".to_string()),
        creditor: Some("ACME Corp".to_string()),
        claim_ref: Some("REF-001".to_string()),
        proof_points: vec![
            "Show the contract.".to_string(),
            "Prove standing.".to_string(),
        ],
        ..Default::default()
    }
}

pub fn trust_record() -> MatterRecord {
    MatterRecord {
        man_name: Some("John Henry".to_string()),
        fiction_name: Some("JOHN H DOE".to_string()),
        creditor: Some("Valley Motors".to_string()),
        claim_ref: Some("REF-002".to_string()),
        trust_name: Some("Sovereign Holdings Trust".to_string()),
        trustee_name: Some("Jane Smith".to_string()),
        vehicle_vin: Some("1HGCM82633A004352".to_string()),
        purchase_price: Some("32,500.00".to_string()),
        amendment_text: Some("The name of the Trustee is hereby changed to Jane Smith.".to_string()),
        asset_description: Some("Real property located at 123 Main Street".to_string()),
        asset_recipient: Some("Sovereign Holdings Trust II".to_string()),
        ..Default::default()
    }
}
