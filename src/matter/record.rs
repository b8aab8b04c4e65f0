// ABOUTME: The matter record holding all user-supplied instrument fields
// ABOUTME: Defines the field enumeration with placeholders and key=value override merging

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::error::{MatterError, Result};

/// Named scalar fields of a matter record.
///
/// The ordered proof-point list is not a `Field`; it is carried separately
/// on [`MatterRecord::proof_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ManName,
    FictionName,
    Creditor,
    ClaimRef,
    SituationContext,
    TrustName,
    TrusteeName,
    VehicleVin,
    PurchasePrice,
    AmendmentText,
    AssetDescription,
    AssetRecipient,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::ManName,
            Field::FictionName,
            Field::Creditor,
            Field::ClaimRef,
            Field::SituationContext,
            Field::TrustName,
            Field::TrusteeName,
            Field::VehicleVin,
            Field::PurchasePrice,
            Field::AmendmentText,
            Field::AssetDescription,
            Field::AssetRecipient,
        ]
    }

    /// Key used in matter files and `--field key=value` overrides
    pub fn key(&self) -> &'static str {
        match self {
            Field::ManName => "man_name",
            Field::FictionName => "fiction_name",
            Field::Creditor => "creditor",
            Field::ClaimRef => "claim_ref",
            Field::SituationContext => "situation_context",
            Field::TrustName => "trust_name",
            Field::TrusteeName => "trustee_name",
            Field::VehicleVin => "vehicle_vin",
            Field::PurchasePrice => "purchase_price",
            Field::AmendmentText => "amendment_text",
            Field::AssetDescription => "asset_description",
            Field::AssetRecipient => "asset_recipient",
        }
    }

    /// Bracketed text substituted when the field is absent from the record
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::ManName => "[Lawful Name]",
            Field::FictionName => "[Legal Fiction]",
            Field::Creditor => "[Intended Recipient]",
            Field::ClaimRef => "[Claim Reference]",
            Field::SituationContext => "[Situation Description]",
            Field::TrustName => "[Trust Name]",
            Field::TrusteeName => "[Trustee Name]",
            Field::VehicleVin => "[Vehicle VIN]",
            Field::PurchasePrice => "[Purchase Price]",
            Field::AmendmentText => {
                "[Specify the amendment details here. For example: \"The name of the Trustee is hereby changed to Jane Smith.\" Or \"A new article is added to detail the process for asset distribution.\"]"
            }
            Field::AssetDescription => {
                "[Describe the asset being transferred, e.g., \"Real property located at 123 Main Street\", \"100 shares of XYZ Corp stock\", \"Vehicle with VIN: XXXXX\"]"
            }
            Field::AssetRecipient => "[Name of Recipient/Entity]",
        }
    }

    pub fn from_key(key: &str) -> Result<Field> {
        Field::all()
            .iter()
            .find(|field| field.key() == key)
            .copied()
            .ok_or_else(|| MatterError::UnknownField {
                name: key.to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Flat record of user-supplied instrument fields.
///
/// Every field is optional; renderers substitute bracketed placeholders for
/// anything absent, so a default record still produces a well-formed
/// fill-in-the-blanks document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatterRecord {
    #[serde(default)]
    pub man_name: Option<String>,

    #[serde(default)]
    pub fiction_name: Option<String>,

    #[serde(default)]
    pub creditor: Option<String>,

    #[serde(default)]
    pub claim_ref: Option<String>,

    #[serde(default)]
    pub situation_context: Option<String>,

    /// Ordered proof-point demands; insertion order is significant and
    /// duplicates are allowed
    #[serde(default)]
    pub proof_points: Vec<String>,

    #[serde(default)]
    pub trust_name: Option<String>,

    #[serde(default)]
    pub trustee_name: Option<String>,

    #[serde(default)]
    pub vehicle_vin: Option<String>,

    #[serde(default)]
    pub purchase_price: Option<String>,

    #[serde(default)]
    pub amendment_text: Option<String>,

    #[serde(default)]
    pub asset_description: Option<String>,

    #[serde(default)]
    pub asset_recipient: Option<String>,
}

impl MatterRecord {
    /// Get a field value, treating blank and whitespace-only values as absent
    pub fn value_of(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::ManName => &self.man_name,
            Field::FictionName => &self.fiction_name,
            Field::Creditor => &self.creditor,
            Field::ClaimRef => &self.claim_ref,
            Field::SituationContext => &self.situation_context,
            Field::TrustName => &self.trust_name,
            Field::TrusteeName => &self.trustee_name,
            Field::VehicleVin => &self.vehicle_vin,
            Field::PurchasePrice => &self.purchase_price,
            Field::AmendmentText => &self.amendment_text,
            Field::AssetDescription => &self.asset_description,
            Field::AssetRecipient => &self.asset_recipient,
        };

        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn is_present(&self, field: Field) -> bool {
        self.value_of(field).is_some()
    }

    /// Set a field by its key name
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::ManName => &mut self.man_name,
            Field::FictionName => &mut self.fiction_name,
            Field::Creditor => &mut self.creditor,
            Field::ClaimRef => &mut self.claim_ref,
            Field::SituationContext => &mut self.situation_context,
            Field::TrustName => &mut self.trust_name,
            Field::TrusteeName => &mut self.trustee_name,
            Field::VehicleVin => &mut self.vehicle_vin,
            Field::PurchasePrice => &mut self.purchase_price,
            Field::AmendmentText => &mut self.amendment_text,
            Field::AssetDescription => &mut self.asset_description,
            Field::AssetRecipient => &mut self.asset_recipient,
        };

        *slot = Some(value);
    }

    /// Merge key=value overrides over the record, replacing existing values
    pub fn merge_overrides(&mut self, overrides: &HashMap<String, String>) -> Result<()> {
        for (key, value) in overrides {
            let field = Field::from_key(key)?;
            self.set_field(field, value.clone());
        }
        Ok(())
    }

    /// Fill absent fields from defaults without replacing supplied values
    pub fn apply_defaults(&mut self, defaults: &HashMap<String, String>) -> Result<()> {
        for (key, value) in defaults {
            let field = Field::from_key(key)?;
            if !self.is_present(field) {
                self.set_field(field, value.clone());
            }
        }
        Ok(())
    }

    /// Parse a list of raw `key=value` override strings
    pub fn parse_overrides(raw: &[String]) -> Result<HashMap<String, String>> {
        let mut overrides = HashMap::new();

        for item in raw {
            match item.split_once('=') {
                Some((key, value)) => {
                    overrides.insert(key.to_string(), value.to_string());
                }
                None => {
                    return Err(MatterError::InvalidOverride {
                        raw: item.to_string(),
                    })
                }
            }
        }

        Ok(overrides)
    }
}
