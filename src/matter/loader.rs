// ABOUTME: Matter file loading and deserialization
// ABOUTME: Parses YAML or JSON matter files into a MatterRecord

use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::error::{MatterError, Result};
use super::record::MatterRecord;

#[derive(Debug, Clone, Default)]
pub struct MatterLoader;

impl MatterLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a matter record from a YAML or JSON file, chosen by extension
    pub async fn parse_file(&self, path: &Path) -> Result<MatterRecord> {
        if !path.exists() {
            return Err(MatterError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).await?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let record = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&contents)?,
            "json" => Self::from_json(&contents)?,
            _ => {
                return Err(MatterError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        debug!("Loaded matter file: {}", path.display());
        Ok(record)
    }

    pub fn from_yaml(contents: &str) -> Result<MatterRecord> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json(contents: &str) -> Result<MatterRecord> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matter::Field;

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
man_name: John Henry
fiction_name: JOHN H DOE
creditor: ACME Corp
claim_ref: REF-001
proof_points:
  - Show the contract.
  - Prove standing.
"#;

        let record = MatterLoader::from_yaml(yaml).unwrap();
        assert_eq!(record.value_of(Field::ManName), Some("John Henry"));
        assert_eq!(record.proof_points.len(), 2);
        assert_eq!(record.proof_points[0], "Show the contract.");
    }

    #[test]
    fn test_from_yaml_all_fields_optional() {
        let record = MatterLoader::from_yaml("{}").unwrap();
        assert_eq!(record.value_of(Field::ManName), None);
        assert!(record.proof_points.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let yaml = "man_name: John Henry\nshoe_size: 11\n";
        assert!(MatterLoader::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"trust_name": "Sovereign Holdings Trust", "trustee_name": "Jane Smith"}"#;

        let record = MatterLoader::from_json(json).unwrap();
        assert_eq!(
            record.value_of(Field::TrustName),
            Some("Sovereign Holdings Trust")
        );
        assert_eq!(record.value_of(Field::TrusteeName), Some("Jane Smith"));
    }

    #[tokio::test]
    async fn test_parse_file_missing() {
        let loader = MatterLoader::new();
        let result = loader.parse_file(Path::new("/nonexistent/matter.yaml")).await;
        assert!(matches!(result, Err(MatterError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_parse_file_unsupported_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("matter.txt");
        std::fs::write(&path, "man_name: John").unwrap();

        let loader = MatterLoader::new();
        let result = loader.parse_file(&path).await;
        assert!(matches!(result, Err(MatterError::UnsupportedFormat { .. })));
    }
}
