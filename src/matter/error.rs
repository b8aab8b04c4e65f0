// ABOUTME: Error types for matter record operations
// ABOUTME: Defines specific error types for loading and field override handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatterError {
    #[error("Matter file not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported matter file extension: {path} (expected .yaml, .yml, or .json)")]
    UnsupportedFormat { path: String },

    #[error("Unknown matter field: {name}")]
    UnknownField { name: String },

    #[error("Invalid field override '{raw}'. Expected 'key=value'")]
    InvalidOverride { raw: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatterError>;
