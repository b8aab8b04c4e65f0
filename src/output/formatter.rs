// ABOUTME: Draft envelope and output formatting for rendered instruments
// ABOUTME: Wraps document text with generation metadata and serializes it as text or JSON

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

use super::error::{OutputError, Result};
use crate::instrument::InstrumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// A rendered instrument with generation metadata
#[derive(Debug, Clone, Serialize)]
pub struct DraftEnvelope {
    pub instrument_id: String,
    pub kind: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub body: String,
}

impl DraftEnvelope {
    pub fn new(kind: InstrumentKind, body: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            instrument_id: Uuid::new_v4().to_string(),
            kind: kind.code().to_string(),
            title: kind.label().to_string(),
            generated_at,
            body,
        }
    }
}

/// Serialize a draft for its destination.
///
/// Text output is the bare document body; JSON wraps it with the envelope
/// metadata for downstream tooling.
pub fn format_draft(envelope: &DraftEnvelope, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(envelope.body.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(envelope).map_err(OutputError::SerializationError)
        }
    }
}
