// ABOUTME: Error types for instrument rendering operations
// ABOUTME: Defines specific error types for template registration and kind parsing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstrumentError {
    #[error("Unknown instrument kind: {name}")]
    UnknownKind { name: String },

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InstrumentError>;
