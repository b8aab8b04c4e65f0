// ABOUTME: Output writers for rendered drafts (stdout and files)
// ABOUTME: Handles writing formatted instrument output to its destination

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::error::{OutputError, Result};

#[async_trait]
pub trait InstrumentWriter: Send + Sync {
    async fn write(&self, content: &str) -> Result<()>;
}

pub struct StdoutWriter;

pub struct FileWriter {
    path: PathBuf,
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InstrumentWriter for StdoutWriter {
    async fn write(&self, content: &str) -> Result<()> {
        println!("{}", content);
        debug!("Draft written to stdout ({} chars)", content.len());
        Ok(())
    }
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl InstrumentWriter for FileWriter {
    async fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| OutputError::WriteError {
                        message: format!(
                            "Failed to create output directory '{}': {}",
                            parent.display(),
                            e
                        ),
                    })?;
            }
        }

        fs::write(&self.path, content)
            .await
            .map_err(|e| OutputError::WriteError {
                message: format!("Failed to write '{}': {}", self.path.display(), e),
            })?;

        info!("Draft written to: {}", self.path.display());
        Ok(())
    }
}

/// Select a writer for a destination; `None` or `-` means stdout
pub fn writer_for(destination: Option<&Path>) -> Box<dyn InstrumentWriter> {
    match destination {
        Some(path) if path.as_os_str() != "-" => Box::new(FileWriter::new(path)),
        _ => Box::new(StdoutWriter::new()),
    }
}
