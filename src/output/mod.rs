// ABOUTME: Output handling module for rendered instruments
// ABOUTME: Provides the draft envelope, output formats, and destination writers

pub mod error;
pub mod formatter;
pub mod writer;

pub use error::{OutputError, Result};
pub use formatter::{format_draft, DraftEnvelope, OutputFormat};
pub use writer::{writer_for, FileWriter, InstrumentWriter, StdoutWriter};
