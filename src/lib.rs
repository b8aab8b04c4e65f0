// ABOUTME: Main library module for the scrivener drafting engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod instrument;
pub mod matter;
pub mod output;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use instrument::{Engine, Family, InstrumentKind, RenderOptions};
pub use matter::{Field, MatterLoader, MatterRecord};
pub use output::{DraftEnvelope, OutputFormat};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
