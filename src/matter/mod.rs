// ABOUTME: Matter record module for the scrivener drafting engine
// ABOUTME: Provides the field record, file loading, and per-kind field requirements

pub mod error;
pub mod loader;
pub mod record;
pub mod requirements;

pub use error::{MatterError, Result};
pub use loader::MatterLoader;
pub use record::{Field, MatterRecord};
pub use requirements::required_fields;
