// ABOUTME: Instrument rendering module for the scrivener drafting engine
// ABOUTME: Provides the document kind enumeration, template registry, and render engine

pub mod context;
pub mod deadline;
pub mod engine;
pub mod error;
pub mod kind;
pub mod registry;
pub mod templates;

pub use context::{InstrumentContext, RenderOptions};
pub use engine::Engine;
pub use error::{InstrumentError, Result};
pub use kind::{Family, InstrumentKind};
