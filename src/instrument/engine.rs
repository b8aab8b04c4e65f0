// ABOUTME: Instrument rendering engine built on Handlebars
// ABOUTME: Composes letterhead, body, and closing blocks into finished document text

use handlebars::Handlebars;
use tracing::warn;

use super::context::{InstrumentContext, RenderOptions};
use super::error::Result;
use super::kind::InstrumentKind;
use super::registry;
use crate::matter::MatterRecord;

#[derive(Clone)]
pub struct Engine {
    handlebars: Handlebars<'static>,
}

impl Engine {
    /// Create an engine with every kind in the closed enumeration registered
    pub fn new() -> Result<Self> {
        Self::with_kinds(InstrumentKind::all())
    }

    /// Create an engine with only the given kinds registered.
    ///
    /// Rendering an unregistered kind yields the missing-generator
    /// diagnostic instead of document text.
    pub fn with_kinds(kinds: &[InstrumentKind]) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Plain-text documents, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        registry::register_all(&mut handlebars, kinds)?;

        Ok(Self { handlebars })
    }

    /// Render an instrument.
    ///
    /// Total over the input domain: absent fields render as bracketed
    /// placeholders, an unregistered kind renders as a diagnostic line, and
    /// no error escapes to the caller.
    pub fn render(&self, kind: InstrumentKind, record: &MatterRecord, opts: &RenderOptions) -> String {
        if !self.handlebars.has_template(kind.code()) {
            return registry::missing_generator(kind);
        }

        let context = InstrumentContext::build(kind, record, opts);
        match self.compose(kind, &context) {
            Ok(text) => text,
            Err(err) => {
                warn!("render failed for {}: {}", kind.code(), err);
                registry::missing_generator(kind)
            }
        }
    }

    fn compose(&self, kind: InstrumentKind, context: &InstrumentContext) -> Result<String> {
        let json = context.to_json()?;
        let (letterhead, closing) = registry::blocks_for(kind);

        let header = self.handlebars.render(letterhead, &json)?;
        let body = self.handlebars.render(kind.code(), &json)?;
        let footer = self.handlebars.render(closing, &json)?;

        Ok(format!("{}\n\n{}\n\n{}\n", header, body, footer))
    }
}
