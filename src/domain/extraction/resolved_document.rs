//! Filename and document text resolved from an inbound event.

use super::errors::ExtractionError;
use super::event::InboundEvent;
use super::truthiness::{as_text, truthy};

/// Filename used when neither the event nor its body names one.
pub const DEFAULT_FILENAME: &str = "unknown";

/// Input to an extractor, with all defaulting already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub filename: String,
    /// Raw document text. Empty when the caller supplied none.
    pub document: String,
}

impl ResolvedDocument {
    /// Resolves filename and document text from an event.
    ///
    /// Precedence per field: top-level value, then the same key in the
    /// decoded body, then the default (`unknown_filename` or the empty
    /// string). The body is decoded only if a field falls through to it.
    ///
    /// # Errors
    ///
    /// Propagates body decoding errors from [`LazyBody::field`].
    ///
    /// [`LazyBody::field`]: super::event::LazyBody::field
    pub fn resolve(event: &InboundEvent, unknown_filename: &str) -> Result<Self, ExtractionError> {
        let mut body = event.body();

        let filename = match truthy(event.filename.as_ref()) {
            Some(value) => as_text(value),
            None => truthy(body.field("filename")?)
                .map(as_text)
                .unwrap_or_else(|| unknown_filename.to_string()),
        };

        let document = match truthy(event.document.as_ref()) {
            Some(value) => as_text(value),
            None => truthy(body.field("document")?)
                .map(as_text)
                .unwrap_or_default(),
        };

        Ok(Self { filename, document })
    }

    pub fn has_document(&self) -> bool {
        !self.document.is_empty()
    }
}
