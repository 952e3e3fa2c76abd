//! Simulated extractor that fabricates a canned result.

use crate::domain::extraction::{ExtractionResult, ResolvedDocument};
use crate::ports::DocumentExtractor;

/// Content reported when the caller supplies no document text.
pub const FALLBACK_DOCUMENT_CONTENT: &str = "Sample document content for QA";

/// Extractor used by the QA pipeline in place of a real engine.
///
/// Echoes the supplied text back as the document content, or a fixed
/// placeholder when none was given. Always reports success.
#[derive(Debug, Clone)]
pub struct SimulatedExtractor {
    fallback_content: String,
}

impl SimulatedExtractor {
    pub fn new(fallback_content: impl Into<String>) -> Self {
        Self {
            fallback_content: fallback_content.into(),
        }
    }

    pub fn fallback_content(&self) -> &str {
        &self.fallback_content
    }
}

impl Default for SimulatedExtractor {
    fn default() -> Self {
        Self::new(FALLBACK_DOCUMENT_CONTENT)
    }
}

impl DocumentExtractor for SimulatedExtractor {
    fn extract(&self, document: &ResolvedDocument) -> ExtractionResult {
        let content = if document.has_document() {
            document.document.as_str()
        } else {
            self.fallback_content.as_str()
        };
        ExtractionResult::succeeded(document.filename.as_str(), content)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
