//! ExtractDocumentHandler - Handles a single extraction invocation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::extraction::{
    ExtractionError, ExtractionResult, InboundEvent, InvocationMode, ResolvedDocument,
    DEFAULT_FILENAME,
};
use crate::ports::DocumentExtractor;

/// Command carrying the raw event payload.
#[derive(Debug, Clone)]
pub struct ExtractDocumentCommand {
    pub event: Value,
}

/// Result of a successful invocation.
///
/// The mode decides how the lambda adapter shapes the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractDocumentResult {
    pub mode: InvocationMode,
    pub extraction: ExtractionResult,
}

/// Handler for extraction invocations.
pub struct ExtractDocumentHandler {
    extractor: Arc<dyn DocumentExtractor>,
    unknown_filename: String,
}

impl ExtractDocumentHandler {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            extractor,
            unknown_filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Overrides the filename reported when the event names none.
    pub fn with_unknown_filename(mut self, unknown_filename: impl Into<String>) -> Self {
        self.unknown_filename = unknown_filename.into();
        self
    }

    pub fn handle(
        &self,
        cmd: ExtractDocumentCommand,
    ) -> Result<ExtractDocumentResult, ExtractionError> {
        info!(event = %cmd.event, "Received event");

        // 1. Validate shape
        let event = InboundEvent::from_value(cmd.event)?;

        // 2. Resolve inputs (may decode the body)
        let resolved = ResolvedDocument::resolve(&event, &self.unknown_filename)?;

        // 3. Extract
        let extraction = self.extractor.extract(&resolved);

        // 4. Pick the response shape
        let mode = InvocationMode::detect(&event);

        debug!(
            mode = %mode,
            extractor = self.extractor.name(),
            filename = %extraction.filename,
            "Extraction complete"
        );

        Ok(ExtractDocumentResult { mode, extraction })
    }
}
