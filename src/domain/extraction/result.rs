//! Extraction result value object.

use serde::{Deserialize, Serialize};

/// Payload describing the outcome of an extraction.
///
/// Serialized field order is `success`, `filename`, `documentContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Always `true` for the simulated extractor; callers cannot detect a
    /// failed extraction from this flag.
    pub success: bool,
    pub filename: String,
    pub document_content: String,
}

impl ExtractionResult {
    /// Creates a successful result.
    pub fn succeeded(filename: impl Into<String>, document_content: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            document_content: document_content.into(),
        }
    }
}
