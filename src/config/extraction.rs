//! Extraction configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::extraction::FALLBACK_DOCUMENT_CONTENT;
use crate::domain::extraction::DEFAULT_FILENAME;

/// Defaults applied when an event omits its inputs
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Filename reported when the event names none
    #[serde(default = "default_unknown_filename")]
    pub unknown_filename: String,

    /// Document content reported when the event carries no text
    #[serde(default = "default_fallback_content")]
    pub fallback_content: String,
}

impl ExtractionConfig {
    /// Validate extraction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.unknown_filename.trim().is_empty() {
            return Err(ValidationError::MissingRequired("extraction.unknown_filename"));
        }
        if self.fallback_content.trim().is_empty() {
            return Err(ValidationError::MissingRequired("extraction.fallback_content"));
        }
        Ok(())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            unknown_filename: default_unknown_filename(),
            fallback_content: default_fallback_content(),
        }
    }
}

fn default_unknown_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_fallback_content() -> String {
    FALLBACK_DOCUMENT_CONTENT.to_string()
}
