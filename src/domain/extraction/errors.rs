//! Errors raised while interpreting an inbound event.

use thiserror::Error;

/// Failures that abort an invocation.
///
/// None of these are converted into a response payload: they propagate to
/// the hosting runtime and surface as an invocation error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The payload is `null`.
    #[error("Invalid event: {reason}")]
    InvalidEvent { reason: String },

    /// `body` is present but is not valid JSON.
    #[error("Malformed request body: {source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },

    /// `body` is an object or an array instead of encoded JSON.
    #[error("Request body must be a JSON-encoded string")]
    BodyNotText,

    /// `body` decodes to `null`, so no field can be read from it.
    #[error("Request body decodes to null")]
    NullBody,
}

impl ExtractionError {
    pub fn invalid_event(reason: impl Into<String>) -> Self {
        ExtractionError::InvalidEvent {
            reason: reason.into(),
        }
    }

    pub fn malformed_body(source: serde_json::Error) -> Self {
        ExtractionError::MalformedBody { source }
    }
}
