//! Invocation error types.

use thiserror::Error;

use crate::domain::extraction::ExtractionError;

/// Errors that fail an invocation at the runtime boundary.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}
