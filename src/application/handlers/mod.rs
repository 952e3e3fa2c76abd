//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod extraction;

pub use extraction::{ExtractDocumentCommand, ExtractDocumentHandler, ExtractDocumentResult};
