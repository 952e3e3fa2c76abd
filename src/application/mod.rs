//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are synchronous; the lambda adapter owns the async boundary.

pub mod handlers;

pub use handlers::{ExtractDocumentCommand, ExtractDocumentHandler, ExtractDocumentResult};
