//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentExtractor` - Produces an extraction result for a resolved document

mod document_extractor;

pub use document_extractor::DocumentExtractor;
