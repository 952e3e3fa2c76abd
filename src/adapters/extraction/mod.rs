//! Extraction adapters - Implementations of the `DocumentExtractor` port.

mod simulated;

pub use simulated::{SimulatedExtractor, FALLBACK_DOCUMENT_CONTENT};
