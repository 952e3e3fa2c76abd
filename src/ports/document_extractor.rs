//! Document Extractor Port - Turns a resolved document into a result.
//!
//! The application layer depends on this trait, while adapters (like
//! `SimulatedExtractor`) provide the implementation. A real text extraction
//! engine would plug in here without touching event handling.

use crate::domain::extraction::{ExtractionResult, ResolvedDocument};

/// Port for producing extraction results.
///
/// # Contract
///
/// Implementations must:
/// - Never block on I/O; the handler calls this synchronously
/// - Echo the resolved filename back in the result
/// - Be safe to share across concurrent invocations
pub trait DocumentExtractor: Send + Sync {
    /// Extracts content from a resolved document.
    fn extract(&self, document: &ResolvedDocument) -> ExtractionResult;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
