//! Extraction domain - inbound events, resolution rules and results.
//!
//! The extractor accepts two event shapes:
//! - workflow steps pass `filename` / `document` at the top level
//! - gateway requests carry them inside a JSON-encoded `body`
//!
//! Everything here is synchronous and free of I/O.

mod errors;
mod event;
mod invocation_mode;
mod resolved_document;
mod result;
mod truthiness;

pub use errors::ExtractionError;
pub use event::{InboundEvent, LazyBody};
pub use invocation_mode::InvocationMode;
pub use resolved_document::{ResolvedDocument, DEFAULT_FILENAME};
pub use result::ExtractionResult;
pub use truthiness::{as_text, is_truthy, truthy};
