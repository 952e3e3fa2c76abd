//! Extraction handlers.

mod extract_document;

pub use extract_document::{
    ExtractDocumentCommand, ExtractDocumentHandler, ExtractDocumentResult,
};
