//! Lambda entry point for the document extractor.

use std::sync::Arc;

use document_extractor::adapters::{lambda, SimulatedExtractor};
use document_extractor::application::ExtractDocumentHandler;
use document_extractor::config::AppConfig;
use document_extractor::telemetry;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = AppConfig::load_validated()?;

    telemetry::init(&config.logging)?;

    let extractor = Arc::new(SimulatedExtractor::new(
        config.extraction.fallback_content.clone(),
    ));
    let handler = ExtractDocumentHandler::new(extractor)
        .with_unknown_filename(config.extraction.unknown_filename.clone());

    tracing::info!(production = config.is_production(), "Document extractor ready");

    lambda::run(Arc::new(handler)).await
}
