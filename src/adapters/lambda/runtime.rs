//! Runtime wiring - connects the handler to the Lambda runtime loop.

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, warn};

use crate::application::{ExtractDocumentCommand, ExtractDocumentHandler};

use super::dto::ExtractionResponse;
use super::error::InvocationError;

/// Runs a single invocation.
///
/// Synchronous so it can be exercised without a runtime. The request id is
/// attached to every log line emitted while handling the event.
pub fn invoke(
    handler: &ExtractDocumentHandler,
    payload: Value,
    request_id: &str,
) -> Result<ExtractionResponse, InvocationError> {
    let span = info_span!("invocation", request_id = %request_id);
    let _enter = span.enter();

    let result = handler
        .handle(ExtractDocumentCommand { event: payload })
        .inspect_err(|e| warn!(error = %e, "Invocation failed"))?;

    Ok(ExtractionResponse::from_result(result)?)
}

/// Serves invocations until the runtime shuts the process down.
///
/// # Errors
///
/// Returns the runtime's error if the invocation loop cannot continue.
pub async fn run(handler: Arc<ExtractDocumentHandler>) -> Result<(), lambda_runtime::Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move {
            let LambdaEvent { payload, context } = event;
            Ok::<_, lambda_runtime::Error>(invoke(&handler, payload, &context.request_id)?)
        }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::extraction::SimulatedExtractor;
    use crate::domain::extraction::ExtractionError;
    use serde_json::json;

    fn handler() -> ExtractDocumentHandler {
        ExtractDocumentHandler::new(Arc::new(SimulatedExtractor::default()))
    }

    #[test]
    fn invoke_returns_gateway_envelope_for_gateway_events() {
        let response = invoke(&handler(), json!({ "requestContext": {} }), "req-1").unwrap();
        assert!(matches!(response, ExtractionResponse::Gateway(_)));
    }

    #[test]
    fn invoke_returns_bare_result_for_workflow_events() {
        let response = invoke(&handler(), json!({ "filename": "a.pdf" }), "req-2").unwrap();
        assert!(matches!(response, ExtractionResponse::Workflow(_)));
    }

    #[test]
    fn invoke_propagates_extraction_errors() {
        let result = invoke(&handler(), json!({ "body": "not valid json" }), "req-3");
        assert!(matches!(
            result,
            Err(InvocationError::Extraction(ExtractionError::MalformedBody { .. }))
        ));
    }
}
