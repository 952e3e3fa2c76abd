//! Response DTOs returned to the function runtime.
//!
//! These types decouple the wire shapes from domain types.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ExtractDocumentResult;
use crate::domain::extraction::{ExtractionResult, InvocationMode};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Bare result returned to workflow steps and direct invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub extraction_result: ExtractionResult,
}

/// HTTP envelope returned to the gateway.
///
/// `body` holds a serialized [`WorkflowResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Wraps a payload in a 200 envelope.
    pub fn ok(payload: &WorkflowResponse) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: StatusCode::OK.as_u16(),
            body: serde_json::to_string(payload)?,
        })
    }
}

/// Response in whichever shape the invocation mode calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResponse {
    Gateway(GatewayResponse),
    Workflow(WorkflowResponse),
}

impl ExtractionResponse {
    pub fn from_result(result: ExtractDocumentResult) -> Result<Self, serde_json::Error> {
        let payload = WorkflowResponse {
            extraction_result: result.extraction,
        };
        match result.mode {
            InvocationMode::Gateway => {
                Ok(ExtractionResponse::Gateway(GatewayResponse::ok(&payload)?))
            }
            InvocationMode::Workflow => Ok(ExtractionResponse::Workflow(payload)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(mode: InvocationMode) -> ExtractDocumentResult {
        ExtractDocumentResult {
            mode,
            extraction: ExtractionResult::succeeded("a.pdf", "hello"),
        }
    }

    #[test]
    fn workflow_response_is_bare_object() {
        let response = ExtractionResponse::from_result(result(InvocationMode::Workflow)).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "extractionResult": {
                    "success": true,
                    "filename": "a.pdf",
                    "documentContent": "hello"
                }
            })
        );
    }

    #[test]
    fn gateway_response_wraps_serialized_body() {
        let response = ExtractionResponse::from_result(result(InvocationMode::Gateway)).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "body": r#"{"extractionResult":{"success":true,"filename":"a.pdf","documentContent":"hello"}}"#
            })
        );
    }

    #[test]
    fn gateway_body_decodes_back_to_workflow_shape() {
        let ExtractionResponse::Gateway(gateway) =
            ExtractionResponse::from_result(result(InvocationMode::Gateway)).unwrap()
        else {
            panic!("expected gateway response");
        };
        let decoded: WorkflowResponse = serde_json::from_str(&gateway.body).unwrap();
        assert_eq!(
            decoded.extraction_result,
            ExtractionResult::succeeded("a.pdf", "hello")
        );
    }
}
