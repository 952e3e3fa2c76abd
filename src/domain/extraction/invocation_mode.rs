//! Detection of how the function was invoked.

use std::fmt;

use super::event::InboundEvent;
use super::truthiness::truthy;

/// Invocation context, which decides the response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Called through an HTTP gateway; the response is an HTTP envelope.
    Gateway,
    /// Called directly or as a workflow step; the response is the bare result.
    Workflow,
}

impl InvocationMode {
    /// Any truthy `requestContext`, `httpMethod` or `body` marks a gateway call.
    pub fn detect(event: &InboundEvent) -> Self {
        let gateway = truthy(event.request_context.as_ref()).is_some()
            || truthy(event.http_method.as_ref()).is_some()
            || truthy(event.body.as_ref()).is_some();

        if gateway {
            InvocationMode::Gateway
        } else {
            InvocationMode::Workflow
        }
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvocationMode::Gateway => "gateway",
            InvocationMode::Workflow => "workflow",
        };
        write!(f, "{}", s)
    }
}
