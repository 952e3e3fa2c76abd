//! Lambda adapter - Response shaping and runtime integration.
//!
//! - `dto` - Gateway and workflow response shapes
//! - `runtime` - `service_fn` wiring and the per-invocation entry point

mod dto;
mod error;
mod runtime;

pub use dto::{ExtractionResponse, GatewayResponse, WorkflowResponse};
pub use error::InvocationError;
pub use runtime::{invoke, run};
