//! Domain layer containing the extraction types and rules.
//!
//! # Module Organization
//!
//! - `extraction` - Inbound event model, field resolution, invocation mode
//!   detection and the extraction result value object

pub mod extraction;
