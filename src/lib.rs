//! Document Extractor - Simulated extraction step for the document pipeline
//!
//! Accepts either an API Gateway request or a workflow step payload, resolves
//! a filename and document text, and returns a canned extraction result in
//! the shape the caller expects.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
