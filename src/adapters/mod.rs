//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `extraction` - Document extractor implementations
//! - `lambda` - Function runtime integration

pub mod extraction;
pub mod lambda;

pub use extraction::SimulatedExtractor;
