//! Diet Planner Shared Library
//!
//! This crate contains the domain types, derived health metrics, validation
//! helpers, and error taxonomy shared by the risk/scoring engine and any
//! front-end glue built on top of it.

pub mod errors;
pub mod health_metrics;
pub mod profile;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use profile::{ProfileFeatures, UserProfile};
