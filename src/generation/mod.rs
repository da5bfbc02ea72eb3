//! Batch generation of source images through an external generator
//!
//! The generator itself is out of scope; anything implementing
//! [`request::ImageGenerator`] can be driven by a [`plan::GenerationPlan`].

/// Batch configuration and TOML loading
pub mod plan;
/// Prompt templates expanded over named axes
pub mod prompts;
/// Generator contract and request parameters
pub mod request;
/// Plan execution with per-job failure isolation
pub mod runner;
