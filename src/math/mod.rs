//! Numeric helpers for gradient masks

/// Evenly spaced ramps, tapering and 8-bit quantization
pub mod ramp;
