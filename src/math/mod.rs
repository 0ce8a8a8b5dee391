//! Mathematical utilities for the scoring pipeline

/// Clamped linear rescaling and min-max normalization
pub mod normalize;
