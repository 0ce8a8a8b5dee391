//! Analysis stages feeding the scoring pipeline

/// Local outlier factor filtering over distance sets
pub mod outliers;
/// Two-level grayscale reduction (the `reduce_colors` capability)
pub mod reduction;
/// Magnitude spectrum construction via 2-D FFT
pub mod spectrum;
