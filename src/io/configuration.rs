//! Scoring constants and runtime configuration defaults

// Calibrated against the upstream spectrum normalization; not user-tunable
/// Magnitude spectrum intensity above which a cell counts as high-energy
pub const INTENSITY_THRESHOLD: f64 = 0.7;

/// Maximum fraction of center distances that may be discarded as outliers
pub const CONTAMINATION: f64 = 0.4;

/// Neighborhood size for the local outlier factor computation
pub const LOF_NEIGHBORS: usize = 20;

/// Local outlier factor above which a point counts as anomalous
pub const OUTLIER_SCORE_CUTOFF: f64 = 1.5;

/// Number of largest surviving distances averaged into the radius estimate
pub const TOP_DISTANCES: usize = 20;

/// Raw densities below this bound score as fully pattern-like
pub const LOWER_DENSITY_BOUND: f64 = 0.05;

/// Raw densities above this bound score as not pattern-like at all
pub const UPPER_DENSITY_BOUND: f64 = 0.4;

// Default values for configurable parameters
/// Default score above which the report labels an image pattern-like
pub const DEFAULT_PATTERN_CUTOFF: f64 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Header row written at the top of CSV reports
pub const CSV_HEADER: &str = "file,score,pattern_like";
