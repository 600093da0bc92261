//! # Configuration Constants
//!
//! Centralized constants for the spring mesh generator. Tessellation
//! defaults, nesting limits and safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default ring/split counts
//! - **Nesting**: Level depth and ring budget rules
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by the generator.
///
/// Vectors shorter than this are treated as degenerate and are never
/// normalized.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of points in one tube ring.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SPLITS;
/// assert!(DEFAULT_SPLITS >= 12);
/// ```
pub const DEFAULT_SPLITS: u32 = 32;

/// Minimum number of points in a ring. Fewer cannot enclose an area.
pub const MIN_SPLITS: u32 = 3;

/// Upper bound applied by [`compute_splits`].
pub const MAX_SPLITS: u32 = 720;

/// Default minimum angle (degrees) between two ring points.
pub const DEFAULT_SPLIT_ANGLE: f64 = 12.0;

/// Default minimum chord length between two ring points.
pub const DEFAULT_SPLIT_SIZE: f64 = 2.0;

/// One full revolution expressed in degrees.
///
/// # Examples
/// ```
/// use config::constants::FULL_REVOLUTION_DEGREES;
/// assert_eq!(FULL_REVOLUTION_DEGREES / 4.0, 90.0);
/// ```
pub const FULL_REVOLUTION_DEGREES: f64 = 360.0;

// =============================================================================
// NESTING CONSTANTS
// =============================================================================

/// Deepest level list the depth-clamped sweep builds.
///
/// The four-axis cycle `{z, x, y, z}` has no adjacent collinear pair only up
/// to this depth; deeper lists fold modulo the cycle and self-intersect.
///
/// # Examples
/// ```
/// use config::constants::MAX_LEVEL_DEPTH;
/// let requested = 7usize;
/// assert_eq!(requested.min(MAX_LEVEL_DEPTH), 4);
/// ```
pub const MAX_LEVEL_DEPTH: usize = 4;

/// Smallest ring count handed to any level by the ring-budget distribution.
pub const MIN_DISTRIBUTED_RINGS: u32 = 3;

/// Default apex height of a cone stamp as a multiple of its base radius.
pub const DEFAULT_CONE_RATIO: f64 = 2.0;

/// Step count from which the nested sweep samples rings in parallel.
pub const PARALLEL_STEP_THRESHOLD: usize = 4096;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme ring budgets.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// let vertex_count = 360 * 360;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 20_000_000;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into the generator.
    pub tolerance: f64,
    /// Default split count for rings when a caller does not supply one.
    pub default_splits: u32,
    /// Largest vertex count a single generation call may produce.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 1_000).expect("valid config");
    /// assert_eq!(cfg.default_splits, 24);
    /// ```
    pub fn new(tolerance: f64, default_splits: u32, max_vertices: usize) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_splits < MIN_SPLITS {
            return Err(ConfigError::InvalidSplits(default_splits));
        }
        if max_vertices == 0 {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            tolerance,
            default_splits,
            max_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_splits: DEFAULT_SPLITS,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the split count is too small to form a ring.
    InvalidSplits(u32),
    /// Raised when the vertex limit is zero.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSplits(value) => {
                write!(f, "default_splits must be >= {MIN_SPLITS}: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be non-zero: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes a split count for a ring of the given radius.
///
/// Takes the finer of the angle-based and chord-based resolutions, then
/// clamps to `MIN_SPLITS..=MAX_SPLITS`.
///
/// # Examples
///
/// ```rust
/// use config::constants::{compute_splits, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE, MIN_SPLITS};
///
/// let splits = compute_splits(10.0, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE);
/// assert!(splits >= MIN_SPLITS);
/// ```
pub fn compute_splits(radius: f64, min_angle: f64, min_size: f64) -> u32 {
    let from_angle = FULL_REVOLUTION_DEGREES / min_angle;
    let from_size = (std::f64::consts::TAU * radius) / min_size;
    let splits = from_angle.min(from_size).ceil();
    if !splits.is_finite() || splits <= 0.0 {
        return MIN_SPLITS;
    }
    (splits as u32).clamp(MIN_SPLITS, MAX_SPLITS)
}

/// Checks if a f64 value is approximately zero within EPSILON_TOLERANCE.
///
/// # Examples
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}
