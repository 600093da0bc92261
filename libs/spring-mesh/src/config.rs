//! Generator-level configuration building on the shared `config` crate.
//!
//! Keeps the sweep builders decoupled from literal constants.

use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_SPLITS, EPSILON_TOLERANCE, MAX_VERTICES,
    PARALLEL_STEP_THRESHOLD,
};

/// Generation settings threaded through the nested sweep.
///
/// # Examples
/// ```
/// use spring_mesh::config::GenerationConfig;
/// let cfg = GenerationConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Vectors shorter than this are treated as degenerate.
    pub tolerance: f64,
    /// Split count used when a shape does not name one.
    pub default_splits: u32,
    /// Largest vertex count one call may produce.
    pub max_vertices: usize,
    /// Step count from which per-step sampling runs in parallel.
    pub parallel_threshold: usize,
}

impl GenerationConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use spring_mesh::config::GenerationConfig;
    /// let cfg = GenerationConfig::new(1.0e-8, 48, 1_000_000).unwrap();
    /// assert_eq!(cfg.default_splits, 48);
    /// ```
    pub fn new(
        tolerance: f64,
        default_splits: u32,
        max_vertices: usize,
    ) -> Result<Self, GenerationConfigError> {
        GlobalConfig::new(tolerance, default_splits, max_vertices)
            .map(|cfg| Self {
                tolerance: cfg.tolerance,
                default_splits: cfg.default_splits,
                max_vertices: cfg.max_vertices,
                parallel_threshold: PARALLEL_STEP_THRESHOLD,
            })
            .map_err(GenerationConfigError)
    }

    /// Overrides the parallel sampling threshold. `usize::MAX` forces the
    /// sequential path.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_splits: DEFAULT_SPLITS,
            max_vertices: MAX_VERTICES,
            parallel_threshold: PARALLEL_STEP_THRESHOLD,
        }
    }
}

/// Error wrapper for invalid generation configuration.
#[derive(Debug, PartialEq)]
pub struct GenerationConfigError(ConfigError);

impl std::fmt::Display for GenerationConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for GenerationConfigError {}
