//! # Sweeps
//!
//! Level scheduling and the nested sweep generator.

mod levels;
mod nested;
mod schedule;

pub use levels::{distribute_levels, level_axes, LevelSpec};
pub use nested::{create_depth_sweep, create_nested_sweep, NestedSweep, Stamp};
pub use schedule::{build_deltas, LevelSchedule};
