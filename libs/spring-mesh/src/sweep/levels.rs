//! Level specifications and the per-level rotation frames.

use config::constants::{approx_zero, MAX_LEVEL_DEPTH, MIN_DISTRIBUTED_RINGS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{require_count, require_non_negative, require_positive, MeshResult};
use crate::math::any_orthogonal;

/// Axis cycle for shallow sweeps.
const SHALLOW_AXES: [DVec3; 3] = [DVec3::Y, DVec3::Z, DVec3::X];

/// Axis cycle for four or more levels.
const DEEP_AXES: [DVec3; 4] = [DVec3::Z, DVec3::X, DVec3::Y, DVec3::Z];

/// One nesting level: the offset of its translate step and how many
/// angular steps it takes per revolution of the level inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Translation distance of this level.
    pub radius: f64,
    /// Steps per revolution; at least 1.
    pub ring_count: u32,
}

impl LevelSpec {
    /// Creates a level.
    pub const fn new(radius: f64, ring_count: u32) -> Self {
        Self { radius, ring_count }
    }

    /// Checks `radius >= 0` and `ring_count >= 1`.
    pub fn validate(&self) -> MeshResult<()> {
        require_non_negative("level radius", self.radius)?;
        require_count("level ring count", self.ring_count, 1)
    }
}

/// Rotation axis and translation offset of one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LevelFrame {
    pub axis: DVec3,
    pub offset: DVec3,
}

/// Rotation axes for `count` levels, innermost first.
///
/// Up to three levels cycle `{y, z, x}`; deeper sweeps cycle
/// `{z, x, y, z}` so neighbouring levels never share an axis within one
/// cycle. Past four levels the pattern repeats and self-intersection
/// becomes likely.
pub fn level_axes(count: usize) -> Vec<DVec3> {
    let cycle: &[DVec3] = if count <= SHALLOW_AXES.len() {
        &SHALLOW_AXES
    } else {
        &DEEP_AXES
    };
    (0..count).map(|i| cycle[i % cycle.len()]).collect()
}

/// Builds the frame of every level.
///
/// Level `i > 0` translates along `axis[i-1] × axis[i]`, which keeps the
/// circle traced by the inner levels perpendicular to this level's path.
/// Level 0 reuses the direction of level 1. Collinear neighbours fall back
/// to any direction orthogonal to the axis.
pub(crate) fn level_frames(levels: &[LevelSpec]) -> Vec<LevelFrame> {
    let axes = level_axes(levels.len());

    let mut directions: Vec<DVec3> = (0..axes.len())
        .map(|i| match i {
            0 => DVec3::X,
            _ => {
                let direction = axes[i - 1].cross(axes[i]);
                if approx_zero(direction.length()) {
                    any_orthogonal(axes[i])
                } else {
                    direction
                }
            }
        })
        .collect();
    if directions.len() > 1 {
        directions[0] = directions[1];
    }

    levels
        .iter()
        .zip(axes.iter().zip(&directions))
        .map(|(level, (&axis, &direction))| LevelFrame {
            axis,
            offset: direction * level.radius,
        })
        .collect()
}

/// Derives levels from one outer radius and a ring budget.
///
/// `depth` is clamped to `[0, 4]`. Level `i` (0 innermost) gets radius
/// `outer_radius^((i + 1) / depth)`; the level `k` steps inside the
/// outermost gets `max(ring_budget >> k, 3)` rings.
///
/// # Examples
/// ```
/// use spring_mesh::sweep::distribute_levels;
/// let levels = distribute_levels(256.0, 64, 2).unwrap();
/// assert_eq!(levels.len(), 2);
/// assert!((levels[0].radius - 16.0).abs() < 1e-9);
/// assert_eq!(levels[0].ring_count, 32);
/// assert_eq!(levels[1].ring_count, 64);
/// ```
pub fn distribute_levels(
    outer_radius: f64,
    ring_budget: u32,
    depth: usize,
) -> MeshResult<Vec<LevelSpec>> {
    require_positive("outer radius", outer_radius)?;
    require_count("ring budget", ring_budget, 1)?;

    let depth = depth.min(MAX_LEVEL_DEPTH);
    Ok((0..depth)
        .map(|i| {
            let exponent = (i + 1) as f64 / depth as f64;
            let from_outer = (depth - 1 - i) as u32;
            LevelSpec {
                radius: outer_radius.powf(exponent),
                ring_count: ring_budget
                    .checked_shr(from_outer)
                    .unwrap_or(0)
                    .max(MIN_DISTRIBUTED_RINGS),
            }
        })
        .collect())
}
