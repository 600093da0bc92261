//! Per-level angular steps for the flat sweep counter.
//!
//! Level 0 advances fastest: it completes a revolution every `r0` steps,
//! level `i` every `r0 * r1 * ... * ri` steps. With constant deltas a single
//! counter from 0 to the product of all ring counts visits every level-angle
//! combination in nested-loop order without carry logic.

use crate::error::{require_count, require_positive, MeshError, MeshResult};

/// Computes the per-level angle step.
///
/// `delta[0] = revolution / max(r0, 1)` and
/// `delta[i] = revolution / (max(r0, 1) * ... * max(ri, 1))`.
///
/// # Examples
/// ```
/// use spring_mesh::sweep::build_deltas;
/// assert_eq!(build_deltas(&[4, 6], 360.0), vec![90.0, 15.0]);
/// ```
pub fn build_deltas(ring_counts: &[u32], revolution: f64) -> Vec<f64> {
    let mut product = 1.0;
    ring_counts
        .iter()
        .map(|&count| {
            product *= f64::from(count.max(1));
            revolution / product
        })
        .collect()
}

/// Validated ring-count hierarchy with its deltas and step count.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSchedule {
    deltas: Vec<f64>,
    /// Steps per full revolution of each level (cumulative products).
    periods: Vec<usize>,
    total_steps: usize,
    revolution: f64,
}

impl LevelSchedule {
    /// Builds the schedule for `ring_counts`, innermost level first.
    ///
    /// # Errors
    /// `InvalidParameter` when a count is zero, `revolution` is not
    /// positive, or the product of counts does not fit in `usize`.
    pub fn new(ring_counts: &[u32], revolution: f64) -> MeshResult<Self> {
        require_positive("revolution", revolution)?;

        let mut periods = Vec::with_capacity(ring_counts.len());
        let mut total: usize = 1;
        for &count in ring_counts {
            require_count("ring count", count, 1)?;
            total = total.checked_mul(count as usize).ok_or_else(|| {
                MeshError::invalid_parameter(format!(
                    "ring counts {ring_counts:?} overflow the step counter"
                ))
            })?;
            periods.push(total);
        }

        Ok(Self {
            deltas: build_deltas(ring_counts, revolution),
            periods,
            total_steps: total,
            revolution,
        })
    }

    /// Angle step of every level.
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.deltas.len()
    }

    /// Product of all ring counts.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Angle of one full revolution.
    pub fn revolution(&self) -> f64 {
        self.revolution
    }

    /// Level angles at `step`, each reduced into `[0, revolution)`.
    ///
    /// Equal to `step * delta[i]` modulo the revolution; reducing the step by
    /// the level period first keeps the angles exact for large counters, so
    /// `angles_at(total_steps())` is exactly `angles_at(0)`.
    ///
    /// # Examples
    /// ```
    /// use spring_mesh::sweep::LevelSchedule;
    /// let schedule = LevelSchedule::new(&[4, 6], 360.0).unwrap();
    /// assert_eq!(schedule.angles_at(5), vec![90.0, 75.0]);
    /// assert_eq!(schedule.angles_at(24), schedule.angles_at(0));
    /// ```
    pub fn angles_at(&self, step: usize) -> Vec<f64> {
        self.deltas
            .iter()
            .zip(&self.periods)
            .map(|(delta, period)| (step % period) as f64 * delta)
            .collect()
    }

    /// Returns `angles` advanced by one step of every level.
    pub fn increment_angles(&self, angles: &[f64]) -> Vec<f64> {
        angles
            .iter()
            .zip(&self.deltas)
            .map(|(angle, delta)| angle + delta)
            .collect()
    }
}
