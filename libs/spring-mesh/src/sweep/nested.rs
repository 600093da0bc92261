//! The nested ("spring of springs") sweep.
//!
//! Walks `total = r0 * r1 * ... * rn` steps. At each step the level chain
//! is evaluated at the current and the next angles; the difference is the
//! tangent along which a tube ring (or a cap stamp) is placed.

use std::f64::consts::TAU;

use config::constants::{MAX_LEVEL_DEPTH, MAX_TRIANGLES, MIN_SPLITS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::levels::{distribute_levels, level_frames, LevelFrame, LevelSpec};
use super::schedule::LevelSchedule;
use crate::caps::{create_cone, create_cube, create_sphere, sphere_vertex_count};
use crate::config::GenerationConfig;
use crate::error::{require_count, require_finite, require_positive, MeshError, MeshResult};
use crate::math::{compose_transform, normalize, RigidTransform, TransformChain};
use crate::mesh::Mesh;
use crate::ring::build_point_ring;

/// Shape placed at every sweep step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stamp {
    /// Tube ring; the rings are stitched into a closed shell.
    #[default]
    Ring,
    /// Cube of edge `size` aligned with the tangent.
    Cube {
        /// Edge length.
        size: f64,
    },
    /// Cone pointing along the tangent, height `tube_radius * ratio`.
    Cone {
        /// Height-to-radius ratio.
        ratio: f64,
    },
    /// Sphere of the tube radius.
    Sphere,
}

impl Stamp {
    /// Vertices one step adds.
    fn vertices_per_step(&self, splits: u32) -> usize {
        match self {
            Stamp::Ring => splits as usize,
            Stamp::Cube { .. } => 8,
            Stamp::Cone { .. } => splits as usize + 2,
            Stamp::Sphere => sphere_vertex_count(splits),
        }
    }
}

/// Builder for a nested sweep.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use spring_mesh::sweep::{LevelSpec, NestedSweep};
///
/// let mesh = NestedSweep::new(DVec3::ZERO, 2.0, 8)
///     .with_levels(vec![LevelSpec::new(10.0, 4), LevelSpec::new(50.0, 6)])
///     .build()
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 24 * 8);
/// assert_eq!(mesh.triangle_count(), 24 * 8 * 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSweep {
    center: DVec3,
    tube_radius: f64,
    splits: u32,
    levels: Vec<LevelSpec>,
    stamp: Stamp,
    config: GenerationConfig,
}

/// Position and direction of travel at one step.
#[derive(Debug, Clone, Copy)]
struct StepSample {
    start: DVec3,
    tangent: DVec3,
}

impl NestedSweep {
    /// Creates a sweep with no levels (a sphere) around `center`.
    pub fn new(center: DVec3, tube_radius: f64, splits: u32) -> Self {
        Self {
            center,
            tube_radius,
            splits,
            levels: Vec::new(),
            stamp: Stamp::Ring,
            config: GenerationConfig::default(),
        }
    }

    /// Sets the levels, innermost first.
    #[must_use]
    pub fn with_levels(mut self, levels: Vec<LevelSpec>) -> Self {
        self.levels = levels;
        self
    }

    /// Appends one outer level.
    #[must_use]
    pub fn with_level(mut self, radius: f64, ring_count: u32) -> Self {
        self.levels.push(LevelSpec::new(radius, ring_count));
        self
    }

    /// Places `stamp` at every step instead of a tube ring.
    #[must_use]
    pub fn with_stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = stamp;
        self
    }

    /// Overrides the generation settings.
    #[must_use]
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Levels, innermost first.
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Generates the mesh.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a non-positive tube radius, fewer than 3
    ///   splits, an invalid level or stamp, or a non-finite center
    /// - `TooManyVertices` / `TooManyTriangles` past the configured limits
    pub fn build(&self) -> MeshResult<Mesh> {
        require_positive("tube radius", self.tube_radius)?;
        require_count("splits", self.splits, MIN_SPLITS)?;
        require_finite("center", self.center)?;
        for level in &self.levels {
            level.validate()?;
        }
        match self.stamp {
            Stamp::Cube { size } => require_positive("cube size", size)?,
            Stamp::Cone { ratio } => require_positive("cone ratio", ratio)?,
            Stamp::Ring | Stamp::Sphere => {}
        }

        if self.levels.is_empty() {
            debug!(radius = self.tube_radius, "no levels, emitting sphere");
            return create_sphere(self.center, self.tube_radius, self.splits);
        }

        let ring_counts: Vec<u32> = self.levels.iter().map(|l| l.ring_count).collect();
        let schedule = LevelSchedule::new(&ring_counts, TAU)?;
        let total = schedule.total_steps();

        let expected_vertices = total
            .checked_mul(self.stamp.vertices_per_step(self.splits))
            .unwrap_or(usize::MAX);
        if expected_vertices > self.config.max_vertices {
            return Err(MeshError::TooManyVertices {
                count: expected_vertices,
                max: self.config.max_vertices,
            });
        }

        if self.levels.len() > MAX_LEVEL_DEPTH {
            warn!(
                depth = self.levels.len(),
                max = MAX_LEVEL_DEPTH,
                "axis cycle repeats, expect self-intersection"
            );
        }
        debug!(
            levels = self.levels.len(),
            total_steps = total,
            splits = self.splits,
            stamp = ?self.stamp,
            "starting nested sweep"
        );

        let frames = level_frames(&self.levels);
        let mesh = match self.stamp {
            Stamp::Ring => self.build_tube(&frames, &schedule)?,
            stamp => self.build_stamped(stamp, &frames, &schedule)?,
        };
        mesh.check_limits(self.config.max_vertices, MAX_TRIANGLES)?;

        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "nested sweep complete"
        );
        Ok(mesh)
    }

    fn build_tube(&self, frames: &[LevelFrame], schedule: &LevelSchedule) -> MeshResult<Mesh> {
        let total = schedule.total_steps();
        if total < 2 {
            return self.build_disc(self.sample(frames, schedule, 0)?);
        }
        let rings = self.map_steps(total, |step| {
            let sample = self.sample(frames, schedule, step)?;
            build_point_ring(sample.start, sample.tangent, self.tube_radius, self.splits)
        })?;

        let ring_count = u32::try_from(total).map_err(|_| {
            MeshError::invalid_parameter(format!("{total} rings overflow u32 indices"))
        })?;
        let vertex_count = total * self.splits as usize;
        let mut mesh = Mesh::with_capacity(vertex_count, vertex_count * 2);
        for ring in rings {
            mesh.extend_vertices(ring);
        }
        mesh.stitch_rings(0, ring_count, self.splits, true, false)?;
        Ok(mesh)
    }

    /// A single step has no neighbour to stitch to, so its ring is closed
    /// as a two-sided disc. Each side gets its own copy of the ring.
    fn build_disc(&self, sample: StepSample) -> MeshResult<Mesh> {
        let ring = build_point_ring(sample.start, sample.tangent, self.tube_radius, self.splits)?;
        let splits = self.splits;
        let mut mesh = Mesh::with_capacity(2 * (ring.len() + 1), 2 * ring.len());

        // Rings run clockwise seen from the tangent tip.
        let front = mesh.extend_vertices(ring.iter().copied());
        let front_center = mesh.add_vertex(sample.start);
        let back = mesh.extend_vertices(ring);
        let back_center = mesh.add_vertex(sample.start);
        for split in 0..splits {
            let next = (split + 1) % splits;
            mesh.add_triangle(front_center, front + next, front + split);
            mesh.add_triangle(back_center, back + split, back + next);
        }

        debug!(splits, "single-step sweep closed as a disc");
        Ok(mesh)
    }

    fn build_stamped(
        &self,
        stamp: Stamp,
        frames: &[LevelFrame],
        schedule: &LevelSchedule,
    ) -> MeshResult<Mesh> {
        let pieces = self.map_steps(schedule.total_steps(), |step| {
            let sample = self.sample(frames, schedule, step)?;
            match stamp {
                Stamp::Cube { size } => create_cube(sample.start, sample.tangent, size, size),
                Stamp::Cone { ratio } => create_cone(
                    sample.start,
                    sample.tangent,
                    self.tube_radius,
                    ratio,
                    self.splits,
                ),
                Stamp::Sphere => create_sphere(sample.start, self.tube_radius, self.splits),
                Stamp::Ring => Err(MeshError::invalid_parameter(
                    "ring stamps are stitched, not merged",
                )),
            }
        })?;

        let mut mesh = Mesh::new();
        for piece in &pieces {
            mesh.merge(piece);
        }
        Ok(mesh)
    }

    /// Evaluates the level chain at `step` and `step + 1`.
    fn sample(
        &self,
        frames: &[LevelFrame],
        schedule: &LevelSchedule,
        step: usize,
    ) -> MeshResult<StepSample> {
        let start = self.position(frames, &schedule.angles_at(step))?;
        let end = self.position(frames, &schedule.angles_at(step + 1))?;

        let travel = end - start;
        let tangent = if travel.length() > self.config.tolerance {
            normalize(travel)
        } else {
            Err(MeshError::degenerate(format!(
                "tangent {travel:?} at step {step} is shorter than {}",
                self.config.tolerance
            )))
        };
        let tangent = match tangent {
            Ok(tangent) => tangent,
            Err(err) if err.is_recoverable() => {
                warn!(step, ?start, "degenerate tangent, falling back to +Z");
                DVec3::Z
            }
            Err(err) => return Err(err),
        };
        Ok(StepSample { start, tangent })
    }

    /// Point reached by the chain translate(r0), rotate(a0), ...,
    /// translate(center) applied to the origin.
    fn position(&self, frames: &[LevelFrame], angles: &[f64]) -> MeshResult<DVec3> {
        let mut chain = TransformChain::with_capacity(frames.len() * 2 + 1);
        for (frame, &angle) in frames.iter().zip(angles) {
            chain.push(RigidTransform::translation(frame.offset));
            chain.push(RigidTransform::rotation(frame.axis, angle)?);
        }
        chain.push(RigidTransform::translation(self.center));
        Ok(compose_transform(&chain, DVec3::ZERO))
    }

    /// Maps every step in order, in parallel for large sweeps.
    fn map_steps<T, F>(&self, total: usize, f: F) -> MeshResult<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> MeshResult<T> + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        if total >= self.config.parallel_threshold {
            use rayon::prelude::*;
            return (0..total).into_par_iter().map(f).collect();
        }
        (0..total).map(f).collect()
    }
}

/// Builds a closed nested sweep tube around `center`.
///
/// `levels` are ordered innermost (fastest) first. An empty list yields a
/// sphere of `tube_radius`.
pub fn create_nested_sweep(
    center: DVec3,
    tube_radius: f64,
    splits: u32,
    levels: &[LevelSpec],
) -> MeshResult<Mesh> {
    NestedSweep::new(center, tube_radius, splits)
        .with_levels(levels.to_vec())
        .build()
}

/// Builds a nested sweep whose levels are derived from one outer radius and
/// ring budget (see [`distribute_levels`]). Depths past 4 are clamped.
pub fn create_depth_sweep(
    center: DVec3,
    tube_radius: f64,
    splits: u32,
    outer_radius: f64,
    ring_budget: u32,
    depth: usize,
) -> MeshResult<Mesh> {
    if depth > MAX_LEVEL_DEPTH {
        warn!(depth, max = MAX_LEVEL_DEPTH, "clamping sweep depth");
    }
    let levels = distribute_levels(outer_radius, ring_budget, depth)?;
    create_nested_sweep(center, tube_radius, splits, &levels)
}
