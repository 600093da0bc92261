//! # Shape Specifications
//!
//! Serializable description of every shape the generator builds, and the
//! dispatch from a description to its builder. This is the surface a
//! renderer talks to.

use config::constants::{
    compute_splits, DEFAULT_CONE_RATIO, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE, MAX_TRIANGLES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::caps::{create_cone, create_cube, create_sphere};
use crate::config::GenerationConfig;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::primitives::coil::CoilConfig;
use crate::primitives::{create_coil, create_cylinder, create_donut};
use crate::sweep::{distribute_levels, LevelSpec, NestedSweep, Stamp};

/// A shape and its parameters.
///
/// Split counts left out are derived from the relevant radius, except for
/// sweeps, which use the configured default.
///
/// # Example
///
/// ```rust
/// use spring_mesh::ShapeSpec;
///
/// let json = r#"{"shape": "nested_sweep", "tube_radius": 2.0, "splits": 8,
///                "levels": [{"radius": 10.0, "ring_count": 4},
///                           {"radius": 50.0, "ring_count": 6}]}"#;
/// let spec: ShapeSpec = serde_json::from_str(json).unwrap();
/// let mesh = spec.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 24 * 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Torus in the XY plane.
    Donut {
        /// Center of the outer circle.
        #[serde(default)]
        center: DVec3,
        /// Outer radius.
        #[serde(default = "default_major_radius")]
        major_radius: f64,
        /// Tube radius.
        #[serde(default = "default_tube_radius")]
        tube_radius: f64,
        /// Cross-sections around the outer circle.
        #[serde(default)]
        rings: Option<u32>,
        /// Points per cross-section.
        #[serde(default)]
        splits: Option<u32>,
    },
    /// Capped helical spring along +Z.
    Coil {
        /// Center of the bottom turn.
        #[serde(default)]
        center: DVec3,
        /// Full turns.
        #[serde(default = "default_coils")]
        coils: u32,
        /// Helix radius.
        #[serde(default = "default_major_radius")]
        major_radius: f64,
        /// Wire radius.
        #[serde(default = "default_tube_radius")]
        tube_radius: f64,
        /// Rise per turn; defaults to `tube_radius * coils`.
        #[serde(default)]
        pitch: Option<f64>,
        /// Cross-sections per turn.
        #[serde(default)]
        segments: Option<u32>,
        /// Points per cross-section.
        #[serde(default)]
        splits: Option<u32>,
    },
    /// Double-sided open cylinder.
    Cylinder {
        /// Start of the axis.
        from: DVec3,
        /// End of the axis.
        to: DVec3,
        /// Ring radius.
        radius: f64,
        /// Rings along the axis.
        #[serde(default = "default_layers")]
        layers: u32,
        /// Points per ring.
        #[serde(default)]
        splits: Option<u32>,
    },
    /// Nested spring-of-springs tube, levels innermost first.
    NestedSweep {
        /// Recentring offset.
        #[serde(default)]
        center: DVec3,
        /// Tube cross-section radius.
        tube_radius: f64,
        /// Points per ring.
        #[serde(default)]
        splits: Option<u32>,
        /// Levels, innermost first.
        #[serde(default)]
        levels: Vec<LevelSpec>,
        /// Shape placed at every step.
        #[serde(default)]
        stamp: Stamp,
    },
    /// Nested sweep with levels derived from one radius and ring budget.
    DepthSweep {
        /// Recentring offset.
        #[serde(default)]
        center: DVec3,
        /// Tube cross-section radius.
        tube_radius: f64,
        /// Points per ring.
        #[serde(default)]
        splits: Option<u32>,
        /// Radius of the outermost level.
        outer_radius: f64,
        /// Ring count of the outermost level.
        ring_budget: u32,
        /// Number of levels, clamped to 4.
        depth: usize,
    },
    /// Box aligned with a direction; a rod when `length` exceeds `size`.
    Cube {
        /// Box center.
        #[serde(default)]
        anchor: DVec3,
        /// Long axis.
        direction: DVec3,
        /// Edge of the square cross-section.
        size: f64,
        /// Extent along `direction`; defaults to `size`.
        #[serde(default)]
        length: Option<f64>,
    },
    /// Cone with its base on `anchor`.
    Cone {
        /// Base center.
        #[serde(default)]
        anchor: DVec3,
        /// Apex direction.
        direction: DVec3,
        /// Base radius.
        radius: f64,
        /// Height-to-radius ratio.
        #[serde(default = "default_cone_ratio")]
        ratio: f64,
        /// Points on the base circle.
        #[serde(default)]
        splits: Option<u32>,
    },
    /// Latitude/longitude sphere.
    Sphere {
        /// Sphere center.
        #[serde(default)]
        center: DVec3,
        /// Sphere radius.
        radius: f64,
        /// Longitude segments.
        #[serde(default)]
        splits: Option<u32>,
    },
}

fn default_major_radius() -> f64 {
    50.0
}

fn default_tube_radius() -> f64 {
    10.0
}

fn default_coils() -> u32 {
    4
}

fn default_layers() -> u32 {
    2
}

fn default_cone_ratio() -> f64 {
    DEFAULT_CONE_RATIO
}

/// Explicit split count, or one derived from the radius it wraps.
fn splits_or(splits: Option<u32>, radius: f64) -> u32 {
    splits.unwrap_or_else(|| compute_splits(radius, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE))
}

impl ShapeSpec {
    /// Builds the mesh with default generation settings.
    pub fn build(&self) -> MeshResult<Mesh> {
        self.build_with(&GenerationConfig::default())
    }

    /// Builds the mesh with the given generation settings.
    ///
    /// Every shape is held to `config.max_vertices` and the triangle limit,
    /// not only the sweeps.
    pub fn build_with(&self, config: &GenerationConfig) -> MeshResult<Mesh> {
        let mesh = match *self {
            ShapeSpec::Donut {
                center,
                major_radius,
                tube_radius,
                rings,
                splits,
            } => create_donut(
                center,
                major_radius,
                tube_radius,
                splits_or(rings, major_radius + tube_radius),
                splits_or(splits, tube_radius),
            ),
            ShapeSpec::Coil {
                center,
                coils,
                major_radius,
                tube_radius,
                pitch,
                segments,
                splits,
            } => {
                let coil = CoilConfig::default()
                    .with_coils(coils)
                    .with_radii(major_radius, tube_radius)
                    .with_pitch(pitch.unwrap_or(tube_radius * f64::from(coils)))
                    .with_resolution(
                        splits_or(segments, major_radius + tube_radius),
                        splits_or(splits, tube_radius),
                    );
                create_coil(center, &coil)
            }
            ShapeSpec::Cylinder {
                from,
                to,
                radius,
                layers,
                splits,
            } => create_cylinder(from, to, radius, layers, splits_or(splits, radius)),
            ShapeSpec::NestedSweep {
                center,
                tube_radius,
                splits,
                ref levels,
                stamp,
            } => NestedSweep::new(center, tube_radius, splits.unwrap_or(config.default_splits))
                .with_levels(levels.clone())
                .with_stamp(stamp)
                .with_config(*config)
                .build(),
            ShapeSpec::DepthSweep {
                center,
                tube_radius,
                splits,
                outer_radius,
                ring_budget,
                depth,
            } => NestedSweep::new(center, tube_radius, splits.unwrap_or(config.default_splits))
                .with_levels(distribute_levels(outer_radius, ring_budget, depth)?)
                .with_config(*config)
                .build(),
            ShapeSpec::Cube {
                anchor,
                direction,
                size,
                length,
            } => create_cube(anchor, direction, size, length.unwrap_or(size)),
            ShapeSpec::Cone {
                anchor,
                direction,
                radius,
                ratio,
                splits,
            } => create_cone(anchor, direction, radius, ratio, splits_or(splits, radius)),
            ShapeSpec::Sphere {
                center,
                radius,
                splits,
            } => create_sphere(center, radius, splits_or(splits, radius)),
        }?;
        mesh.check_limits(config.max_vertices, MAX_TRIANGLES)?;
        Ok(mesh)
    }
}

/// Builds every shape and merges them into one mesh.
pub fn build_all(shapes: &[ShapeSpec]) -> MeshResult<Mesh> {
    build_all_with(shapes, &GenerationConfig::default())
}

/// Like [`build_all`], with the limits applied to the merged mesh as well as
/// to each shape.
pub fn build_all_with(shapes: &[ShapeSpec], config: &GenerationConfig) -> MeshResult<Mesh> {
    shapes.iter().try_fold(Mesh::new(), |mut mesh, shape| {
        mesh.merge(&shape.build_with(config)?);
        mesh.check_limits(config.max_vertices, MAX_TRIANGLES)?;
        Ok(mesh)
    })
}
