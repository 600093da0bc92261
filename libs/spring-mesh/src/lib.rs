//! # Spring Mesh
//!
//! Procedural triangle meshes for torus-derived solids: donuts, coiled
//! springs and nested "spring-of-springs" donuts.
//!
//! ## Architecture
//!
//! ```text
//! LevelSchedule (angle deltas)
//!     → TransformChain (swept point per step)
//!     → ring sampler / cap stamp (cross-section at the point)
//!     → index builder (stitched lattice)
//!     → Mesh (positions + triangles)
//! ```
//!
//! All geometry is f64; [`Mesh::vertices_f32`] and [`Mesh::indices_u32`]
//! produce the GPU buffers.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use spring_mesh::{create_nested_sweep, LevelSpec};
//!
//! let levels = [LevelSpec::new(10.0, 4), LevelSpec::new(50.0, 6)];
//! let mesh = create_nested_sweep(DVec3::ZERO, 2.0, 8, &levels).unwrap();
//! assert_eq!(mesh.vertex_count(), 24 * 8);
//! ```

pub mod caps;
pub mod config;
pub mod error;
pub mod indices;
pub mod math;
pub mod mesh;
pub mod presets;
pub mod primitives;
pub mod ring;
pub mod shape;
pub mod sweep;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use shape::{build_all, build_all_with, ShapeSpec};
pub use sweep::{create_depth_sweep, create_nested_sweep, LevelSpec, NestedSweep, Stamp};

/// Builds a named preset scene into one mesh.
///
/// # Errors
///
/// `InvalidParameter` for an unknown name (see [`presets::PRESET_NAMES`]),
/// or whatever the preset's builders report.
///
/// # Example
///
/// ```rust
/// let mesh = spring_mesh::render_preset("axis_indicators").unwrap();
/// assert_eq!(mesh.triangle_count(), 36);
/// ```
pub fn render_preset(name: &str) -> MeshResult<Mesh> {
    let shapes = presets::by_name(name).ok_or_else(|| {
        MeshError::invalid_parameter(format!(
            "unknown preset '{name}', expected one of {:?}",
            presets::PRESET_NAMES
        ))
    })?;
    tracing::debug!(name, shapes = shapes.len(), "rendering preset");
    build_all(&shapes)
}
