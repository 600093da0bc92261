//! # Ring Sampler
//!
//! Circular cross-sections perpendicular to a direction. The tube builders
//! stack these rings into a lattice; the cone and cylinder builders use them
//! as base circles.

use std::f64::consts::TAU;

use config::constants::MIN_SPLITS;
use glam::DVec3;

use crate::error::{require_count, require_finite, require_positive, MeshResult};
use crate::math::RigidTransform;
use crate::mesh::Mesh;

/// Samples `splits` points of a circle of `radius` around `anchor`, lying in
/// the plane perpendicular to `orientation`.
///
/// Points are evenly spaced and run clockwise when viewed from the tip of
/// `orientation`, so an unflipped stitch of rings stacked along
/// `orientation` faces outward. `orientation` need not be unit length.
///
/// # Errors
///
/// - `DegenerateVector` if `orientation` has zero length
/// - `InvalidParameter` if `radius <= 0` or `splits < 3`
///
/// # Example
///
/// ```rust
/// use spring_mesh::ring::build_point_ring;
/// use glam::DVec3;
///
/// let ring = build_point_ring(DVec3::ZERO, DVec3::X, 2.0, 8).unwrap();
/// assert_eq!(ring.len(), 8);
/// assert!(ring.iter().all(|p| p.x.abs() < 1e-12 && (p.length() - 2.0).abs() < 1e-12));
/// ```
pub fn build_point_ring(
    anchor: DVec3,
    orientation: DVec3,
    radius: f64,
    splits: u32,
) -> MeshResult<Vec<DVec3>> {
    require_positive("ring radius", radius)?;
    require_count("splits", splits, MIN_SPLITS)?;
    require_finite("ring anchor", anchor)?;

    let frame = RigidTransform::aligning_z(anchor, orientation)?;
    let step = TAU / splits as f64;

    Ok((0..splits)
        .map(|j| {
            let (sin, cos) = (j as f64 * step).sin_cos();
            frame.apply(DVec3::new(radius * cos, -radius * sin, 0.0))
        })
        .collect())
}

/// Appends a ring to `mesh` and returns the index of its first vertex.
pub fn push_point_ring(
    mesh: &mut Mesh,
    anchor: DVec3,
    orientation: DVec3,
    radius: f64,
    splits: u32,
) -> MeshResult<u32> {
    let ring = build_point_ring(anchor, orientation, radius, splits)?;
    Ok(mesh.extend_vertices(ring))
}
