//! # Donut Primitive
//!
//! A torus lying in the XY plane: `rings` cross-sections around the outer
//! circle, each with `splits` points.
//!
//! Each cross-section is the circle the ring sampler gives for the outer
//! circle's tangent, written in closed form so the first point of every ring
//! sits on the outside of the torus.

use config::constants::MIN_SPLITS;
use glam::DVec3;
use tracing::debug;

use super::{step_angle, torus_point};
use crate::error::{require_count, require_finite, require_non_negative, require_positive, MeshResult};
use crate::mesh::Mesh;

/// Creates a closed torus mesh.
///
/// # Arguments
///
/// * `center` - Center of the outer circle
/// * `major_radius` - Radius of the outer circle (`R`)
/// * `tube_radius` - Radius of the cross-section (`r`)
/// * `rings` - Cross-sections around the outer circle
/// * `splits` - Points per cross-section
///
/// # Example
///
/// ```rust
/// use spring_mesh::primitives::create_donut;
/// use glam::DVec3;
///
/// let mesh = create_donut(DVec3::ZERO, 50.0, 10.0, 360, 360).unwrap();
/// assert_eq!(mesh.vertex_count(), 129_600);
/// assert_eq!(mesh.vertex(0), DVec3::new(60.0, 0.0, 0.0));
/// ```
pub fn create_donut(
    center: DVec3,
    major_radius: f64,
    tube_radius: f64,
    rings: u32,
    splits: u32,
) -> MeshResult<Mesh> {
    require_non_negative("major radius", major_radius)?;
    require_positive("tube radius", tube_radius)?;
    require_count("rings", rings, MIN_SPLITS)?;
    require_count("splits", splits, MIN_SPLITS)?;
    require_finite("donut center", center)?;

    let vertex_count = rings as usize * splits as usize;
    let mut mesh = Mesh::with_capacity(vertex_count, vertex_count * 2);

    for ring in 0..rings {
        let theta = step_angle(ring, rings);
        mesh.extend_vertices((0..splits).map(|split| {
            center + torus_point(major_radius, tube_radius, theta, step_angle(split, splits), 0.0)
        }));
    }
    mesh.stitch_rings(0, rings, splits, true, false)?;

    debug!(
        major_radius,
        tube_radius,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built donut"
    );
    Ok(mesh)
}
