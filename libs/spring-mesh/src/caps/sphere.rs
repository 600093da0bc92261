//! # Sphere Primitive
//!
//! Latitude/longitude sphere. The latitude bands are a regular open
//! lattice stitched by the index builder; the poles get their own fans.

use std::f64::consts::{PI, TAU};

use config::constants::MIN_SPLITS;
use glam::DVec3;

use crate::error::{require_count, require_finite, require_positive, MeshResult};
use crate::mesh::Mesh;

/// Number of latitude stacks for a sphere of `splits` longitude segments.
fn stack_count(splits: u32) -> u32 {
    (splits / 2).max(2)
}

/// Vertex count of [`create_sphere`] for `splits`.
pub fn sphere_vertex_count(splits: u32) -> usize {
    (stack_count(splits) as usize - 1) * splits as usize + 2
}

/// Creates a sphere mesh.
///
/// Uses `max(splits / 2, 2)` stacks: `stacks - 1` latitude rings of
/// `splits` points, followed by the north and south pole.
///
/// # Example
///
/// ```rust
/// use spring_mesh::caps::create_sphere;
/// use glam::DVec3;
///
/// let mesh = create_sphere(DVec3::ZERO, 10.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 7 * 16 + 2);
/// assert!(mesh.validate().is_ok());
/// ```
pub fn create_sphere(center: DVec3, radius: f64, splits: u32) -> MeshResult<Mesh> {
    require_positive("sphere radius", radius)?;
    require_count("splits", splits, MIN_SPLITS)?;
    require_finite("sphere center", center)?;

    let stacks = stack_count(splits);
    let rings = stacks - 1;
    let mut mesh = Mesh::with_capacity(
        sphere_vertex_count(splits),
        (rings as usize - 1) * splits as usize * 2 + splits as usize * 2,
    );

    for ring in 0..rings {
        let phi = PI * f64::from(ring + 1) / f64::from(stacks);
        let (sin_phi, cos_phi) = phi.sin_cos();
        for split in 0..splits {
            let theta = TAU * f64::from(split) / f64::from(splits);
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex(
                center + radius * DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi),
            );
        }
    }
    let north = mesh.add_vertex(center + DVec3::new(0.0, 0.0, radius));
    let south = mesh.add_vertex(center - DVec3::new(0.0, 0.0, radius));

    mesh.stitch_rings(0, rings, splits, false, false)?;

    let last = (rings - 1) * splits;
    for split in 0..splits {
        let next = (split + 1) % splits;
        mesh.add_triangle(north, split, next);
        mesh.add_triangle(south, last + next, last + split);
    }

    Ok(mesh)
}
