//! # Cube Primitive
//!
//! Square-section box aligned with a direction vector.

use crate::error::{require_finite, require_positive, MeshResult};
use crate::math::RigidTransform;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a box of `size x size` cross-section and `length` along
/// `direction`, centered on `anchor`.
///
/// A true cube when `length == size`; a long thin box makes an axis rod.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face), outward facing.
///
/// # Example
///
/// ```rust
/// use spring_mesh::caps::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::ZERO, DVec3::X, 1.0, 100.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// let (min, max) = mesh.bounding_box();
/// assert!((max.x - 50.0).abs() < 1e-9 && (min.x + 50.0).abs() < 1e-9);
/// ```
pub fn create_cube(anchor: DVec3, direction: DVec3, size: f64, length: f64) -> MeshResult<Mesh> {
    require_positive("cube size", size)?;
    require_positive("cube length", length)?;
    require_finite("cube anchor", anchor)?;

    let frame = RigidTransform::aligning_z(anchor, direction)?;
    let half = DVec3::new(size, size, length) / 2.0;
    let (min, max) = (-half, half);

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(frame.apply(DVec3::new(min.x, min.y, min.z)));
    let v1 = mesh.add_vertex(frame.apply(DVec3::new(max.x, min.y, min.z)));
    let v2 = mesh.add_vertex(frame.apply(DVec3::new(max.x, max.y, min.z)));
    let v3 = mesh.add_vertex(frame.apply(DVec3::new(min.x, max.y, min.z)));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(frame.apply(DVec3::new(min.x, min.y, max.z)));
    let v5 = mesh.add_vertex(frame.apply(DVec3::new(max.x, min.y, max.z)));
    let v6 = mesh.add_vertex(frame.apply(DVec3::new(max.x, max.y, max.z)));
    let v7 = mesh.add_vertex(frame.apply(DVec3::new(min.x, max.y, max.z)));

    // Counter-clockwise seen from outside
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
