//! # Cone Primitive

use crate::error::{require_positive, MeshResult};
use crate::math::normalize;
use crate::mesh::Mesh;
use crate::ring::build_point_ring;
use glam::DVec3;
use tracing::debug;

/// Creates a cone with its base circle centered on `anchor` and its apex
/// `radius * ratio` along `direction`.
///
/// Vertices are the `splits` base points, then the apex, then the base
/// center. Sides fan from the apex, the base fans from its center.
///
/// # Example
///
/// ```rust
/// use spring_mesh::caps::create_cone;
/// use glam::DVec3;
///
/// let mesh = create_cone(DVec3::ZERO, DVec3::Z, 1.0, 2.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 32);
/// assert_eq!(mesh.vertex(16), DVec3::new(0.0, 0.0, 2.0));
/// ```
pub fn create_cone(
    anchor: DVec3,
    direction: DVec3,
    radius: f64,
    ratio: f64,
    splits: u32,
) -> MeshResult<Mesh> {
    require_positive("cone ratio", ratio)?;
    let axis = normalize(direction)?;
    let base = build_point_ring(anchor, axis, radius, splits)?;

    let mut mesh = Mesh::with_capacity(splits as usize + 2, splits as usize * 2);
    mesh.extend_vertices(base);
    let apex = mesh.add_vertex(anchor + axis * radius * ratio);
    let center = mesh.add_vertex(anchor);

    for j in 0..splits {
        let next = (j + 1) % splits;
        mesh.add_triangle(next, j, apex);
        mesh.add_triangle(center, j, next);
    }

    debug!(splits, radius, ratio, "built cone");
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_faces_point_outward() {
        let anchor = DVec3::new(0.0, 5.0, 0.0);
        let direction = DVec3::new(1.0, 0.0, 1.0);
        let mesh = create_cone(anchor, direction, 2.0, 3.0, 12).unwrap();
        let centroid = mesh.vertices().iter().copied().sum::<DVec3>() / mesh.vertex_count() as f64;

        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            let normal = (b - a).cross(c - a);
            assert!(normal.dot((a + b + c) / 3.0 - centroid) > 0.0);
        }
    }

    #[test]
    fn test_cone_apex_height() {
        let mesh = create_cone(DVec3::ZERO, DVec3::new(0.0, -4.0, 0.0), 1.5, 2.0, 8).unwrap();
        assert!((mesh.vertex(8) - DVec3::new(0.0, -3.0, 0.0)).length() < 1e-12);
        assert_eq!(mesh.vertex(9), DVec3::ZERO);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cone_invalid_input() {
        assert!(create_cone(DVec3::ZERO, DVec3::Z, 1.0, 0.0, 8).is_err());
        assert!(create_cone(DVec3::ZERO, DVec3::Z, 1.0, 1.0, 2).is_err());
        assert!(create_cone(DVec3::ZERO, DVec3::ZERO, 1.0, 1.0, 8).is_err());
    }
}
