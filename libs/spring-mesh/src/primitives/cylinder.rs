//! # Cylinder Primitive
//!
//! Open, double-sided tube between two points. No rotation levels: rings
//! are sampled at evenly spaced positions along the axis.

use glam::DVec3;
use tracing::debug;

use crate::error::{require_count, require_finite, MeshResult};
use crate::mesh::Mesh;
use crate::ring::push_point_ring;

/// Creates a double-sided open cylinder from `from` to `to`.
///
/// # Arguments
///
/// * `radius` - Radius of every ring
/// * `layers` - Rings along the axis, including both ends (at least 2)
/// * `splits` - Points per ring
///
/// The ring lattice is laid down twice: the first copy carries the outside,
/// the second copy the inside, so each side keeps its own vertex normals.
/// The first half of the triangles is the inside, the second half the
/// outside.
///
/// # Example
///
/// ```rust
/// use spring_mesh::primitives::create_cylinder;
/// use glam::DVec3;
///
/// let mesh = create_cylinder(DVec3::ZERO, DVec3::new(0.0, 0.0, 100.0), 10.0, 10, 36).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 10 * 36);
/// assert_eq!(mesh.triangle_count(), 2 * 9 * 36 * 2);
/// ```
pub fn create_cylinder(
    from: DVec3,
    to: DVec3,
    radius: f64,
    layers: u32,
    splits: u32,
) -> MeshResult<Mesh> {
    require_count("cylinder layers", layers, 2)?;
    require_finite("cylinder start", from)?;
    require_finite("cylinder end", to)?;

    let axis = to - from;
    let vertex_count = layers as usize * splits as usize;
    let mut mesh = Mesh::with_capacity(vertex_count * 2, vertex_count * 4);

    for layer in 0..layers {
        let t = f64::from(layer) / f64::from(layers - 1);
        push_point_ring(&mut mesh, from + axis * t, axis, radius, splits)?;
    }
    let outer = mesh.vertices().to_vec();
    let inner_base = mesh.extend_vertices(outer);

    mesh.stitch_rings(inner_base, layers, splits, false, true)?;
    mesh.stitch_rings(0, layers, splits, false, false)?;

    debug!(
        radius,
        layers,
        splits,
        triangles = mesh.triangle_count(),
        "built cylinder"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_spans_endpoints() {
        let from = DVec3::new(1.0, 2.0, 3.0);
        let to = DVec3::new(1.0, 2.0, 13.0);
        let mesh = create_cylinder(from, to, 2.0, 3, 8).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, 3.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, 13.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cylinder_outer_pass_faces_outward() {
        let mesh = create_cylinder(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), 1.0, 4, 12).unwrap();
        let outer = &mesh.triangles()[mesh.triangle_count() / 2..];
        for tri in outer {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            let centroid = (a + b + c) / 3.0;
            let radial = DVec3::new(0.0, centroid.y, centroid.z);
            assert!((b - a).cross(c - a).dot(radial) > 0.0);
        }
    }

    #[test]
    fn test_cylinder_sides_do_not_share_vertices() {
        let mut mesh = create_cylinder(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0), 1.0, 3, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 3 * 8);

        let half = mesh.triangle_count() / 2;
        let (inner, outer) = mesh.triangles().split_at(half);
        for (a, b) in inner.iter().zip(outer) {
            assert!(a.iter().all(|&i| i >= 24));
            assert!(b.iter().all(|&i| i < 24));
            let mut pa = a.map(|i| mesh.vertex(i).to_array());
            let mut pb = b.map(|i| mesh.vertex(i).to_array());
            pa.sort_by(|x, y| x.partial_cmp(y).unwrap());
            pb.sort_by(|x, y| x.partial_cmp(y).unwrap());
            assert_eq!(pa, pb);
        }

        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        for (i, n) in normals.iter().enumerate() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
            let v = mesh.vertex(i as u32);
            let radial = DVec3::new(v.x, v.y, 0.0);
            if i < 24 {
                assert!(n.dot(radial) > 0.0, "outer normal {i} points inward");
            } else {
                assert!(n.dot(radial) < 0.0, "inner normal {i} points outward");
            }
        }
    }

    #[test]
    fn test_cylinder_invalid_input() {
        assert!(create_cylinder(DVec3::ZERO, DVec3::Z, 1.0, 1, 8).is_err());
        assert!(create_cylinder(DVec3::ZERO, DVec3::Z, 0.0, 2, 8).is_err());
        assert!(matches!(
            create_cylinder(DVec3::ONE, DVec3::ONE, 1.0, 2, 8),
            Err(MeshError::DegenerateVector { .. })
        ));
    }
}
