//! # Mesh Data Structure
//!
//! Position list plus triangle list. Insertion order of positions is the
//! vertex index; triangles reference positions by that index.

use glam::{DAffine3, DVec3};

use crate::error::{MeshError, MeshResult};
use crate::indices::build_ring_indices;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary.
///
/// # Example
///
/// ```rust
/// use spring_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a run of vertices and returns the index of the first one.
    pub fn extend_vertices(&mut self, positions: impl IntoIterator<Item = DVec3>) -> u32 {
        let base = self.vertices.len() as u32;
        self.vertices.extend(positions);
        base
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Stitches a `rings x splits` lattice starting at vertex `base`.
    ///
    /// The lattice must already be present in row-major order
    /// (`base + ring * splits + split`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use spring_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// for ring in 0..4 {
    ///     for split in 0..3 {
    ///         mesh.add_vertex(DVec3::new(ring as f64, split as f64, 0.0));
    ///     }
    /// }
    /// mesh.stitch_rings(0, 4, 3, true, false).unwrap();
    /// assert_eq!(mesh.triangle_count(), 4 * 3 * 2);
    /// ```
    pub fn stitch_rings(
        &mut self,
        base: u32,
        rings: u32,
        splits: u32,
        closed: bool,
        flip: bool,
    ) -> MeshResult<()> {
        let required = base as usize + rings as usize * splits as usize;
        if required > self.vertices.len() {
            return Err(MeshError::invalid_topology(format!(
                "lattice of {rings}x{splits} at base {base} needs {required} vertices, mesh has {}",
                self.vertices.len()
            )));
        }
        build_ring_indices(&mut self.triangles, base, rings, splits, closed, flip)
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by an affine transform.
    pub fn transform(&mut self, transform: &DAffine3) {
        for v in &mut self.vertices {
            *v = transform.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = transform.matrix3.inverse().transpose();
            for n in normals {
                *n = (normal_matrix * *n).normalize_or_zero();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one, offsetting its indices.
    ///
    /// Normals survive only when both meshes carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            _ => None,
        };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that every triangle references existing, pairwise distinct
    /// vertices.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len() as u32;

        for (index, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&v| v >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} {tri:?} references a vertex >= {vertex_count}"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} {tri:?} repeats a vertex"
                )));
            }
        }

        Ok(())
    }

    /// Fails when the mesh exceeds the given vertex or triangle limits.
    pub fn check_limits(&self, max_vertices: usize, max_triangles: usize) -> MeshResult<()> {
        if self.vertices.len() > max_vertices {
            return Err(MeshError::TooManyVertices {
                count: self.vertices.len(),
                max: max_vertices,
            });
        }
        if self.triangles.len() > max_triangles {
            return Err(MeshError::TooManyTriangles {
                count: self.triangles.len(),
                max: max_triangles,
            });
        }
        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_extend_vertices_returns_base() {
        let mut mesh = unit_triangle();
        let base = mesh.extend_vertices([DVec3::Z, DVec3::ONE]);
        assert_eq!(base, 3);
        assert_eq!(mesh.vertex_count(), 5);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(matches!(mesh.validate(), Err(MeshError::InvalidTopology { .. })));
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 0, 1);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_stitch_rings_requires_lattice() {
        let mut mesh = unit_triangle();
        let err = mesh.stitch_rings(0, 2, 3, false, false).unwrap_err();
        assert!(matches!(err, MeshError::InvalidTopology { .. }));
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_mesh_indices_u32_is_flat() {
        let mesh = unit_triangle();
        let indices = mesh.indices_u32();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(indices.len() % 3, 0);
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = unit_triangle();
        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(DVec3::Z);
        mesh2.add_vertex(DVec3::new(1.0, 0.0, 1.0));
        mesh2.add_vertex(DVec3::new(0.0, 1.0, 1.0));
        mesh2.add_triangle(0, 1, 2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]);
    }

    #[test]
    fn test_compute_normals_follows_winding() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 3);
        assert_eq!(normals[0], DVec3::Z);
        assert_eq!(mesh.normals_f32().unwrap()[2], 1.0);
    }

    #[test]
    fn test_transform_and_translate() {
        let mut mesh = unit_triangle();
        mesh.translate(DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(0), DVec3::X);

        mesh.transform(&DAffine3::from_scale(DVec3::splat(2.0)));
        assert_eq!(mesh.vertex(1), DVec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_check_limits() {
        let mesh = unit_triangle();
        assert!(mesh.check_limits(3, 1).is_ok());
        assert!(matches!(
            mesh.check_limits(2, 1),
            Err(MeshError::TooManyVertices { count: 3, max: 2 })
        ));
        assert!(matches!(
            mesh.check_limits(3, 0),
            Err(MeshError::TooManyTriangles { count: 1, max: 0 })
        ));
    }
}
