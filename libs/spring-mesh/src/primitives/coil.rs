//! # Coil Primitive
//!
//! A helical spring: the donut cross-section swept `coils` times around the
//! Z axis while climbing `pitch` per turn. Both open ends are closed with a
//! fan around an extra center vertex.
//!
//! The cross-sections use the same closed form as the donut, lifted by the
//! rise of each step, rather than sampling rings along the helix tangent.

use config::constants::MIN_SPLITS;
use glam::DVec3;
use tracing::debug;

use super::{step_angle, torus_point};
use crate::error::{
    require_count, require_finite, require_non_negative, require_positive, MeshError, MeshResult,
};
use crate::mesh::Mesh;

/// Parameters of a coiled spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilConfig {
    /// Number of full turns.
    pub coils: u32,
    /// Radius of the helix.
    pub major_radius: f64,
    /// Radius of the wire cross-section.
    pub tube_radius: f64,
    /// Height gained per turn.
    pub pitch: f64,
    /// Cross-sections per turn.
    pub segments: u32,
    /// Points per cross-section.
    pub splits: u32,
}

impl Default for CoilConfig {
    fn default() -> Self {
        Self {
            coils: 4,
            major_radius: 50.0,
            tube_radius: 10.0,
            pitch: 40.0,
            segments: 360,
            splits: 360,
        }
    }
}

impl CoilConfig {
    /// Sets the number of turns.
    #[must_use]
    pub fn with_coils(mut self, coils: u32) -> Self {
        self.coils = coils;
        self
    }

    /// Sets helix and wire radius.
    #[must_use]
    pub fn with_radii(mut self, major_radius: f64, tube_radius: f64) -> Self {
        self.major_radius = major_radius;
        self.tube_radius = tube_radius;
        self
    }

    /// Sets the rise per turn.
    #[must_use]
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    /// Sets cross-sections per turn and points per cross-section.
    #[must_use]
    pub fn with_resolution(mut self, segments: u32, splits: u32) -> Self {
        self.segments = segments;
        self.splits = splits;
        self
    }

    /// Number of cross-sections along the whole spring.
    pub fn ring_count(&self) -> Option<u32> {
        self.coils.checked_mul(self.segments)?.checked_add(1)
    }
}

/// Creates a capped coil around `center`.
///
/// The tube has `coils * segments + 1` cross-sections so it ends after
/// whole turns. The start cap faces back along the helix, the end cap
/// forward.
///
/// # Example
///
/// ```rust
/// use spring_mesh::primitives::{coil::CoilConfig, create_coil};
/// use glam::DVec3;
///
/// let config = CoilConfig::default().with_coils(2).with_resolution(12, 8);
/// let mesh = create_coil(DVec3::ZERO, &config).unwrap();
/// // 25 rings of 8 plus two cap centers
/// assert_eq!(mesh.vertex_count(), 25 * 8 + 2);
/// assert_eq!(mesh.triangle_count(), 24 * 8 * 2 + 2 * 8);
/// ```
pub fn create_coil(center: DVec3, config: &CoilConfig) -> MeshResult<Mesh> {
    require_count("coils", config.coils, 1)?;
    require_count("segments", config.segments, MIN_SPLITS)?;
    require_count("splits", config.splits, MIN_SPLITS)?;
    require_non_negative("major radius", config.major_radius)?;
    require_positive("tube radius", config.tube_radius)?;
    if !config.pitch.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "pitch must be finite: {}",
            config.pitch
        )));
    }
    require_finite("coil center", center)?;

    let rings = config.ring_count().ok_or_else(|| {
        MeshError::invalid_parameter(format!(
            "{} coils of {} segments overflow the ring counter",
            config.coils, config.segments
        ))
    })?;
    let splits = config.splits;
    let rise = config.pitch / f64::from(config.segments);

    let vertex_count = rings as usize * splits as usize + 2;
    let mut mesh = Mesh::with_capacity(vertex_count, vertex_count * 2);

    for ring in 0..rings {
        let theta = step_angle(ring % config.segments, config.segments);
        let height = rise * f64::from(ring);
        mesh.extend_vertices((0..splits).map(|split| {
            center
                + torus_point(
                    config.major_radius,
                    config.tube_radius,
                    theta,
                    step_angle(split, splits),
                    height,
                )
        }));
    }
    mesh.stitch_rings(0, rings, splits, false, false)?;

    let total_height = rise * f64::from(rings - 1);
    let first_center = mesh.add_vertex(center + DVec3::new(config.major_radius, 0.0, 0.0));
    let last_center =
        mesh.add_vertex(center + DVec3::new(config.major_radius, 0.0, total_height));
    let last = (rings - 1) * splits;

    for split in 0..splits {
        let next = (split + 1) % splits;
        mesh.add_triangle(first_center, split, next);
        mesh.add_triangle(last_center, last + next, last + split);
    }

    debug!(
        coils = config.coils,
        rings,
        splits,
        vertices = mesh.vertex_count(),
        "built coil"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small() -> CoilConfig {
        CoilConfig::default().with_coils(3).with_resolution(16, 8)
    }

    #[test]
    fn test_coil_counts() {
        let mesh = create_coil(DVec3::ZERO, &small()).unwrap();
        let rings = 3 * 16 + 1;
        assert_eq!(mesh.vertex_count(), rings * 8 + 2);
        assert_eq!(mesh.triangle_count(), (rings - 1) * 8 * 2 + 16);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_coil_rises_by_pitch_per_turn() {
        let config = small().with_pitch(12.0);
        let mesh = create_coil(DVec3::ZERO, &config).unwrap();
        let first = mesh.vertex(0);
        let one_turn = mesh.vertex(16 * 8);
        assert_relative_eq!(one_turn.z - first.z, 12.0, epsilon = 1e-9);
        assert_relative_eq!(one_turn.x, first.x, epsilon = 1e-9);
    }

    #[test]
    fn test_coil_caps_close_ends() {
        let config = small();
        let mesh = create_coil(DVec3::new(0.0, 0.0, 5.0), &config).unwrap();
        let count = mesh.vertex_count() as u32;
        let start_cap = mesh.vertex(count - 2);
        let end_cap = mesh.vertex(count - 1);
        assert_eq!(start_cap, DVec3::new(50.0, 0.0, 5.0));
        assert_relative_eq!(end_cap.z, 5.0 + 3.0 * 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coil_cap_winding_faces_outward() {
        let mesh = create_coil(DVec3::ZERO, &small()).unwrap();
        let count = mesh.vertex_count() as u32;
        let caps: Vec<_> = mesh
            .triangles()
            .iter()
            .filter(|t| t[0] >= count - 2)
            .collect();
        assert_eq!(caps.len(), 16);

        for tri in caps {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            let normal = (b - a).cross(c - a);
            // Helix tangent at both ends is close to +Y
            if tri[0] == count - 2 {
                assert!(normal.y < 0.0);
            } else {
                assert!(normal.y > 0.0);
            }
        }
    }

    #[test]
    fn test_coil_invalid_input() {
        assert!(create_coil(DVec3::ZERO, &small().with_coils(0)).is_err());
        assert!(create_coil(DVec3::ZERO, &small().with_radii(10.0, 0.0)).is_err());
        assert!(create_coil(DVec3::ZERO, &small().with_pitch(f64::NAN)).is_err());
        assert!(create_coil(DVec3::ZERO, &small().with_resolution(2, 8)).is_err());
    }
}
