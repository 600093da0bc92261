//! Vector operations shared by every builder.
//!
//! Thin wrappers over `glam::DVec3` that turn zero-length input into a
//! [`MeshError::DegenerateVector`] instead of NaNs.

use std::f64::consts::TAU;

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// Cross product `a × b`.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use spring_mesh::math::cross;
/// assert_eq!(cross(DVec3::X, DVec3::Y), DVec3::Z);
/// ```
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    a.cross(b)
}

/// Dot product `a · b`.
#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.dot(b)
}

/// Returns `v` scaled to unit length.
///
/// # Errors
/// [`MeshError::DegenerateVector`] when `|v|` is within tolerance of zero
/// or not finite.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use spring_mesh::math::normalize;
/// let n = normalize(DVec3::new(0.0, 3.0, 4.0)).unwrap();
/// assert!((n.length() - 1.0).abs() < 1e-12);
/// assert!(normalize(DVec3::ZERO).is_err());
/// ```
pub fn normalize(v: DVec3) -> MeshResult<DVec3> {
    let length = v.length();
    if !length.is_finite() || length <= EPSILON_TOLERANCE {
        return Err(MeshError::degenerate(format!(
            "cannot normalize zero-length vector {v:?}"
        )));
    }
    Ok(v / length)
}

/// Normalizes `v`, substituting `fallback` when `v` is degenerate.
#[inline]
pub fn normalize_or(v: DVec3, fallback: DVec3) -> DVec3 {
    normalize(v).unwrap_or(fallback)
}

/// Angle in `[0, 2π)` that turns `from` into `to`, signed by `reference`.
///
/// The unsigned angle comes from `atan2(|from × to|, from · to)`. When the
/// cross product points against `reference` the rotation runs the other
/// way, so the result is `2π - angle`. Identical directions yield 0.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use glam::DVec3;
/// use spring_mesh::math::angle_between;
///
/// let ccw = angle_between(DVec3::X, DVec3::Y, DVec3::Z);
/// assert!((ccw - FRAC_PI_2).abs() < 1e-12);
/// let cw = angle_between(DVec3::X, DVec3::Y, DVec3::NEG_Z);
/// assert!((cw - 3.0 * FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle_between(from: DVec3, to: DVec3, reference: DVec3) -> f64 {
    let axis = from.cross(to);
    let angle = axis.length().atan2(from.dot(to));
    if axis.dot(reference) < 0.0 {
        let signed = TAU - angle;
        // 2π itself is outside the half-open range
        if signed >= TAU {
            0.0
        } else {
            signed
        }
    } else {
        angle
    }
}

/// Some unit vector perpendicular to `v`.
///
/// Picks the world axis least aligned with `v` and crosses it in, so the
/// result is stable for a given input. Zero input yields +X.
pub fn any_orthogonal(v: DVec3) -> DVec3 {
    let abs = v.abs();
    let helper = if abs.x <= abs.y && abs.x <= abs.z {
        DVec3::X
    } else if abs.y <= abs.z {
        DVec3::Y
    } else {
        DVec3::Z
    };
    normalize_or(v.cross(helper), DVec3::X)
}
