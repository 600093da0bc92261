//! # Primitives
//!
//! Single-level shapes built without the level scheduler: donut, coiled
//! spring and the double-sided cylinder.

pub mod coil;
pub mod cylinder;
pub mod donut;

pub use coil::create_coil;
pub use cylinder::create_cylinder;
pub use donut::create_donut;

use std::f64::consts::TAU;

use glam::DVec3;

/// Point of the tube of radius `tube` around a circle of radius `major`,
/// at outer angle `theta` and tube angle `phi`, lifted by `height`.
#[inline]
pub(crate) fn torus_point(major: f64, tube: f64, theta: f64, phi: f64, height: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let reach = major + tube * cos_phi;
    DVec3::new(reach * cos_theta, reach * sin_theta, height + tube * sin_phi)
}

/// Angle of step `index` out of `count` per revolution.
#[inline]
pub(crate) fn step_angle(index: u32, count: u32) -> f64 {
    TAU * f64::from(index) / f64::from(count)
}
