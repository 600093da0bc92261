//! # Presets
//!
//! Named showcase scenes, each a list of [`ShapeSpec`] values centered on
//! the origin.

use glam::DVec3;

use crate::shape::ShapeSpec;
use crate::sweep::{LevelSpec, Stamp};

/// Every preset name accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &[
    "donut",
    "spring",
    "cylinder",
    "spring_donut",
    "spring_donut_with_cones",
    "multi_spring_donut",
    "super_multi_spring_donut",
    "final_spring_donut",
    "axis_indicators",
];

/// Looks up a preset scene.
///
/// # Example
///
/// ```rust
/// use spring_mesh::presets::by_name;
///
/// assert_eq!(by_name("super_multi_spring_donut").map(|s| s.len()), Some(4));
/// assert!(by_name("teapot").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Vec<ShapeSpec>> {
    let shapes = match name {
        "donut" => vec![ShapeSpec::Donut {
            center: DVec3::ZERO,
            major_radius: 50.0,
            tube_radius: 10.0,
            rings: Some(360),
            splits: Some(360),
        }],
        "spring" => vec![ShapeSpec::Coil {
            center: DVec3::ZERO,
            coils: 4,
            major_radius: 50.0,
            tube_radius: 10.0,
            pitch: None,
            segments: Some(360),
            splits: Some(360),
        }],
        "cylinder" => vec![ShapeSpec::Cylinder {
            from: DVec3::ZERO,
            to: DVec3::new(0.0, 0.0, 100.0),
            radius: 100.0,
            layers: 10,
            splits: Some(360),
        }],
        "spring_donut" => vec![sweep(4.0, 24, &[(25.0, 24), (200.0, 60)], Stamp::Ring)],
        "spring_donut_with_cones" => vec![sweep(
            4.0,
            12,
            &[(25.0, 24), (200.0, 60)],
            Stamp::Cone { ratio: 2.0 },
        )],
        "multi_spring_donut" => vec![sweep(
            3.0,
            16,
            &[(20.0, 16), (80.0, 24), (400.0, 36)],
            Stamp::Ring,
        )],
        "super_multi_spring_donut" => vec![
            sweep(64.0, 64, &[], Stamp::Ring),
            sweep(8.0, 30, &[(200.0, 64)], Stamp::Ring),
            sweep(4.0, 64, &[(50.0, 32), (400.0, 64)], Stamp::Ring),
            sweep(4.0, 30, &[(50.0, 48), (100.0, 36), (800.0, 24)], Stamp::Ring),
        ],
        "final_spring_donut" => vec![sweep(
            2.0,
            15,
            &[(50.0, 24), (100.0, 12), (200.0, 18), (1600.0, 18)],
            Stamp::Ring,
        )],
        "axis_indicators" => [DVec3::X, DVec3::Y, DVec3::Z]
            .into_iter()
            .map(|direction| ShapeSpec::Cube {
                anchor: DVec3::ZERO,
                direction,
                size: 1.0,
                length: Some(24_000.0),
            })
            .collect(),
        _ => return None,
    };
    Some(shapes)
}

fn sweep(tube_radius: f64, splits: u32, levels: &[(f64, u32)], stamp: Stamp) -> ShapeSpec {
    ShapeSpec::NestedSweep {
        center: DVec3::ZERO,
        tube_radius,
        splits: Some(splits),
        levels: levels
            .iter()
            .map(|&(radius, ring_count)| LevelSpec::new(radius, ring_count))
            .collect(),
        stamp,
    }
}
