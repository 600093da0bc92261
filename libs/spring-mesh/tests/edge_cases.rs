use glam::DVec3;
use spring_mesh::caps::{create_cone, create_cube, create_sphere};
use spring_mesh::math::{angle_between, normalize};
use spring_mesh::primitives::coil::CoilConfig;
use spring_mesh::primitives::{create_coil, create_cylinder, create_donut};
use spring_mesh::ring::build_point_ring;
use spring_mesh::{create_depth_sweep, create_nested_sweep, LevelSpec, Mesh, MeshError};

fn is_invalid(result: Result<Mesh, MeshError>) -> bool {
    matches!(result, Err(MeshError::InvalidParameter { .. }))
}

#[test]
fn zero_orientation_is_degenerate() {
    let err = build_point_ring(DVec3::ZERO, DVec3::ZERO, 1.0, 8).unwrap_err();
    assert!(err.is_recoverable());
    assert!(matches!(normalize(DVec3::ZERO), Err(MeshError::DegenerateVector { .. })));
}

#[test]
fn non_positive_counts_fail_fast() {
    assert!(is_invalid(create_donut(DVec3::ZERO, 50.0, 10.0, 0, 12)));
    assert!(is_invalid(create_cylinder(DVec3::ZERO, DVec3::Z, 1.0, 0, 8)));
    assert!(is_invalid(create_sphere(DVec3::ZERO, 1.0, 0)));
    assert!(is_invalid(create_cone(DVec3::ZERO, DVec3::Z, 1.0, 2.0, 0)));
    assert!(is_invalid(create_coil(DVec3::ZERO, &CoilConfig::default().with_coils(0))));
    assert!(is_invalid(create_nested_sweep(DVec3::ZERO, 1.0, 8, &[LevelSpec::new(5.0, 0)])));
}

#[test]
fn negative_radii_fail_fast() {
    assert!(is_invalid(create_donut(DVec3::ZERO, -50.0, 10.0, 12, 12)));
    assert!(is_invalid(create_cube(DVec3::ZERO, DVec3::X, -1.0, 1.0)));
    assert!(is_invalid(create_nested_sweep(DVec3::ZERO, 1.0, 8, &[LevelSpec::new(-5.0, 4)])));
    assert!(is_invalid(create_depth_sweep(DVec3::ZERO, 1.0, 8, -100.0, 12, 2)));
}

#[test]
fn non_finite_input_is_rejected() {
    assert!(create_donut(DVec3::new(f64::NAN, 0.0, 0.0), 50.0, 10.0, 12, 12).is_err());
    assert!(create_nested_sweep(DVec3::ZERO, f64::INFINITY, 8, &[LevelSpec::new(5.0, 4)]).is_err());
}

#[test]
fn deep_sweeps_repeat_the_axis_cycle() {
    let levels: Vec<LevelSpec> = (0..5).map(|i| LevelSpec::new(2.0 * 4f64.powi(i), 3)).collect();
    let mesh = create_nested_sweep(DVec3::ZERO, 0.5, 4, &levels).unwrap();
    assert_eq!(mesh.vertex_count(), 3usize.pow(5) * 4);
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

#[test]
fn depth_sweep_clamps_to_four_levels() {
    let clamped = create_depth_sweep(DVec3::ZERO, 0.5, 4, 81.0, 8, 12).unwrap();
    let four = create_depth_sweep(DVec3::ZERO, 0.5, 4, 81.0, 8, 4).unwrap();
    assert_eq!(clamped, four);
}

#[test]
fn angle_between_covers_full_turn() {
    let angle = angle_between(DVec3::X, DVec3::NEG_Y, DVec3::Z);
    assert!((angle - 1.5 * std::f64::consts::PI).abs() < 1e-12);
}
