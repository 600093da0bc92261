use glam::DVec3;
use spring_mesh::indices::build_ring_indices;
use spring_mesh::primitives::{create_cylinder, create_donut};
use spring_mesh::sweep::{build_deltas, LevelSchedule};
use spring_mesh::{create_nested_sweep, render_preset, LevelSpec, ShapeSpec};

fn normal(mesh: &spring_mesh::Mesh, tri: [u32; 3]) -> DVec3 {
    let [a, b, c] = tri.map(|i| mesh.vertex(i));
    (b - a).cross(c - a)
}

#[test]
fn closed_lattice_has_two_triangles_per_quad() {
    for rings in [2u32, 3, 7, 24] {
        for splits in [3u32, 4, 9, 32] {
            let mut triangles = Vec::new();
            build_ring_indices(&mut triangles, 0, rings, splits, true, false).unwrap();
            assert_eq!(triangles.len() as u32, rings * splits * 2);
            assert_eq!(triangles.iter().flatten().count() as u32, rings * splits * 6);
            assert!(triangles.iter().flatten().all(|&i| i < rings * splits));
        }
    }
}

#[test]
fn open_lattice_skips_the_wrap() {
    for rings in [1u32, 2, 5, 13] {
        let mut triangles = Vec::new();
        build_ring_indices(&mut triangles, 0, rings, 6, false, true).unwrap();
        assert_eq!(triangles.len() as u32, (rings - 1) * 6 * 2);
    }
}

#[test]
fn default_donut_matches_reference_counts() {
    let mesh = create_donut(DVec3::ZERO, 50.0, 10.0, 360, 360).unwrap();
    assert_eq!(mesh.vertex_count(), 129_600);
    assert_eq!(mesh.vertex(0), DVec3::new(60.0, 0.0, 0.0));
    assert!(mesh.validate().is_ok());
}

#[test]
fn deltas_close_after_total_steps() {
    let counts = [4u32, 6, 5];
    let deltas = build_deltas(&counts, 360.0);
    assert_eq!(deltas[0], 360.0 / 4.0);

    let total: u32 = counts.iter().product();
    for delta in &deltas {
        let swept = f64::from(total) * delta;
        let turns = swept / 360.0;
        assert!((turns - turns.round()).abs() < 1e-9, "{swept} is not a whole turn");
    }

    let schedule = LevelSchedule::new(&counts, 360.0).unwrap();
    assert_eq!(schedule.total_steps(), total as usize);
    assert_eq!(schedule.angles_at(total as usize), schedule.angles_at(0));
}

#[test]
fn nested_sweep_lattice_is_closed() {
    let splits = 10;
    let levels = [LevelSpec::new(15.0, 4), LevelSpec::new(60.0, 6)];
    let mesh = create_nested_sweep(DVec3::ZERO, 3.0, splits, &levels).unwrap();

    assert_eq!(mesh.vertex_count(), 24 * splits as usize);
    assert_eq!(mesh.triangle_count(), 24 * splits as usize * 2);
    // The last ring stitches back to the first
    assert!(mesh
        .triangles()
        .iter()
        .any(|t| t.contains(&0) && t.iter().any(|&i| i >= 23 * splits)));
}

#[test]
fn builders_are_deterministic() {
    let shapes = [
        ShapeSpec::Donut {
            center: DVec3::new(1.0, 2.0, 3.0),
            major_radius: 20.0,
            tube_radius: 4.0,
            rings: Some(30),
            splits: Some(12),
        },
        ShapeSpec::NestedSweep {
            center: DVec3::ZERO,
            tube_radius: 1.0,
            splits: Some(8),
            levels: vec![
                LevelSpec::new(4.0, 6),
                LevelSpec::new(16.0, 8),
                LevelSpec::new(64.0, 10),
            ],
            stamp: Default::default(),
        },
    ];
    for shape in &shapes {
        assert_eq!(shape.build().unwrap(), shape.build().unwrap());
    }
    assert_eq!(render_preset("spring").unwrap(), render_preset("spring").unwrap());
}

#[test]
fn double_sided_cylinder_passes_have_opposite_winding() {
    let splits = 16;
    let layers = 5;
    let mesh = create_cylinder(DVec3::ZERO, DVec3::new(3.0, 4.0, 12.0), 2.0, layers, splits).unwrap();

    assert_eq!(mesh.vertex_count(), 2 * (layers * splits) as usize);
    let half = mesh.triangle_count() / 2;
    assert_eq!(half, ((layers - 1) * splits * 2) as usize);

    let (inner, outer) = mesh.triangles().split_at(half);
    for (a, b) in inner.iter().zip(outer) {
        let na = normal(&mesh, *a);
        let nb = normal(&mesh, *b);
        assert!(na.dot(nb) < 0.0, "{a:?} and {b:?} face the same way");
        assert!((na + nb).length() < 1e-9 * na.length().max(1.0));
    }
}
