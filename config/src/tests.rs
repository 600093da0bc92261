//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_splits_at_least_three() {
    // A ring needs at least 3 points to enclose an area
    assert!(MIN_SPLITS >= 3);
}

#[test]
fn test_default_splits_within_bounds() {
    assert!(DEFAULT_SPLITS >= MIN_SPLITS);
    assert!(DEFAULT_SPLITS <= MAX_SPLITS);
}

#[test]
fn test_full_revolution_is_360() {
    assert_eq!(FULL_REVOLUTION_DEGREES, 360.0);
}

// =============================================================================
// NESTING TESTS
// =============================================================================

#[test]
fn test_max_level_depth_matches_axis_cycle() {
    assert_eq!(MAX_LEVEL_DEPTH, 4);
}

#[test]
fn test_min_distributed_rings_forms_polygon() {
    assert!(MIN_DISTRIBUTED_RINGS >= 3);
}

#[test]
fn test_cone_ratio_positive() {
    assert!(DEFAULT_CONE_RATIO > 0.0);
}

// =============================================================================
// COMPUTE_SPLITS TESTS
// =============================================================================

#[test]
fn test_compute_splits_angle_dominates_for_large_radius() {
    // from_angle = 360 / 12 = 30, from_size = 2*PI*100 / 2 ~ 314
    let splits = compute_splits(100.0, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE);
    assert_eq!(splits, 30);
}

#[test]
fn test_compute_splits_size_dominates_for_small_radius() {
    // from_size = 2*PI*2 / 2 ~ 6.28 -> 7
    let splits = compute_splits(2.0, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE);
    assert_eq!(splits, 7);
}

#[test]
fn test_compute_splits_clamps_to_min() {
    let splits = compute_splits(0.01, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE);
    assert_eq!(splits, MIN_SPLITS);
}

#[test]
fn test_compute_splits_clamps_to_max() {
    let splits = compute_splits(1.0e6, 0.001, 0.001);
    assert_eq!(splits, MAX_SPLITS);
}

#[test]
fn test_compute_splits_zero_radius() {
    assert_eq!(compute_splits(0.0, DEFAULT_SPLIT_ANGLE, DEFAULT_SPLIT_SIZE), MIN_SPLITS);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON_TOLERANCE / 2.0;
    assert!(approx_zero(0.0));
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-0.1));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_reasonable() {
    // A 360x360 donut must fit comfortably
    assert!(MAX_VERTICES >= 360 * 360);
}

#[test]
fn test_max_triangles_covers_closed_lattice() {
    // A closed lattice emits two triangles per vertex
    assert!(MAX_TRIANGLES >= 2 * MAX_VERTICES);
}
