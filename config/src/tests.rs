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
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_min_ring_segments_is_triangle() {
    // Three angular steps is the smallest closed loop
    assert_eq!(MIN_RING_SEGMENTS, 3);
}

#[test]
fn test_default_ring_segments_matches_demo_scenes() {
    assert_eq!(DEFAULT_RING_SEGMENTS, 32);
}

#[test]
fn test_per_segment_counts_are_two_per_quad() {
    // Four quads per segment, four vertices and two triangles each
    assert_eq!(VERTICES_PER_SEGMENT, 4 * 4);
    assert_eq!(TRIANGLES_PER_SEGMENT, 4 * 2);
}

#[test]
fn test_ring_counts_scale_with_segments() {
    assert_eq!(ring_vertex_count(3), 48);
    assert_eq!(ring_triangle_count(3), 24);
    assert_eq!(ring_vertex_count(32), 512);
    assert_eq!(ring_triangle_count(32), 256);
}

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert!(MAX_VERTICES <= u32::MAX as usize);
    assert!(MAX_VERTICES >= ring_vertex_count(DEFAULT_RING_SEGMENTS));
}

// =============================================================================
// SCENE TESTS
// =============================================================================

#[test]
fn test_camera_clip_planes_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
}

#[test]
fn test_default_height_scale_is_identity() {
    assert_eq!(DEFAULT_HEIGHT_SCALE, 1.0);
}
