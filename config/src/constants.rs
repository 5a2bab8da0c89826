//! # Configuration Constants
//!
//! Centralized constants for the ring mesh workspace. Precision values,
//! tessellation limits and the defaults of the demo scenes are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Ring segment counts and per-segment buffer sizes
//! - **Limits**: Maximum values for safety bounds
//! - **Scene**: Camera and shading defaults shared by every demo scene

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of angular segments for a ring.
///
/// Every ring in the demo scenes uses this resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RING_SEGMENTS, MIN_RING_SEGMENTS};
/// assert!(DEFAULT_RING_SEGMENTS >= MIN_RING_SEGMENTS);
/// ```
pub const DEFAULT_RING_SEGMENTS: u32 = 32;

/// Minimum number of angular segments for a ring.
///
/// Three steps around the axis is the smallest closed polygon.
pub const MIN_RING_SEGMENTS: u32 = 3;

/// Vertices emitted per angular segment of a ring.
///
/// Two curved quads (outer and inner loop) plus two side quads, each with
/// its own four vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTICES_PER_SEGMENT;
/// assert_eq!(VERTICES_PER_SEGMENT, 4 * 4);
/// ```
pub const VERTICES_PER_SEGMENT: usize = 16;

/// Triangles emitted per angular segment of a ring (two per quad).
pub const TRIANGLES_PER_SEGMENT: usize = 8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from absurd segment counts.
/// Also keeps every index representable as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Vertical field of view of the demo camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;

/// Near clipping plane of the demo camera.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clipping plane of the demo camera.
pub const CAMERA_FAR: f32 = 100.0;

/// Movement speed of the demo camera, in world units per key press tick.
pub const CAMERA_SPEED: f32 = 0.5;

/// Default heightmap scalar applied to the ground mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HEIGHT_SCALE;
/// assert_eq!(DEFAULT_HEIGHT_SCALE, 1.0);
/// ```
pub const DEFAULT_HEIGHT_SCALE: f32 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of vertices a ring with `segments` angular steps produces.
///
/// # Example
///
/// ```rust
/// use config::constants::ring_vertex_count;
/// assert_eq!(ring_vertex_count(4), 64);
/// ```
#[inline]
pub fn ring_vertex_count(segments: u32) -> usize {
    segments as usize * VERTICES_PER_SEGMENT
}

/// Number of triangles a ring with `segments` angular steps produces.
///
/// # Example
///
/// ```rust
/// use config::constants::ring_triangle_count;
/// assert_eq!(ring_triangle_count(4), 32);
/// ```
#[inline]
pub fn ring_triangle_count(segments: u32) -> usize {
    segments as usize * TRIANGLES_PER_SEGMENT
}
