//! # Ring Primitive
//!
//! Generates a closed mesh for a ring with a rectangular cross-section.
//!
//! ## Algorithm
//!
//! 1. Precompute `(cos, sin)` for the `segments` angular steps; the step
//!    after the last one wraps to step 0, so the seam closes exactly
//! 2. For every segment, fill a corner table `[loop][slot]` where slot
//!    `v` sits at width offset `-w/2` for `v < 2`, `+w/2` otherwise, and at
//!    step `s` for even `v`, `s + 1` for odd `v`
//! 3. Emit the outer curved quads, then the inner curved quads
//! 4. Emit two side quads per segment, reading the same corner table but
//!    owning fresh vertices, so rims stay hard edges
//! 5. Compute area-weighted vertex normals
//!
//! ## Buffer layout
//!
//! ```text
//! [0, 4n)        outer curved quads, segment s at 4s
//! [4n, 8n)       inner curved quads, segment s at 4n + 4s
//! [8n, 16n)      side quads, segment s side k at 8n + 8s + 4k
//! ```

use crate::error::MeshError;
use crate::mesh::{Mesh, MeshBuilder};
use config::constants::{
    ring_triangle_count, ring_vertex_count, DEFAULT_RING_SEGMENTS, EPSILON, MAX_VERTICES,
    MIN_RING_SEGMENTS, VERTICES_PER_SEGMENT,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Outer loop winding, faces away from the axis.
const OUTER_WINDING: [[u32; 3]; 2] = [[2, 1, 0], [1, 2, 3]];
/// Inner loop winding, faces toward the axis.
const INNER_WINDING: [[u32; 3]; 2] = [[0, 1, 2], [3, 2, 1]];
/// Side quad at `-w/2`, faces -Y. Slots are `[inner@s, outer@s, inner@s+1, outer@s+1]`.
const LOW_SIDE_WINDING: [[u32; 3]; 2] = [[0, 1, 2], [3, 2, 1]];
/// Side quad at `+w/2`, faces +Y.
const HIGH_SIDE_WINDING: [[u32; 3]; 2] = [[0, 2, 1], [3, 1, 2]];

const OUTER: usize = 0;
const INNER: usize = 1;

/// Corner positions of one segment, indexed `[loop][slot]`.
type SegmentCorners = [[DVec3; 4]; 2];

/// Parameters for a rectangular-profile ring.
///
/// The ring axis is +Y. The outer loop has radius `radius`, the inner loop
/// `radius - thickness`, and the band spans `width` along the axis.
///
/// # Example
///
/// ```rust
/// use ring_mesh::RingParams;
///
/// let params: RingParams =
///     serde_json::from_str(r#"{"segments":32,"radius":1.0,"width":0.01,"thickness":0.25}"#)?;
/// assert!(params.validate().is_ok());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingParams {
    /// Number of angular steps around the axis (>= 3)
    pub segments: u32,
    /// Radius of the outer loop (> 0)
    pub radius: f64,
    /// Extent along the ring axis (>= 0)
    pub width: f64,
    /// Radial distance between outer and inner loop (0 <= thickness < radius)
    pub thickness: f64,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_RING_SEGMENTS,
            radius: 1.0,
            width: 0.25,
            thickness: 0.25,
        }
    }
}

impl RingParams {
    /// Creates ring parameters.
    pub fn new(segments: u32, radius: f64, width: f64, thickness: f64) -> Self {
        Self {
            segments,
            radius,
            width,
            thickness,
        }
    }

    /// Radius of the inner loop.
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness
    }

    /// Checks every precondition of [`build_ring`].
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameters`] naming the first parameter
    /// out of range.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.segments < MIN_RING_SEGMENTS {
            return Err(MeshError::invalid_parameters(
                "segments",
                format!("must be at least {}, got {}", MIN_RING_SEGMENTS, self.segments),
            ));
        }

        let max_segments = MAX_VERTICES / VERTICES_PER_SEGMENT;
        if self.segments as usize > max_segments {
            return Err(MeshError::invalid_parameters(
                "segments",
                format!("must be at most {}, got {}", max_segments, self.segments),
            ));
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid_parameters(
                "radius",
                format!("must be positive and finite, got {}", self.radius),
            ));
        }

        if !self.width.is_finite() || self.width < 0.0 {
            return Err(MeshError::invalid_parameters(
                "width",
                format!("must be non-negative and finite, got {}", self.width),
            ));
        }

        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(MeshError::invalid_parameters(
                "thickness",
                format!("must be non-negative and finite, got {}", self.thickness),
            ));
        }

        if self.thickness >= self.radius {
            return Err(MeshError::invalid_parameters(
                "thickness",
                format!(
                    "must be less than radius {}, got {}",
                    self.radius, self.thickness
                ),
            ));
        }

        Ok(())
    }

    /// Builds the ring mesh. See [`build_ring`].
    pub fn build(&self) -> Result<Mesh, MeshError> {
        build_ring(self)
    }
}

/// Creates a ring mesh from its four parameters.
///
/// Convenience form of [`build_ring`].
///
/// # Example
///
/// ```rust
/// use ring_mesh::build_ring_mesh;
///
/// let mesh = build_ring_mesh(3, 1.0, 0.5, 0.25).unwrap();
/// assert_eq!(mesh.vertex_count(), 48);
///
/// assert!(build_ring_mesh(2, 1.0, 0.5, 0.25).is_err());
/// ```
pub fn build_ring_mesh(
    segments: u32,
    radius: f64,
    width: f64,
    thickness: f64,
) -> Result<Mesh, MeshError> {
    build_ring(&RingParams::new(segments, radius, width, thickness))
}

/// Creates a closed rectangular-profile ring mesh.
///
/// Produces exactly `16 * segments` vertices and `8 * segments` triangles.
/// Outer faces point away from the Y axis, inner faces toward it, and the
/// side faces point along -Y and +Y.
///
/// # Arguments
///
/// * `params` - Ring dimensions and angular resolution
///
/// # Returns
///
/// A mesh with positions, triangles and unit vertex normals.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameters`] when `params` fails
/// [`RingParams::validate`]; nothing is allocated in that case.
pub fn build_ring(params: &RingParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let segments = params.segments as usize;
    let half_width = params.width / 2.0;
    let radii = [params.radius, params.inner_radius()];

    let steps: Vec<(f64, f64)> = (0..segments)
        .map(|s| {
            let theta = TAU * s as f64 / segments as f64;
            (theta.cos(), theta.sin())
        })
        .collect();

    let corners: Vec<SegmentCorners> = (0..segments)
        .map(|s| {
            let ends = [steps[s], steps[(s + 1) % segments]];
            radii.map(|radius| {
                [0usize, 1, 2, 3].map(|v| {
                    let (cos, sin) = ends[v % 2];
                    let offset = if v < 2 { -half_width } else { half_width };
                    DVec3::new(radius * cos, offset, radius * sin)
                })
            })
        })
        .collect();

    let mut builder = MeshBuilder::with_capacity(
        ring_vertex_count(params.segments),
        ring_triangle_count(params.segments),
    );

    // Curved faces
    for (loop_index, winding) in [(OUTER, OUTER_WINDING), (INNER, INNER_WINDING)] {
        for segment in &corners {
            builder.add_quad(segment[loop_index], winding);
        }
    }

    // Side faces
    for segment in &corners {
        for (low, winding) in [(0usize, LOW_SIDE_WINDING), (2, HIGH_SIDE_WINDING)] {
            let quad = [
                segment[INNER][low],
                segment[OUTER][low],
                segment[INNER][low + 1],
                segment[OUTER][low + 1],
            ];
            builder.add_quad(quad, winding);
        }
    }

    let mesh = builder.build()?;
    log::debug!(
        "built ring mesh: segments={} radius={} width={} thickness={} -> {} vertices, {} triangles ({} degenerate)",
        params.segments,
        params.radius,
        params.width,
        params.thickness,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.degenerate_triangle_count(EPSILON)
    );

    Ok(mesh)
}
