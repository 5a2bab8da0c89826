//! # Ring Mesh
//!
//! Procedural mesh generation for rectangular-profile rings, such as
//! planetary rings or flat bands. No authored asset is involved: four
//! numbers go in, flat position/index/normal buffers come out.
//!
//! ## Architecture
//!
//! ```text
//! RingParams → build_ring → Mesh (positions, triangles, normals) → f32/u32 buffers → engine
//! ```
//!
//! ## Geometry
//!
//! - The ring axis is +Y; loops lie in the XZ plane
//! - Outer loop at `radius`, inner loop at `radius - thickness`
//! - The band extends `width / 2` either side of the XZ plane
//! - Curved and side faces own separate vertices, so shading keeps a hard
//!   edge along the rims
//!
//! ## Usage
//!
//! ```rust
//! use ring_mesh::{build_ring, RingParams};
//!
//! let params = RingParams {
//!     segments: 4,
//!     radius: 1.0,
//!     width: 0.5,
//!     thickness: 0.25,
//! };
//! let mesh = build_ring(&params)?;
//! assert_eq!(mesh.vertex_count(), 64);
//! assert_eq!(mesh.triangle_count(), 32);
//! # Ok::<(), ring_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ring;
pub mod topology;

pub use error::MeshError;
pub use mesh::{compute_vertex_normals, Mesh, MeshBuilder};
pub use ring::{build_ring, build_ring_mesh, RingParams};
pub use topology::EdgeReport;
