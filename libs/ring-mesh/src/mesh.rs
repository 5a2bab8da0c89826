//! # Mesh Data Structure
//!
//! Immutable triangle mesh with per-vertex normals, and the builder that
//! produces it.

use crate::error::MeshError;
use crate::topology::{self, EdgeReport};
use glam::DVec3;

/// A triangle mesh with vertices, indices and per-vertex normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the engine boundary via [`Mesh::positions_f32`] and
/// [`Mesh::normals_f32`].
///
/// A `Mesh` is only produced by [`MeshBuilder::build`], which rejects
/// out-of-range indices and always computes normals, so every index is below
/// `vertex_count()` and `normals().len() == vertex_count()`.
///
/// # Example
///
/// ```rust
/// use ring_mesh::MeshBuilder;
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// builder.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// builder.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// builder.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// builder.add_triangle(0, 1, 2);
/// let mesh = builder.build()?;
/// assert_eq!(mesh.normals()[0], DVec3::Z);
/// # Ok::<(), ring_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Unit vertex normals, zero where every incident triangle is degenerate
    normals: Vec<DVec3>,
}

impl Mesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the unnormalized face normal of a triangle.
    ///
    /// The length equals twice the triangle's area.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        face_normal(self.vertex(a), self.vertex(b), self.vertex(c))
    }

    /// Returns the centroid of a triangle.
    pub fn face_centroid(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        (self.vertex(a) + self.vertex(b) + self.vertex(c)) / 3.0
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the buffers for consistency.
    ///
    /// Checks:
    /// - All triangle indices are in range
    /// - No triangle repeats an index
    /// - There is exactly one normal per vertex
    ///
    /// Zero-area triangles are allowed; see [`Mesh::degenerate_triangle_count`].
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if self.normals.len() != self.vertices.len() {
            return false;
        }

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Counts triangles whose area is below `epsilon`.
    pub fn degenerate_triangle_count(&self, epsilon: f64) -> usize {
        (0..self.triangles.len())
            .filter(|&i| self.face_normal(i).length() * 0.5 < epsilon)
            .count()
    }

    /// Analyses edge pairing after welding coincident positions.
    ///
    /// See [`EdgeReport`].
    pub fn edge_report(&self) -> EdgeReport {
        topology::edge_report(&self.vertices, &self.triangles)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }
}

fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.push(p.x as f32);
        result.push(p.y as f32);
        result.push(p.z as f32);
    }
    result
}

/// Incremental mesh assembly.
///
/// Collects vertices and triangles, then [`build`](MeshBuilder::build)
/// computes normals and freezes the result into a [`Mesh`].
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds four fresh vertices and two triangles over them.
    ///
    /// `winding` holds the two triangles as slots into `corners`. Returns
    /// the index of the first added vertex.
    pub fn add_quad(&mut self, corners: [DVec3; 4], winding: [[u32; 3]; 2]) -> u32 {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        for [a, b, c] in winding {
            self.add_triangle(base + a, base + b, base + c);
        }
        base
    }

    /// Computes vertex normals and returns the finished mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::IndexOutOfRange`] if a triangle references a vertex that
    /// was never added.
    pub fn build(self) -> Result<Mesh, MeshError> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        let normals = compute_vertex_normals(&self.vertices, &self.triangles);
        Ok(Mesh {
            vertices: self.vertices,
            triangles: self.triangles,
            normals,
        })
    }
}

/// Right-hand face normal of triangle `(a, b, c)`, unnormalized.
#[inline]
fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a)
}

/// Computes area-weighted vertex normals.
///
/// Each triangle contributes its unnormalized face normal `(b - a) × (c - a)`,
/// whose length is proportional to its area, to all three of its vertices.
/// The sums are normalized afterwards, whatever their scale. A vertex whose
/// sum is zero (only degenerate triangles, or none at all) keeps a zero
/// normal.
///
/// Every index in `triangles` must be below `vertices.len()`.
///
/// # Example
///
/// ```rust
/// use ring_mesh::compute_vertex_normals;
/// use glam::DVec3;
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// let normals = compute_vertex_normals(&vertices, &[[0, 1, 2]]);
/// assert_eq!(normals, vec![DVec3::Z; 3]);
/// ```
pub fn compute_vertex_normals(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in triangles {
        let normal = face_normal(
            vertices[tri[0] as usize],
            vertices[tri[1] as usize],
            vertices[tri[2] as usize],
        );

        normals[tri[0] as usize] += normal;
        normals[tri[1] as usize] += normal;
        normals[tri[2] as usize] += normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_vertex(DVec3::X);
        builder.add_vertex(DVec3::Y);
        builder.add_triangle(0, 1, 2);
        builder.build().unwrap()
    }

    #[test]
    fn test_builder_empty() {
        let mesh = MeshBuilder::new().build().unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_empty());
    }

    #[test]
    fn test_builder_add_vertex() {
        let mut builder = MeshBuilder::new();
        let idx = builder.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(builder.vertex_count(), 1);
        let mesh = builder.build().unwrap();
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_builder_add_triangle() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_add_quad_offsets_winding() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::NEG_ONE);
        let base = builder.add_quad(
            [DVec3::ZERO, DVec3::X, DVec3::Z, DVec3::new(1.0, 0.0, 1.0)],
            [[2, 1, 0], [1, 2, 3]],
        );
        assert_eq!(base, 1);
        let mesh = builder.build().unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangles(), &[[3, 2, 1], [2, 3, 4]]);
    }

    #[test]
    fn test_normals_follow_right_hand_rule() {
        let mesh = unit_triangle();
        for n in mesh.normals() {
            assert_eq!(*n, DVec3::Z);
        }

        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_vertex(DVec3::X);
        builder.add_vertex(DVec3::Y);
        builder.add_triangle(0, 2, 1);
        let flipped = builder.build().unwrap();
        assert_eq!(flipped.normals()[0], DVec3::NEG_Z);
    }

    #[test]
    fn test_normals_are_area_weighted() {
        // Vertex 0 is shared by a large +Z triangle and a small +Y triangle
        let vertices = [
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
        ];
        let normals = compute_vertex_normals(&vertices, &[[0, 1, 2], [0, 3, 4]]);

        let expected = DVec3::new(0.0, 1.0, 4.0) / 17.0_f64.sqrt();
        assert_relative_eq!(normals[0].x, expected.x);
        assert_relative_eq!(normals[0].y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(normals[0].z, expected.z, epsilon = 1e-12);
        assert_relative_eq!(normals[0].length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_leaves_zero_normal() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_vertex(DVec3::X);
        builder.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        builder.add_triangle(0, 1, 2);
        let mesh = builder.build().unwrap();
        assert!(mesh.normals().iter().all(|n| *n == DVec3::ZERO));
        assert!(mesh.normals().iter().all(|n| !n.is_nan()));
        assert_eq!(mesh.degenerate_triangle_count(1e-12), 1);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        builder.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = builder.build().unwrap().bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_build_rejects_out_of_range_index() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_triangle(0, 1, 2); // Out of range
        assert_eq!(
            builder.build().unwrap_err(),
            MeshError::IndexOutOfRange {
                triangle: 0,
                index: 1,
                vertex_count: 1,
            }
        );
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_vertex(DVec3::X);
        builder.add_triangle(0, 1, 1);
        assert!(!builder.build().unwrap().validate());
    }

    #[test]
    fn test_tiny_triangle_normals_are_unit() {
        let scale = 1e-7;
        let vertices = [DVec3::ZERO, DVec3::X * scale, DVec3::Y * scale];
        let normals = compute_vertex_normals(&vertices, &[[0, 1, 2]]);
        for n in normals {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_face_helpers() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
        assert_relative_eq!(mesh.face_centroid(0).x, 1.0 / 3.0);
        assert_relative_eq!(mesh.face_centroid(0).y, 1.0 / 3.0);
    }

    #[test]
    fn test_mesh_flat_exports() {
        let mesh = unit_triangle();
        assert_eq!(
            mesh.positions_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.normals_f32().len(), mesh.positions_f32().len());
        assert_eq!(&mesh.normals_f32()[0..3], &[0.0f32, 0.0, 1.0]);
    }
}
