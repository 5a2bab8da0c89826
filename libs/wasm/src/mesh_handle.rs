//! # Mesh Handle
//!
//! WASM-friendly wrapper for ring mesh buffers that can be transferred to
//! JavaScript.

use ring_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to ring mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = create_ring(32, 1.0, 0.25, 0.25);
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const triangleCount = mesh.triangle_count;
///
/// // Upload to the engine
/// const data = new VertexData();
/// data.positions = mesh.vertices();  // Float32Array
/// data.indices = mesh.indices();     // Uint32Array
/// data.normals = mesh.normals();     // Float32Array
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens a [`Mesh`] into GPU-ready buffers.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.positions_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Position buffer, without crossing into JavaScript.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }
}
