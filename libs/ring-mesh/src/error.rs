//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// A failed build never hands out partial geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A build parameter is outside its valid range
    #[error("Invalid parameters: {parameter} {message}")]
    InvalidParameters {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Accepted range and the rejected value
        message: String,
    },

    /// A triangle references a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        /// Position of the triangle in the index buffer
        triangle: usize,
        /// The offending vertex index
        index: u32,
        /// Number of vertices actually added
        vertex_count: usize,
    },
}

impl MeshError {
    /// Creates an invalid parameters error.
    pub fn invalid_parameters(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            parameter,
            message: message.into(),
        }
    }

    /// Returns the name of the parameter that was rejected.
    ///
    /// Index errors come from mesh assembly rather than a build parameter
    /// and report `"triangles"`.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameters { parameter, .. } => parameter,
            Self::IndexOutOfRange { .. } => "triangles",
        }
    }
}
