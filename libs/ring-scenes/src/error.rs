//! # Scene Errors
//!
//! Error types for scene selection and assembly.

use ring_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while selecting or assembling scenes.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A scene set needs at least one scene
    #[error("Scene set is empty")]
    Empty,

    /// Scene index outside the scene list
    #[error("Scene {index} out of range (have {count})")]
    SceneOutOfRange { index: usize, count: usize },

    /// Light index outside the active scene's lights
    #[error("Light {index} out of range (scene has {count})")]
    LightOutOfRange { index: usize, count: usize },

    /// Model index outside a scene's models
    #[error("Model {index} out of range in scene {scene} (have {count})")]
    ModelOutOfRange {
        scene: usize,
        index: usize,
        count: usize,
    },

    /// The requested model is not a ring
    #[error("Model {model} in scene {scene} is not a ring")]
    NotARing { scene: usize, model: usize },

    /// Shading algorithm name not recognized
    #[error("Unknown shading algorithm: {0}")]
    UnknownShadingAlgorithm(String),

    /// Height scale must be finite
    #[error("Invalid height scale: {0}")]
    InvalidHeightScale(f32),

    /// Ring mesh generation failed
    #[error("Ring mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Scene JSON could not be read or written
    #[error("Scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
