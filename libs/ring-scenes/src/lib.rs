//! # Ring Scenes
//!
//! The demo scenes that showcase the procedural ring, described as data.
//!
//! Nothing here talks to a renderer. A host engine reads the
//! [`SceneDescription`]s to create its cameras, lights and meshes, uploads
//! the buffers from [`SceneSet::build_ring_meshes`], and each frame feeds
//! [`SceneSet::uniforms`] into its shader programs.
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use ring_scenes::{SceneSet, ShadingAlgorithm};
//!
//! let mut scenes = SceneSet::demo();
//! scenes.set_shading_algorithm(ShadingAlgorithm::Phong);
//! assert_eq!(scenes.model_material_key(), "illum_phong");
//!
//! let uniforms = scenes.uniforms(0, Vec3::new(0.0, 1.8, 10.0))?;
//! assert_eq!(uniforms.num_lights, 2);
//! # Ok::<(), ring_scenes::SceneError>(())
//! ```

pub mod error;
pub mod preset;
pub mod shading;
pub mod state;

pub use error::SceneError;
pub use preset::{
    demo_scenes, CameraRig, Color3, Color4, Ground, KeyBindings, MaterialProps, Model,
    ModelShape, PointLight, SceneDescription, TextureSource,
};
pub use shading::ShadingAlgorithm;
pub use state::{RingMeshEntry, SceneSet, ShaderUniforms};
