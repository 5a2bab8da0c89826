//! # Scene Set
//!
//! Runtime state shared by all scenes: which scene is shown, which light is
//! selected, which shading algorithm is bound and how far the ground
//! heightmap is scaled.

use crate::error::SceneError;
use crate::preset::{demo_scenes, SceneDescription};
use crate::shading::ShadingAlgorithm;
use config::constants::DEFAULT_HEIGHT_SCALE;
use glam::Vec3;
use rayon::prelude::*;
use ring_mesh::{Mesh, RingParams};
use serde::{Deserialize, Serialize};

/// Values pushed into the active shader program before each frame.
///
/// Arrays are flattened the way the shader expects them: three floats per
/// light position and per light color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderUniforms {
    /// World-space eye position
    pub camera_position: [f32; 3],
    /// Scene ambient color
    pub ambient: [f32; 3],
    /// Number of entries in the light arrays
    pub num_lights: i32,
    /// `[x, y, z]` per light
    pub light_positions: Vec<f32>,
    /// Diffuse `[r, g, b]` per light
    pub light_colors: Vec<f32>,
}

/// A ring mesh built for one model of one scene.
#[derive(Debug, Clone)]
pub struct RingMeshEntry {
    /// Index of the scene owning the ring
    pub scene: usize,
    /// Index of the ring within the scene's models
    pub model: usize,
    pub mesh: Mesh,
}

/// The demo scenes together with their shared runtime state.
#[derive(Debug, Clone)]
pub struct SceneSet {
    scenes: Vec<SceneDescription>,
    active_scene: usize,
    active_light: usize,
    shading: ShadingAlgorithm,
    height_scale: f32,
}

impl SceneSet {
    /// Creates a scene set, validating every ring model up front.
    ///
    /// # Errors
    ///
    /// [`SceneError::Empty`] for an empty list, [`SceneError::Mesh`] when a
    /// ring model has invalid parameters.
    pub fn new(scenes: Vec<SceneDescription>) -> Result<Self, SceneError> {
        if scenes.is_empty() {
            return Err(SceneError::Empty);
        }

        for scene in &scenes {
            for params in scene.models.iter().filter_map(|m| m.ring_params()) {
                params.validate()?;
            }
        }

        Ok(Self {
            scenes,
            active_scene: 0,
            active_light: 0,
            shading: ShadingAlgorithm::default(),
            height_scale: DEFAULT_HEIGHT_SCALE,
        })
    }

    /// The built-in demo scenes.
    pub fn demo() -> Self {
        Self {
            scenes: demo_scenes(),
            active_scene: 0,
            active_light: 0,
            shading: ShadingAlgorithm::default(),
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }

    /// Reads a scene list from JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scenes: Vec<SceneDescription> = serde_json::from_str(json)?;
        Self::new(scenes)
    }

    /// Writes the scene list as JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(&self.scenes)?)
    }

    /// All scene descriptions, in menu order.
    pub fn scenes(&self) -> &[SceneDescription] {
        &self.scenes
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false; construction rejects empty scene lists.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Returns a scene by index.
    pub fn scene(&self, index: usize) -> Result<&SceneDescription, SceneError> {
        self.scenes.get(index).ok_or(SceneError::SceneOutOfRange {
            index,
            count: self.scenes.len(),
        })
    }

    /// Index of the displayed scene.
    pub fn active_scene_index(&self) -> usize {
        self.active_scene
    }

    /// The displayed scene.
    pub fn active_scene(&self) -> &SceneDescription {
        &self.scenes[self.active_scene]
    }

    /// Switches the displayed scene.
    ///
    /// The light selection falls back to 0 if the new scene has fewer lights.
    pub fn set_active_scene(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.scenes.len() {
            log::warn!("rejected scene {index}: only {} scenes", self.scenes.len());
            return Err(SceneError::SceneOutOfRange {
                index,
                count: self.scenes.len(),
            });
        }

        self.active_scene = index;
        if self.active_light >= self.scenes[index].lights.len() {
            self.active_light = 0;
        }
        log::info!("active scene -> {} ({})", index, self.scenes[index].name);
        Ok(())
    }

    /// Index of the selected light within the active scene.
    pub fn active_light(&self) -> usize {
        self.active_light
    }

    /// Selects a light of the active scene.
    pub fn set_active_light(&mut self, index: usize) -> Result<(), SceneError> {
        let count = self.active_scene().lights.len();
        if index >= count {
            log::warn!("rejected light {index}: active scene has {count}");
            return Err(SceneError::LightOutOfRange { index, count });
        }

        self.active_light = index;
        log::info!("active light -> {index}");
        Ok(())
    }

    /// The shading algorithm currently bound.
    pub fn shading_algorithm(&self) -> ShadingAlgorithm {
        self.shading
    }

    /// Selects the materials used by every model and ground in every scene.
    pub fn set_shading_algorithm(&mut self, algorithm: ShadingAlgorithm) {
        self.shading = algorithm;
        log::info!("shading algorithm -> {algorithm}");
    }

    /// Material key currently bound to lit models.
    pub fn model_material_key(&self) -> String {
        self.shading.model_material_key()
    }

    /// Material key currently bound to the ground.
    pub fn ground_material_key(&self) -> String {
        self.shading.ground_material_key()
    }

    /// Heightmap scalar applied to every ground.
    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Sets the heightmap scalar on every scene that has a ground.
    pub fn set_height_scale(&mut self, scale: f32) -> Result<(), SceneError> {
        if !scale.is_finite() {
            return Err(SceneError::InvalidHeightScale(scale));
        }

        self.height_scale = scale;
        for ground in self.scenes.iter_mut().filter_map(|s| s.ground.as_mut()) {
            ground.height_scalar = scale;
        }
        log::info!("height scale -> {scale}");
        Ok(())
    }

    /// Computes shader uniforms for a scene seen from `camera_position`.
    ///
    /// The camera moves under host control, so its position is an input.
    pub fn uniforms(
        &self,
        scene_index: usize,
        camera_position: Vec3,
    ) -> Result<ShaderUniforms, SceneError> {
        let scene = self.scene(scene_index)?;

        let mut light_positions = Vec::with_capacity(scene.lights.len() * 3);
        let mut light_colors = Vec::with_capacity(scene.lights.len() * 3);
        for light in &scene.lights {
            light_positions.extend_from_slice(&light.position.to_array());
            light_colors.extend_from_slice(&light.diffuse.to_array());
        }

        Ok(ShaderUniforms {
            camera_position: camera_position.to_array(),
            ambient: scene.ambient.to_array(),
            num_lights: scene.lights.len() as i32,
            light_positions,
            light_colors,
        })
    }

    /// Builds the mesh of one ring model.
    pub fn ring_mesh(&self, scene_index: usize, model_index: usize) -> Result<Mesh, SceneError> {
        let scene = self.scene(scene_index)?;
        let model = scene
            .models
            .get(model_index)
            .ok_or(SceneError::ModelOutOfRange {
                scene: scene_index,
                index: model_index,
                count: scene.models.len(),
            })?;

        let params = model.ring_params().ok_or(SceneError::NotARing {
            scene: scene_index,
            model: model_index,
        })?;

        Ok(params.build()?)
    }

    /// Builds every ring model of every scene, in parallel.
    ///
    /// Entries come back in scene order, then model order.
    pub fn build_ring_meshes(&self) -> Result<Vec<RingMeshEntry>, SceneError> {
        let jobs: Vec<(usize, usize, RingParams)> = self
            .scenes
            .iter()
            .enumerate()
            .flat_map(|(scene, description)| {
                description
                    .models
                    .iter()
                    .enumerate()
                    .filter_map(move |(model, m)| m.ring_params().map(|p| (scene, model, *p)))
            })
            .collect();

        let entries = jobs
            .into_par_iter()
            .map(|(scene, model, params)| -> Result<RingMeshEntry, SceneError> {
                Ok(RingMeshEntry {
                    scene,
                    model,
                    mesh: params.build()?,
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        log::debug!("built {} ring meshes", entries.len());
        Ok(entries)
    }
}

impl Default for SceneSet {
    fn default() -> Self {
        Self::demo()
    }
}
