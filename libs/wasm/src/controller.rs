//! # Scene Controller
//!
//! JavaScript handle over a [`SceneSet`]. The page's dropdowns and sliders
//! call the setters; the render loop pulls uniforms each frame.

use crate::mesh_handle::MeshHandle;
use crate::to_js_error;
use glam::Vec3;
use ring_scenes::{SceneError, SceneSet, ShadingAlgorithm};
use wasm_bindgen::prelude::*;

/// Runtime scene state owned by the page.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scenes = new SceneController();
/// scenes.set_shading_algorithm("phong");
/// const material = scenes.model_material_key();   // "illum_phong"
/// const uniforms = JSON.parse(scenes.uniforms_json(0, cam.x, cam.y, cam.z));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct SceneController {
    scenes: SceneSet,
}

#[wasm_bindgen]
impl SceneController {
    /// Creates a controller over the built-in demo scenes.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SceneController {
        Self {
            scenes: SceneSet::demo(),
        }
    }

    /// Creates a controller over a JSON scene list.
    pub fn from_json(json: &str) -> Result<SceneController, JsValue> {
        Self::from_json_internal(json).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    #[wasm_bindgen(getter)]
    pub fn active_scene(&self) -> usize {
        self.scenes.active_scene_index()
    }

    pub fn set_active_scene(&mut self, index: usize) -> Result<(), JsValue> {
        self.scenes.set_active_scene(index).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn active_light(&self) -> usize {
        self.scenes.active_light()
    }

    pub fn set_active_light(&mut self, index: usize) -> Result<(), JsValue> {
        self.scenes.set_active_light(index).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn shading_algorithm(&self) -> String {
        self.scenes.shading_algorithm().to_string()
    }

    /// Accepts `"gouraud"` or `"phong"`, case-insensitive.
    pub fn set_shading_algorithm(&mut self, name: &str) -> Result<(), JsValue> {
        self.set_shading_algorithm_internal(name)
            .map_err(to_js_error)
    }

    pub fn model_material_key(&self) -> String {
        self.scenes.model_material_key()
    }

    pub fn ground_material_key(&self) -> String {
        self.scenes.ground_material_key()
    }

    #[wasm_bindgen(getter)]
    pub fn height_scale(&self) -> f32 {
        self.scenes.height_scale()
    }

    pub fn set_height_scale(&mut self, scale: f32) -> Result<(), JsValue> {
        self.scenes.set_height_scale(scale).map_err(to_js_error)
    }

    /// Shader uniforms for a scene as JSON.
    pub fn uniforms_json(&self, scene: usize, x: f32, y: f32, z: f32) -> Result<String, JsValue> {
        self.uniforms_json_internal(scene, Vec3::new(x, y, z))
            .map_err(to_js_error)
    }

    /// Builds the mesh of a ring model.
    pub fn ring_mesh(&self, scene: usize, model: usize) -> Result<MeshHandle, JsValue> {
        self.ring_mesh_internal(scene, model).map_err(to_js_error)
    }
}

impl SceneController {
    pub fn from_json_internal(json: &str) -> Result<Self, SceneError> {
        Ok(Self {
            scenes: SceneSet::from_json(json)?,
        })
    }

    pub fn set_shading_algorithm_internal(&mut self, name: &str) -> Result<(), SceneError> {
        let algorithm: ShadingAlgorithm = name.parse()?;
        self.scenes.set_shading_algorithm(algorithm);
        Ok(())
    }

    pub fn uniforms_json_internal(
        &self,
        scene: usize,
        camera_position: Vec3,
    ) -> Result<String, SceneError> {
        let uniforms = self.scenes.uniforms(scene, camera_position)?;
        Ok(serde_json::to_string(&uniforms)?)
    }

    pub fn ring_mesh_internal(&self, scene: usize, model: usize) -> Result<MeshHandle, SceneError> {
        let mesh = self.scenes.ring_mesh(scene, model)?;
        log::debug!(
            "ring mesh for scene {scene} model {model}: {} vertices",
            mesh.vertex_count()
        );
        Ok(MeshHandle::from_mesh(&mesh))
    }

    /// The underlying scene state.
    pub fn scene_set(&self) -> &SceneSet {
        &self.scenes
    }

    pub fn scene_set_mut(&mut self) -> &mut SceneSet {
        &mut self.scenes
    }
}
