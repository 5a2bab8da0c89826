//! # Scene Presets
//!
//! Plain-data descriptions of the demo scenes: one lit still life with a
//! heightmapped ground, and three variations of a ringed planet under
//! different lights.
//!
//! All scenes use a right-handed, Y-up frame. Rotations are Euler angles in
//! radians.

use config::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_SPEED, DEFAULT_HEIGHT_SCALE,
    DEFAULT_RING_SEGMENTS,
};
use glam::{Vec2, Vec3};
use ring_mesh::RingParams;
use serde::{Deserialize, Serialize};

/// RGB color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color3 {
    pub const WHITE: Color3 = Color3::new(1.0, 1.0, 1.0);
    pub const BLACK: Color3 = Color3::new(0.0, 0.0, 0.0);

    /// Creates a color from its components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Components as `[r, g, b]`.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color4 {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color4 {
    /// Creates a color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Where a material's albedo texture comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum TextureSource {
    /// 1x1 white texture, so the material color shows unmodified
    White,
    /// Image file, relative to the host's base URL
    File(String),
}

/// Per-object material inputs read by the shader programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    /// Base color, multiplied with the texture sample
    pub color: Color3,
    /// Albedo texture
    pub texture: TextureSource,
    /// Specular highlight color
    pub specular: Color3,
    /// Specular exponent
    pub shininess: f32,
    /// Texture coordinate repeat in `u` and `v`
    pub texture_scale: Vec2,
}

impl MaterialProps {
    /// Untextured material.
    pub fn solid(color: Color3, specular: Color3, shininess: f32) -> Self {
        Self {
            color,
            texture: TextureSource::White,
            specular,
            shininess,
            texture_scale: Vec2::ONE,
        }
    }

    /// Textured material with a white base color.
    pub fn textured(path: &str, specular: Color3, shininess: f32, texture_scale: Vec2) -> Self {
        Self {
            color: Color3::WHITE,
            texture: TextureSource::File(path.to_string()),
            specular,
            shininess,
            texture_scale,
        }
    }

    fn with_color(mut self, color: Color3) -> Self {
        self.color = color;
        self
    }
}

/// Geometry of a model. Spheres and boxes come from the host engine's
/// builders; rings are generated by [`ring_mesh`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelShape {
    /// Unit-diameter sphere
    Sphere { segments: u32 },
    /// Axis-aligned box
    Box { width: f32, height: f32, depth: f32 },
    /// Procedural ring
    Ring(RingParams),
}

/// A placed, shaded object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Name the host gives the engine mesh
    pub name: String,
    pub shape: ModelShape,
    /// World-space position of the model origin
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub material: MaterialProps,
}

impl Model {
    fn new(name: &str, shape: ModelShape, position: Vec3, material: MaterialProps) -> Self {
        Self {
            name: name.to_string(),
            shape,
            position,
            rotation: Vec3::ZERO,
            material,
        }
    }

    fn rotated_z(mut self, degrees: f32) -> Self {
        self.rotation = Vec3::new(0.0, 0.0, degrees.to_radians());
        self
    }

    /// Ring parameters, if this model is a ring.
    pub fn ring_params(&self) -> Option<&RingParams> {
        match &self.shape {
            ModelShape::Ring(params) => Some(params),
            _ => None,
        }
    }
}

/// Point light. Only the diffuse color feeds the light-color uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub name: String,
    /// World-space position
    pub position: Vec3,
    /// Diffuse color, sent to the shader as the light color
    pub diffuse: Color3,
    /// Specular color, unused by the shader programs
    pub specular: Color3,
}

impl PointLight {
    fn new(name: &str, position: Vec3, diffuse: Color3) -> Self {
        Self {
            name: name.to_string(),
            position,
            diffuse,
            specular: Color3::WHITE,
        }
    }
}

/// Key codes driving the free-fly camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: u32,
    pub right: u32,
    pub forward: u32,
    pub backward: u32,
    pub upward: u32,
    pub downward: u32,
}

impl Default for KeyBindings {
    /// W/A/S/D to move, Space to rise, Shift to sink.
    fn default() -> Self {
        Self {
            left: 65,
            right: 68,
            forward: 87,
            backward: 83,
            upward: 32,
            downward: 16,
        }
    }
}

/// Free-fly camera setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Clip planes
    pub near: f32,
    pub far: f32,
    /// Distance moved per key press tick
    pub speed: f32,
    pub keys: KeyBindings,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.8, 10.0),
            target: Vec3::new(0.0, 1.8, 0.0),
            up: Vec3::Y,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            speed: CAMERA_SPEED,
            keys: KeyBindings::default(),
        }
    }
}

/// Heightmapped ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    /// Grid subdivisions along X and Z
    pub subdivisions: [u32; 2],
    /// Scale applied to the unit ground mesh
    pub scaling: Vec3,
    /// Heightmap image path, relative to the host's base URL
    pub heightmap: String,
    /// Multiplier on heightmap samples
    pub height_scalar: f32,
    pub material: MaterialProps,
}

/// Everything the host needs to assemble one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Identifier shown in the scene menu
    pub name: String,
    /// Clear color
    pub background: Color4,
    /// Ambient light color
    pub ambient: Color3,
    pub camera: CameraRig,
    pub lights: Vec<PointLight>,
    pub models: Vec<Model>,
    /// Heightmapped ground, if the scene has one
    pub ground: Option<Ground>,
}

/// Builds the four demo scenes.
///
/// # Example
///
/// ```rust
/// let scenes = ring_scenes::demo_scenes();
/// assert_eq!(scenes.len(), 4);
/// assert!(scenes[0].ground.is_some());
/// ```
pub fn demo_scenes() -> Vec<SceneDescription> {
    let scenes = vec![
        still_life(),
        ringed_planet(
            "ringed_planet",
            vec![PointLight::new("light0", Vec3::new(1.0, 3.0, 5.0), Color3::WHITE)],
            Color3::WHITE,
        ),
        ringed_planet(
            "ringed_planet_tinted",
            vec![
                PointLight::new("light0", Vec3::new(1.0, 3.0, 5.0), Color3::new(0.5, 0.0, 1.0)),
                PointLight::new("light1", Vec3::new(1.0, 3.0, -5.0), Color3::new(0.0, 0.3, 1.0)),
            ],
            Color3::WHITE,
        ),
        ringed_planet(
            "ringed_planet_underlit",
            vec![
                PointLight::new("light0", Vec3::new(1.0, 5.0, 5.0), Color3::WHITE),
                PointLight::new("light1", Vec3::new(1.0, -12.0, -3.0), Color3::WHITE),
            ],
            Color3::new(0.1, 0.5, 0.5),
        ),
    ];
    log::trace!("assembled {} demo scenes", scenes.len());
    scenes
}

fn still_life() -> SceneDescription {
    let ground = Ground {
        subdivisions: [50, 50],
        scaling: Vec3::new(20.0, 1.0, 20.0),
        heightmap: "heightmaps/default.png".to_string(),
        height_scalar: DEFAULT_HEIGHT_SCALE,
        material: MaterialProps::solid(Color3::new(0.10, 0.65, 0.15), Color3::BLACK, 1.0),
    };

    let models = vec![
        Model::new(
            "sphere",
            ModelShape::Sphere {
                segments: DEFAULT_RING_SEGMENTS,
            },
            Vec3::new(1.0, 0.5, 3.0),
            MaterialProps::solid(Color3::new(0.10, 0.35, 0.88), Color3::gray(0.8), 16.0),
        ),
        Model::new(
            "box",
            ModelShape::Box {
                width: 2.0,
                height: 1.0,
                depth: 1.0,
            },
            Vec3::new(-1.0, 0.5, 2.0),
            MaterialProps::solid(Color3::new(0.75, 0.15, 0.05), Color3::gray(0.4), 4.0),
        ),
        Model::new(
            "ring",
            ModelShape::Ring(RingParams::new(DEFAULT_RING_SEGMENTS, 0.5, 0.25, 0.25)),
            Vec3::new(0.0, 0.5, -1.0),
            MaterialProps::solid(Color3::new(0.95, 0.75, 0.05), Color3::gray(0.6), 8.0),
        ),
    ];

    SceneDescription {
        name: "still_life".to_string(),
        background: Color4::new(0.1, 0.1, 0.1, 1.0),
        ambient: Color3::gray(0.2),
        camera: CameraRig::default(),
        lights: vec![
            PointLight::new("light0", Vec3::new(1.0, 1.0, 5.0), Color3::WHITE),
            PointLight::new("light1", Vec3::new(0.0, 3.0, 0.0), Color3::WHITE),
        ],
        models,
        ground: Some(ground),
    }
}

fn ringed_planet(name: &str, lights: Vec<PointLight>, planet_color: Color3) -> SceneDescription {
    let center = Vec3::new(0.0, 0.0, -1.0);

    let planet = Model::new(
        "sphere",
        ModelShape::Sphere {
            segments: DEFAULT_RING_SEGMENTS,
        },
        center,
        MaterialProps::textured("textures/saturnmap.jpg", Color3::gray(0.2), 1.0, Vec2::ONE)
            .with_color(planet_color),
    )
    .rotated_z(-30.0);

    let ring = Model::new(
        "ring",
        ModelShape::Ring(RingParams::new(DEFAULT_RING_SEGMENTS, 1.0, 0.01, 0.25)),
        center,
        MaterialProps::textured(
            "textures/saturnringcolor.jpg",
            Color3::gray(0.6),
            8.0,
            Vec2::splat(4.0),
        ),
    )
    .rotated_z(-120.0);

    SceneDescription {
        name: name.to_string(),
        background: Color4::new(0.0, 0.0, 0.0, 1.0),
        ambient: Color3::gray(0.1),
        camera: CameraRig::default(),
        lights,
        models: vec![planet, ring],
        ground: None,
    }
}
