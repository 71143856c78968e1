//! Scene description types for glint.
//!
//! A scene is a camera position, an ordered list of spheres and an ordered
//! list of point lights. Everything here is plain data: it is built once,
//! validated, and then handed to the renderer which never mutates it.

use std::collections::BTreeMap;
use std::path::Path;

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Light {index} has negative intensity {intensity}")]
    NegativeIntensity { index: usize, intensity: f32 },

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Non-finite value in {0}")]
    NonFinite(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// How a surface splits outgoing radiance among the four shading channels.
///
/// The weights are independent and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Albedo {
    pub diffuse: f32,
    pub specular: f32,
    pub reflect: f32,
    pub refract: f32,
}

impl Albedo {
    pub const fn new(diffuse: f32, specular: f32, reflect: f32, refract: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflect,
            refract,
        }
    }
}

impl Default for Albedo {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

/// Surface material, copied by value into every object that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction used for Snell's law (1.0 = vacuum)
    pub refractive_index: f32,

    /// Channel weights
    pub albedo: Albedo,

    /// Base color of the diffuse term (linear RGB)
    pub diffuse_color: Color,

    /// Phong exponent, higher values give tighter highlights
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Albedo::default(),
            diffuse_color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_exponent: 1.0,
        }
    }
}

impl Material {
    pub fn new(
        refractive_index: f32,
        albedo: Albedo,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Slightly glossy off-white.
    pub fn ivory() -> Self {
        Self::new(
            1.0,
            Albedo::new(0.6, 0.3, 0.1, 0.0),
            Color::new(0.4, 0.4, 0.3),
            50.0,
        )
    }

    /// Mostly transmissive glass.
    pub fn glass() -> Self {
        Self::new(
            1.5,
            Albedo::new(0.0, 0.5, 0.1, 0.8),
            Color::new(0.6, 0.7, 0.8),
            125.0,
        )
    }

    /// Dull red, almost no highlight.
    pub fn red_rubber() -> Self {
        Self::new(
            1.0,
            Albedo::new(0.9, 0.1, 0.0, 0.0),
            Color::new(0.3, 0.1, 0.1),
            10.0,
        )
    }

    /// Mirror with a very sharp highlight.
    pub fn mirror() -> Self {
        Self::new(
            1.0,
            Albedo::new(0.0, 10.0, 0.8, 0.0),
            Color::new(1.0, 1.0, 1.0),
            1425.0,
        )
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub position: Vec3,
    pub intensity: f32,
}

impl LightSource {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A material given inline or by name from the scene's material table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Named(String),
    Inline(Material),
}

impl From<Material> for MaterialRef {
    fn from(material: Material) -> Self {
        MaterialRef::Inline(material)
    }
}

impl From<&str> for MaterialRef {
    fn from(name: &str) -> Self {
        MaterialRef::Named(name.to_string())
    }
}

/// A sphere as described in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialRef,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: impl Into<MaterialRef>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// Everything the renderer needs besides the environment map.
///
/// Sphere order matters: equal-distance hits resolve to the earlier sphere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Camera position, the camera always looks down -Z
    #[serde(default)]
    pub camera: Vec3,

    /// Named materials referenced by spheres
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,

    pub spheres: Vec<SphereDesc>,

    pub lights: Vec<LightSource>,
}

impl SceneDescription {
    /// Create an empty scene with the camera at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Four spheres (ivory, glass, red rubber, mirror) under three point lights.
    pub fn demo() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert("ivory".to_string(), Material::ivory());
        materials.insert("glass".to_string(), Material::glass());
        materials.insert("red_rubber".to_string(), Material::red_rubber());
        materials.insert("mirror".to_string(), Material::mirror());

        Self {
            camera: Vec3::ZERO,
            materials,
            spheres: vec![
                SphereDesc::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, "ivory"),
                SphereDesc::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, "glass"),
                SphereDesc::new(Vec3::new(1.5, -0.5, -18.0), 3.0, "red_rubber"),
                SphereDesc::new(Vec3::new(7.0, 5.0, -18.0), 4.0, "mirror"),
            ],
            lights: vec![
                LightSource::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
                LightSource::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
                LightSource::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
            ],
        }
    }

    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;

        log::debug!(
            "Loaded scene {}: {} spheres, {} lights, {} materials",
            path.display(),
            scene.spheres.len(),
            scene.lights.len(),
            scene.materials.len()
        );

        Ok(scene)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the material a sphere refers to.
    pub fn material_for(&self, sphere: &SphereDesc) -> SceneResult<Material> {
        match &sphere.material {
            MaterialRef::Inline(material) => Ok(*material),
            MaterialRef::Named(name) => self
                .materials
                .get(name)
                .copied()
                .ok_or_else(|| SceneError::UnknownMaterial(name.clone())),
        }
    }

    /// Check the invariants the renderer relies on.
    ///
    /// Radii must be positive, light intensities non-negative, every vector
    /// finite and every named material defined.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.camera.is_finite() {
            return Err(SceneError::NonFinite("camera".to_string()));
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() || !sphere.radius.is_finite() {
                return Err(SceneError::NonFinite(format!("sphere {index}")));
            }
            if sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            self.material_for(sphere)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() || !light.intensity.is_finite() {
                return Err(SceneError::NonFinite(format!("light {index}")));
            }
            if light.intensity < 0.0 {
                return Err(SceneError::NegativeIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}
