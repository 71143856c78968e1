//! The renderable scene: objects, lights and the camera position.

use glint_core::{SceneDescription, SceneResult};
use glint_math::Vec3;

use crate::{LightSource, Renderable, RenderableList, Sphere};

/// Everything a render reads besides the environment map.
///
/// Built once before rendering and shared immutably by all row tasks.
#[derive(Default)]
pub struct World {
    pub camera: Vec3,
    pub objects: RenderableList,
    pub lights: Vec<LightSource>,
}

impl World {
    /// Create an empty world with the camera at `camera`.
    pub fn new(camera: Vec3) -> Self {
        Self {
            camera,
            objects: RenderableList::new(),
            lights: Vec::new(),
        }
    }

    /// Add an object to the world.
    pub fn add_object(&mut self, object: impl Renderable + 'static) {
        self.objects.add(Box::new(object));
    }

    /// Add a point light to the world.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// Build a world from a validated scene description.
    ///
    /// Sphere and light order is preserved.
    pub fn from_description(scene: &SceneDescription) -> SceneResult<Self> {
        scene.validate()?;

        let mut world = World::new(scene.camera);
        for sphere in &scene.spheres {
            let material = scene.material_for(sphere)?;
            world.add_object(Sphere::new(sphere.center, sphere.radius, material));
        }
        for light in &scene.lights {
            world.add_light(*light);
        }

        log::debug!(
            "Built world: {} objects, {} lights",
            world.objects.len(),
            world.lights.len()
        );

        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use glint_core::{SceneError, SphereDesc};
    use glint_math::Ray;

    #[test]
    fn test_from_demo_description() {
        let world = World::from_description(&SceneDescription::demo()).unwrap();
        assert_eq!(world.camera, Vec3::ZERO);
        assert_eq!(world.objects.len(), 4);
        assert_eq!(world.lights.len(), 3);
        assert_eq!(world.lights[1].intensity, 1.8);
    }

    #[test]
    fn test_materials_are_resolved() {
        let world = World::from_description(&SceneDescription::demo()).unwrap();

        // Straight at the red sphere's center from the origin
        let ray = Ray::normalized(Vec3::ZERO, Vec3::new(1.5, -0.5, -18.0));
        let hit = world.objects.nearest_hit(&ray, 1000.0).unwrap();
        assert_eq!(hit.material, Material::red_rubber());
    }

    #[test]
    fn test_invalid_description_is_rejected() {
        let mut scene = SceneDescription::new();
        scene
            .spheres
            .push(SphereDesc::new(Vec3::new(0.0, 0.0, -5.0), 1.0, "missing"));

        assert!(matches!(
            World::from_description(&scene),
            Err(SceneError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn test_manual_construction() {
        let mut world = World::new(Vec3::new(0.0, 1.0, 0.0));
        world.add_object(Sphere::new(Vec3::new(0.0, 1.0, -5.0), 1.0, Material::ivory()));
        world.add_light(LightSource::new(Vec3::new(0.0, 10.0, 0.0), 1.0));

        assert_eq!(world.objects.len(), 1);
        assert_eq!(world.lights.len(), 1);
    }
}
