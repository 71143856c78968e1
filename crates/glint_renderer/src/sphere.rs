//! Sphere primitive for ray tracing.

use crate::{
    renderable::{HitRecord, Renderable},
    Material, Ray,
};
use glint_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Renderable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        // Project the center onto the ray, then compare the squared
        // perpendicular distance against the radius.
        let to_center = self.center - ray.origin();
        let tca = to_center.dot(ray.direction());
        let d2 = to_center.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();

        // Near root, or the far one when the origin is inside the sphere
        let mut distance = tca - thc;
        if distance < 0.0 {
            distance = tca + thc;
        }
        if distance < 0.0 {
            return None;
        }

        let point = ray.at(distance);
        Some(HitRecord {
            distance,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::default())
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-5); // |oc| - r
        assert!((hit.point - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_off_axis_origin() {
        let sphere = unit_sphere_at(Vec3::new(3.0, 4.0, 0.0), 1.0);
        let direction = Vec3::new(3.0, 4.0, 0.0).normalize();
        let ray = Ray::new(Vec3::ZERO, direction);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.normal + direction).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = unit_sphere_at(Vec3::ZERO, 3.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-5);
        // Normal stays outward, same side the ray leaves through
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss_beyond_radius() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -10.0), 1.0);

        // Perpendicular distance to the center is 1.5 > radius
        let ray = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_carries_material_copy() {
        let material = Material::glass();
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(sphere.intersect(&ray).unwrap().material, material);
        assert_eq!(sphere.material(), &material);
        assert_eq!(sphere.radius(), 1.0);
        assert_eq!(sphere.center(), Vec3::new(0.0, 0.0, -5.0));
    }
}
