//! Renderable trait, HitRecord, and the scene intersector.

use crate::{Material, Ray};
use glint_math::{Interval, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the (unit) ray direction
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit outward surface normal at the hit point
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for primitives that can be hit by rays.
pub trait Renderable: Send + Sync {
    /// Intersect a ray with a unit-length direction against this object.
    ///
    /// Returns the nearest non-negative hit, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord>;
}

/// An ordered list of renderable objects, intersected by linear scan.
#[derive(Default)]
pub struct RenderableList {
    objects: Vec<Box<dyn Renderable>>,
}

impl RenderableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn Renderable>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest hit in front of the ray origin.
    ///
    /// Every object is tested. Only distances in `(0, render_distance)` count,
    /// and on equal distances the earlier object in the list wins.
    pub fn nearest_hit(&self, ray: &Ray, render_distance: f32) -> Option<HitRecord> {
        let range = Interval::in_front(render_distance);
        let mut nearest: Option<HitRecord> = None;

        for object in &self.objects {
            let Some(hit) = object.intersect(ray) else {
                continue;
            };
            if !range.surrounds(hit.distance) {
                continue;
            }
            if nearest.map_or(true, |best| hit.distance < best.distance) {
                nearest = Some(hit);
            }
        }

        nearest
    }
}

impl FromIterator<Box<dyn Renderable>> for RenderableList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Renderable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Albedo, Color, Sphere};

    fn tinted(r: f32) -> Material {
        Material::new(1.0, Albedo::default(), Color::new(r, 0.0, 0.0), 10.0)
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_list_misses() {
        let list = RenderableList::new();
        assert!(list.is_empty());
        assert!(list.nearest_hit(&forward(), 1000.0).is_none());
    }

    #[test]
    fn test_nearest_of_several() {
        let mut list = RenderableList::new();
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, tinted(0.1))));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, tinted(0.2))));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, tinted(0.3))));
        assert_eq!(list.len(), 3);

        let hit = list.nearest_hit(&forward(), 1000.0).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert_eq!(hit.material, tinted(0.2));
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let center = Vec3::new(0.0, 0.0, -5.0);
        let list: RenderableList = vec![
            Box::new(Sphere::new(center, 1.0, tinted(0.7))) as Box<dyn Renderable>,
            Box::new(Sphere::new(center, 1.0, tinted(0.9))),
        ]
        .into_iter()
        .collect();

        let hit = list.nearest_hit(&forward(), 1000.0).unwrap();
        assert_eq!(hit.material, tinted(0.7));
    }

    #[test]
    fn test_render_distance_cutoff() {
        let mut list = RenderableList::new();
        list.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2000.0),
            10.0,
            tinted(0.5),
        )));

        assert!(list.nearest_hit(&forward(), 1000.0).is_none());
        assert!(list.nearest_hit(&forward(), 5000.0).is_some());
    }

    #[test]
    fn test_objects_behind_origin_are_ignored() {
        let mut list = RenderableList::new();
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, tinted(0.5))));
        assert!(list.nearest_hit(&forward(), 1000.0).is_none());
    }
}
