//! Direct lighting: Lambert diffuse, Phong specular, hard shadows.
//!
//! There is no ambient term. A point that no light reaches is black apart
//! from whatever reflection and refraction bring in.

use crate::{HitRecord, LightSource, Ray, RenderableList};
use glint_math::{offset_origin, reflect, Vec3};

/// Diffuse and specular intensity accumulated over all lights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightIntensity {
    pub diffuse: f32,
    pub specular: f32,
}

/// Test whether anything blocks the segment from a hit point to a light.
///
/// The shadow ray starts slightly off the surface, on the side facing the
/// light, so the surface cannot shadow itself.
pub fn is_shadowed(
    hit: &HitRecord,
    light: &LightSource,
    objects: &RenderableList,
    render_distance: f32,
) -> bool {
    let to_light = light.position - hit.point;
    let light_distance = to_light.length();
    let light_dir = to_light / light_distance;

    let origin = offset_origin(hit.point, light_dir, hit.normal);
    match objects.nearest_hit(&Ray::new(origin, light_dir), render_distance) {
        Some(blocker) => blocker.point.distance(origin) < light_distance,
        None => false,
    }
}

/// Accumulate diffuse and specular intensity at a hit.
///
/// `view_dir` is the unit direction of the ray that produced the hit.
/// Occluded lights contribute nothing; the others are still evaluated.
pub fn illuminate(
    hit: &HitRecord,
    view_dir: Vec3,
    lights: &[LightSource],
    objects: &RenderableList,
    render_distance: f32,
) -> LightIntensity {
    let mut intensity = LightIntensity::default();

    for light in lights {
        if is_shadowed(hit, light, objects, render_distance) {
            continue;
        }

        let light_dir = (light.position - hit.point).normalize();

        intensity.diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);

        let highlight = (-reflect(-light_dir, hit.normal).dot(view_dir)).max(0.0);
        intensity.specular +=
            highlight.powf(hit.material.specular_exponent) * light.intensity;
    }

    intensity
}
