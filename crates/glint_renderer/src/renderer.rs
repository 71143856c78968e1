//! Core ray tracing renderer.
//!
//! Implements Whitted-style ray tracing with:
//! - Recursive reflection and refraction up to a fixed depth
//! - Local diffuse/specular shading with shadow rays
//! - Environment map (or solid color) background
//! - One rayon task per image row

use std::path::Path;

use glint_core::codec::{self, CodecResult};
use glint_math::{offset_origin, reflect, refract};
use rayon::prelude::*;

use crate::{escape_color, illuminate, Camera, Color, Ray, Texture, World};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Hits at or beyond this distance count as misses
    pub render_distance: f32,
    /// Deepest recursion level that still intersects the scene
    pub max_depth: u32,
    /// Color of escaping rays when no environment map is supplied
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov_degrees: 90.0,
            render_distance: 1000.0,
            max_depth: 3,
            background: Color::ONE,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Past `max_depth`, or when nothing is hit, the ray takes the background.
/// Otherwise the hit is shaded as
/// `diffuse_color * diffuse * albedo.diffuse + specular * albedo.specular
///  + reflected * albedo.reflect + refracted * albedo.refract`.
pub fn cast_ray(
    ray: &Ray,
    world: &World,
    environment: Option<&Texture>,
    config: &RenderConfig,
    depth: u32,
) -> Color {
    let hit = if depth > config.max_depth {
        None
    } else {
        world.objects.nearest_hit(ray, config.render_distance)
    };
    let Some(hit) = hit else {
        return escape_color(ray.direction(), environment, config.background);
    };

    let material = hit.material;

    let reflect_dir = reflect(ray.direction(), hit.normal).normalize();
    let reflect_origin = offset_origin(hit.point, reflect_dir, hit.normal);
    let reflect_color = cast_ray(
        &Ray::new(reflect_origin, reflect_dir),
        world,
        environment,
        config,
        depth + 1,
    );

    // Total internal reflection transmits nothing
    let refract_color = match refract(ray.direction(), hit.normal, material.refractive_index) {
        Some(refract_dir) => {
            let refract_origin = offset_origin(hit.point, refract_dir, hit.normal);
            cast_ray(
                &Ray::new(refract_origin, refract_dir),
                world,
                environment,
                config,
                depth + 1,
            )
        }
        None => Color::ZERO,
    };

    let light = illuminate(
        &hit,
        ray.direction(),
        &world.lights,
        &world.objects,
        config.render_distance,
    );

    let albedo = material.albedo;
    material.diffuse_color * light.diffuse * albedo.diffuse
        + Color::ONE * light.specular * albedo.specular
        + reflect_color * albedo.reflect
        + refract_color * albedo.refract
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    environment: Option<&Texture>,
    config: &RenderConfig,
    i: u32,
    j: u32,
) -> Color {
    let ray = camera.ray_for_pixel(i, j);
    cast_ray(&ray, world, environment, config, 0)
}

/// Frame buffer of linear colors, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Tone-map and write the frame; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> CodecResult<()> {
        codec::encode(self.width, self.height, &self.pixels, path)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

/// Render the whole frame.
///
/// Rows are distributed across the rayon pool. Each row task owns its slice
/// of the buffer, so no locking is needed. Colors are stored unclamped.
pub fn render(world: &World, environment: Option<&Texture>, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::new(world.camera)
        .with_resolution(config.width, config.height)
        .with_fov(config.fov_degrees);

    log::debug!(
        "Rendering {}x{}: {} objects, {} lights, max depth {}",
        config.width,
        config.height,
        world.objects.len(),
        world.lights.len(),
        config.max_depth
    );

    let mut image = ImageBuffer::new(config.width, config.height);
    if config.width == 0 {
        return image;
    }

    image
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(&camera, world, environment, config, i as u32, j as u32);
            }
        });

    image
}
