//! Glint Renderer - Whitted-style CPU ray tracing.
//!
//! Recursive ray casting over a list of spheres lit by point lights:
//! - Lambert diffuse and Phong specular with hard shadows
//! - Mirror reflection and Snell refraction up to a fixed depth
//! - Spherical environment map for rays that leave the scene
//!
//! Rows of the frame are rendered in parallel with rayon.

mod camera;
mod environment;
mod illumination;
mod renderable;
mod renderer;
mod sphere;
mod world;

pub use camera::Camera;
pub use environment::{escape_color, sample_environment};
pub use illumination::{illuminate, is_shadowed, LightIntensity};
pub use renderable::{HitRecord, Renderable, RenderableList};
pub use renderer::{cast_ray, render, render_pixel, ImageBuffer, RenderConfig};
pub use sphere::Sphere;
pub use world::World;

/// Re-export math and scene types used in the public API
pub use glint_core::{Albedo, LightSource, Material, Texture};
pub use glint_math::{Color, Ray, Vec3};
