//! Background color for rays that leave the scene.

use std::f32::consts::PI;

use crate::{Color, Texture};
use glint_math::{Interval, Vec3};

/// Sample an environment map by direction (nearest pixel).
///
/// Longitude comes from `atan2(z, x)` and latitude from `acos(y)`. Both pixel
/// coordinates are clamped, so any direction reads inside the map.
pub fn sample_environment(direction: Vec3, env: &Texture) -> Color {
    let u = (direction.z.atan2(direction.x) / (2.0 * PI) + 0.5) * env.width as f32;
    let v = direction.y.clamp(-1.0, 1.0).acos() / PI * env.height as f32;

    let x = Interval::new(0.0, env.width.saturating_sub(1) as f32).clamp(u.floor());
    let y = Interval::new(0.0, env.height.saturating_sub(1) as f32).clamp(v.floor());

    env.get(x as u32, y as u32)
}

/// Color of a ray that escapes: the environment sample, or `fallback` when
/// there is no map.
#[inline]
pub fn escape_color(direction: Vec3, env: Option<&Texture>, fallback: Color) -> Color {
    match env {
        Some(env) => sample_environment(direction, env),
        None => fallback,
    }
}
