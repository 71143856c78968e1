// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{offset_origin, reflect, refract, SURFACE_EPSILON};
pub use ray::Ray;

/// Linear RGB color. Channels are not clamped until the frame is encoded.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_color_accumulates_past_one() {
        let c = Color::new(0.75, 0.75, 0.75) + Color::new(0.5, 0.25, 0.0);
        assert!(c.x > 1.0);
        assert!((c * 0.5 - Color::new(0.625, 0.5, 0.375)).length() < 1e-6);
    }
}
