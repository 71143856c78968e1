//! Camera for primary ray generation.

use crate::Ray;
use glint_math::Vec3;

/// Sub-pixel position sampled within each pixel, from its top-left corner.
pub const PIXEL_OFFSET: f32 = 1e-3;

/// Camera looking down -Z with +Y up.
///
/// Pixel `(0, 0)` is the top-left corner of the frame. The half-extent of the
/// image plane at unit distance is `tanh(fov / 2)`, so a 90 degree FOV spans
/// about 66 degrees vertically.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in degrees
    fov: f32,
}

impl Camera {
    /// Create a camera at `position` with a 1920x1080 frame and 90 degree FOV.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            image_width: 1920,
            image_height: 1080,
            fov: 90.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees;
        self
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Half-height of the image plane at unit distance.
    pub fn half_extent(&self) -> f32 {
        (self.fov.to_radians() / 2.0).tanh()
    }

    /// Generate the unit-direction ray through pixel (i, j).
    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Ray {
        let half_extent = self.half_extent();

        let x = (2.0 * (i as f32 + PIXEL_OFFSET) / self.image_width as f32 - 1.0)
            * half_extent
            * self.aspect_ratio();
        let y = -(2.0 * (j as f32 + PIXEL_OFFSET) / self.image_height as f32 - 1.0) * half_extent;

        Ray::normalized(self.position, Vec3::new(x, y, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
