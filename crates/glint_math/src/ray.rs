use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Shading math in the renderer assumes `direction` is unit length; use
/// [`Ray::normalized`] when building a ray from an arbitrary vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with its direction normalized.
    ///
    /// The direction must not be zero length.
    pub fn normalized(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction.normalize())
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
