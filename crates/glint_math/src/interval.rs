/// A range of ray parameters or pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Hit distances accepted by the scene intersector: (0, render_distance).
    pub fn in_front(render_distance: f32) -> Self {
        Self::new(0.0, render_distance)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max]. NaN maps to `min`.
    pub fn clamp(&self, x: f32) -> f32 {
        if x.is_nan() {
            return self.min;
        }
        x.clamp(self.min, self.max)
    }

    /// Unit interval [0, 1], the displayable range of a color channel.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
