//! Linear RGB pixel grids.
//!
//! Environment maps are stored as a `Texture` once at startup and shared
//! read-only by every ray for the whole render.

use glint_math::Color;

/// A loaded texture with pixel data.
///
/// Pixels are linear RGB, row-major, `(0, 0)` at the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    pub pixels: Vec<Color>,

    /// Original file path (for debugging)
    pub path: String,
}

impl Texture {
    /// Create a new texture from pixel data.
    ///
    /// `pixels.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>, path: impl Into<String>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Create a texture where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
            path: "<solid>".to_string(),
        }
    }

    /// Build a texture by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels, "<generated>")
    }

    /// Get pixel at integer coordinates. Out-of-range reads return black.
    pub fn get(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::ZERO;
        }
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.pixels.get(idx).copied().unwrap_or(Color::ZERO)
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Color>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_texture() {
        let tex = Texture::filled(4, 2, Color::new(1.0, 0.5, 0.0));
        assert_eq!(tex.width, 4);
        assert_eq!(tex.height, 2);
        assert_eq!(tex.pixels.len(), 8);
        assert_eq!(tex.get(3, 1), Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let tex = Texture::from_fn(3, 2, |x, y| Color::new(x as f32, y as f32, 0.0));
        assert_eq!(tex.get(2, 0), Color::new(2.0, 0.0, 0.0));
        assert_eq!(tex.get(1, 1), Color::new(1.0, 1.0, 0.0));
        assert_eq!(tex.pixels[4], Color::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_out_of_range_is_black() {
        let tex = Texture::filled(2, 2, Color::ONE);
        assert_eq!(tex.get(2, 0), Color::ZERO);
        assert_eq!(tex.get(0, 5), Color::ZERO);
    }
}
