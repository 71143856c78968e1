//! Image decode/encode.
//!
//! Decoding turns an image file into a linear [`Texture`] with channels in
//! [0, 1]. Encoding tone-maps a frame of unbounded linear colors down to
//! 8 bits per channel; the file format follows the path's extension.

use std::path::Path;

use glint_math::{Color, Interval};
use thiserror::Error;

use crate::texture::Texture;

/// Errors that can occur during image decode or encode.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to load image: {0}")]
    LoadError(String),

    #[error("Image codec error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pixel count {actual} does not match {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Image has no pixels")]
    Empty,
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode an image file into a linear RGB texture.
///
/// Each 8-bit channel is divided by 255; no transfer curve is applied.
pub fn decode(path: impl AsRef<Path>) -> CodecResult<Texture> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| {
        CodecError::LoadError(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(CodecError::Empty);
    }

    let pixels: Vec<Color> = rgb
        .pixels()
        .map(|p| {
            Color::new(
                p[0] as f32 / 255.0,
                p[1] as f32 / 255.0,
                p[2] as f32 / 255.0,
            )
        })
        .collect();

    let texture = Texture::new(width, height, pixels, path.to_string_lossy().to_string());

    log::debug!(
        "Decoded {} ({}x{}, {:.1} KB)",
        path.display(),
        width,
        height,
        texture.size_bytes() as f32 / 1024.0
    );

    Ok(texture)
}

/// Encode a row-major frame of linear colors to an image file.
pub fn encode(width: u32, height: u32, pixels: &[Color], path: impl AsRef<Path>) -> CodecResult<()> {
    let path = path.as_ref();
    if width == 0 || height == 0 {
        return Err(CodecError::Empty);
    }
    if pixels.len() != (width as usize) * (height as usize) {
        return Err(CodecError::SizeMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }

    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let idx = (y as usize) * (width as usize) + x as usize;
        image::Rgb(tone_map(pixels[idx]))
    });
    img.save(path)?;

    log::debug!("Encoded {}x{} frame to {}", width, height, path.display());
    Ok(())
}

/// Map a linear color to 8-bit RGB.
///
/// If any channel exceeds 1 the whole color is scaled down by its largest
/// channel, then each channel is clamped to [0, 1] and quantized.
pub fn tone_map(color: Color) -> [u8; 3] {
    let max = color.max_element();
    let color = if max > 1.0 { color * (1.0 / max) } else { color };

    let quantize = |v: f32| (255.0 * Interval::UNIT.clamp(v)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_tone_map_in_range() {
        assert_eq!(tone_map(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
    }

    #[test]
    fn test_tone_map_scales_bright_colors() {
        // Hue is preserved: the largest channel maps to 255
        assert_eq!(tone_map(Color::new(2.0, 1.0, 0.0)), [255, 127, 0]);
    }

    #[test]
    fn test_tone_map_clamps_negative_and_nan() {
        assert_eq!(tone_map(Color::new(-0.5, f32::NAN, 0.25)), [0, 0, 63]);
    }

    #[test]
    fn test_encode_then_decode() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let pixels = vec![
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
            Color::new(4.0, 2.0, 2.0),
            Color::new(0.0, 0.0, 0.0),
            Color::new(1.0, 1.0, 1.0),
        ];
        encode(3, 2, &pixels, &path).unwrap();

        let tex = decode(&path).unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.get(0, 0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.get(2, 0), Color::new(0.0, 0.0, 1.0));
        assert_eq!(tex.get(2, 1), Color::ONE);

        let scaled = tex.get(0, 1);
        assert_eq!(scaled.x, 1.0);
        assert!((scaled.y - 127.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_encode_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");
        encode(2, 2, &[Color::splat(0.5); 4], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_encode_rejects_bad_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        assert!(matches!(
            encode(2, 2, &[Color::ZERO; 3], &path),
            Err(CodecError::SizeMismatch { actual: 3, .. })
        ));
        assert!(matches!(encode(0, 2, &[], &path), Err(CodecError::Empty)));
    }

    #[test]
    fn test_decode_missing_file() {
        assert!(matches!(
            decode("/nonexistent/envmap.jpg"),
            Err(CodecError::LoadError(_))
        ));
    }

    #[test]
    fn test_encode_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");

        assert!(matches!(
            encode(1, 1, &[Color::ONE], &path),
            Err(CodecError::ImageError(_))
        ));
    }
}
