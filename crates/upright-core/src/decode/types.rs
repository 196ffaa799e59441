//! Core types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is empty or its container is not recognized.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// A decoded image with RGB pixel data.
///
/// The buffer has a single owner: the decoder hands it to the transform,
/// which hands it to the encoder. It is freed when the last stage drops it,
/// including on early returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Move the buffer into an image::RgbImage without copying.
    ///
    /// Fails with `CorruptedFile` if the buffer length does not match the
    /// dimensions.
    pub fn into_rgb_image(self) -> Result<image::RgbImage, DecodeError> {
        let (width, height, len) = (self.width, self.height, self.pixels.len());
        let mismatch = || {
            DecodeError::CorruptedFile(format!(
                "pixel buffer of {len} bytes does not fit {width}x{height}"
            ))
        };
        if len != (width as usize) * (height as usize) * 3 {
            return Err(mismatch());
        }
        image::RgbImage::from_raw(width, height, self.pixels).ok_or_else(mismatch)
    }

    /// RGB value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }
}
